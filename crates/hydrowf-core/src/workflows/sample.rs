use crate::core::io::samples::Sample;
use crate::core::wavefunction::Wavefunction;
use crate::engine::config::SamplingConfig;
use crate::engine::error::EngineError;
use crate::engine::grid::{self, GridPoint};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Points evaluated between two progress reports.
const EVALUATION_CHUNK_SIZE: usize = 256;

/// Evaluates the configured orbital at every point of the configured grid.
///
/// The orbital is resolved before any point is generated, so an untabulated key fails
/// immediately. Samples are returned in grid order regardless of whether evaluation
/// ran in parallel.
///
/// # Errors
///
/// Returns [`EngineError::Wavefunction`] if the orbital is not tabulated.
#[instrument(skip_all, name = "sample_workflow", fields(orbital = %config.orbital))]
pub fn run(
    config: &SamplingConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Sample>, EngineError> {
    let wavefunction = Wavefunction::resolve(config.orbital)?;
    info!(label = ?config.orbital.label(), "Resolved wavefunction.");

    reporter.report(Progress::PhaseStart {
        name: "Generating grid",
    });
    let points = grid::generate_points(&config.grid);
    reporter.report(Progress::PhaseFinish);
    debug!(num_points = points.len(), grid = ?config.grid, "Grid generated.");

    if points.is_empty() {
        return Ok(Vec::new());
    }

    reporter.report(Progress::PhaseStart {
        name: "Evaluating wavefunction",
    });
    reporter.report(Progress::TaskStart {
        total_steps: points.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let chunks = points.chunks(EVALUATION_CHUNK_SIZE);

    #[cfg(feature = "parallel")]
    let chunks = points.par_chunks(EVALUATION_CHUNK_SIZE);

    let evaluated: Vec<Vec<Sample>> = chunks
        .map(|chunk| {
            let batch: Vec<Sample> = chunk
                .iter()
                .map(|point| evaluate_point(&wavefunction, point))
                .collect();
            reporter.report(Progress::TaskAdvance {
                steps: chunk.len() as u64,
            });
            batch
        })
        .collect();
    let samples = evaluated.concat();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    info!(num_samples = samples.len(), "Sampling complete.");

    Ok(samples)
}

#[inline]
fn evaluate_point(wavefunction: &Wavefunction, point: &GridPoint) -> Sample {
    let amplitude = wavefunction.evaluate_at(&point.spherical);
    Sample::new(&point.cartesian, &point.spherical, amplitude)
}
