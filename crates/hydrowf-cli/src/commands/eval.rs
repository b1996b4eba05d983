use crate::cli::EvalArgs;
use crate::error::{CliError, Result};
use hydrowf::core::wavefunction::Wavefunction;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub amplitude: f64,
    pub density: f64,
}

pub fn run(args: EvalArgs) -> Result<()> {
    let evaluation = evaluate(&args)?;
    println!("amplitude = {:.12e}", evaluation.amplitude);
    println!("density   = {:.12e}", evaluation.density);
    Ok(())
}

pub fn evaluate(args: &EvalArgs) -> Result<Evaluation> {
    if !args.orbital.is_physical() {
        warn!(
            orbital = %args.orbital,
            "Quantum numbers do not satisfy n >= 1, 0 <= l < n, |m| <= l."
        );
    }

    let wavefunction = Wavefunction::resolve(args.orbital)?;
    info!(orbital = %args.orbital, label = ?args.orbital.label(), "Resolved wavefunction.");

    let amplitude = match (args.theta, args.phi) {
        (Some(theta), Some(phi)) => wavefunction.evaluate(args.r, theta, phi),
        (theta, phi) => match wavefunction.evaluate_symmetric(args.r) {
            Some(amplitude) => {
                if theta.is_some() || phi.is_some() {
                    debug!("Ignoring partial angles for a spherically symmetric orbital.");
                }
                amplitude
            }
            None => {
                return Err(CliError::Argument(format!(
                    "Orbital {} depends on direction; both --theta and --phi are required.",
                    args.orbital
                )));
            }
        },
    };

    Ok(Evaluation {
        amplitude,
        density: amplitude.powi(2),
    })
}
