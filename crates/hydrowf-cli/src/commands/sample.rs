use crate::cli::SampleArgs;
use crate::config::PartialSamplingConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use hydrowf::core::io::samples::write_samples_to_path;
use hydrowf::engine::error::EngineError;
use hydrowf::engine::progress::ProgressReporter;
use hydrowf::workflows;
use tracing::{info, warn};

pub fn run(args: SampleArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSamplingConfig::from_file(path)?,
        None => PartialSamplingConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    if !final_config.orbital.is_physical() {
        warn!(
            orbital = %final_config.orbital,
            "Quantum numbers do not satisfy n >= 1, 0 <= l < n, |m| <= l."
        );
    }

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        orbital = %final_config.orbital,
        num_points = final_config.grid.num_points(),
        "Invoking the sampling workflow..."
    );
    let samples = workflows::sample::run(&final_config, &reporter)?;

    info!("Writing {} sample(s) to {:?}", samples.len(), &args.output);
    write_samples_to_path(&args.output, &samples).map_err(EngineError::from)?;

    if !quiet {
        println!(
            "✓ {} sample(s) of orbital {} written to: {}",
            samples.len(),
            final_config.orbital,
            args.output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use hydrowf::core::quantum::QuantumNumbers;
    use std::io::Write;

    #[test]
    fn writes_csv_for_config_file_and_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sample.toml");
        let output_path = temp_dir.path().join("out.csv");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "orbital = \"2s\"\n[grid]\ntype = \"radial\"\nr-max = 4.0").unwrap();

        let args = SampleArgs {
            config: Some(config_path),
            output: output_path.clone(),
            orbital: None,
            set_values: vec!["grid.steps=5".to_string()],
        };
        run(args, true).unwrap();

        let content = std::fs::read_to_string(output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "x,y,z,r,theta,phi,amplitude,density");
        assert!(lines[3].contains(",2.0,"));
    }

    #[test]
    fn untabulated_orbital_fails_without_writing_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("out.csv");
        let args = SampleArgs {
            config: None,
            output: output_path.clone(),
            orbital: Some(QuantumNumbers::new(4, 0, 0)),
            set_values: Vec::new(),
        };

        let result = run(args, true);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(!output_path.exists());
    }

    #[test]
    fn unwritable_output_reports_a_write_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("missing-dir").join("out.csv");
        let args = SampleArgs {
            config: None,
            output: output_path,
            orbital: Some(QuantumNumbers::new(1, 0, 0)),
            set_values: vec!["grid.steps=3".to_string()],
        };

        let err = run(args, true).unwrap_err();
        assert!(matches!(err, CliError::Engine(EngineError::Output { .. })));
        assert!(err.to_string().starts_with("Failed to write samples"));
    }

    #[test]
    fn oversized_cube_is_rejected_before_sampling() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("out.csv");
        let args = SampleArgs {
            config: None,
            output: output_path.clone(),
            orbital: Some(QuantumNumbers::new(1, 0, 0)),
            set_values: vec![
                "grid.type=cube".to_string(),
                "grid.points-per-axis=3000000".to_string(),
            ],
        };

        let result = run(args, true);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("points_per_axis")));
        assert!(!output_path.exists());
    }
}
