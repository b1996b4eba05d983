use thiserror::Error;

use super::config::ConfigError;
use crate::core::error::WavefunctionError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Wavefunction(#[from] WavefunctionError),

    #[error("Invalid sampling configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to write samples: {source}")]
    Output {
        #[from]
        source: csv::Error,
    },
}
