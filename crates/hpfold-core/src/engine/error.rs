use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::residue::SequenceParseError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid sequence: {source}")]
    Sequence {
        #[from]
        source: SequenceParseError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Search produced an invalid fold: {reason}")]
    InvalidFold { reason: String },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
