//! Application error handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use transcript_core::AnalysisError;

use crate::ai::GatewayError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Completion request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Failed to read transcript file {}: {source}", .path.display())]
    TranscriptFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to train model: {0}")]
    Training(#[source] io::Error),

    #[error("Failed to read system preamble {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("System preamble still missing at {} after retraining", .0.display())]
    PreambleUnavailable(PathBuf),
}

impl AppError {
    /// Raw model reply for response format failures
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AppError::Analysis(err) => err.raw_response(),
            _ => None,
        }
    }
}
