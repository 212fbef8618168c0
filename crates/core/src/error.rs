use thiserror::Error;

/// Errors raised by the prompt/reconciliation pipeline
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Transcript is empty")]
    EmptyTranscript,

    /// The model reply was not a JSON object. `raw` is kept for diagnostics.
    #[error("Failed to parse model response as JSON: {reason}")]
    ResponseFormat { reason: String, raw: String },

    #[error("Duplicate documentation element id: {0}")]
    DuplicateElementId(String),

    #[error("Documentation catalog is empty")]
    EmptyCatalog,
}

impl AnalysisError {
    /// Raw model text attached to a format error, if any
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AnalysisError::ResponseFormat { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
