//! Analyzer configuration

use std::path::PathBuf;

use crate::ai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::ai::reference::DEFAULT_MANUAL_URL;
use crate::error::AppError;

/// Configuration loaded from environment variables (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub manual_url: String,
    pub training_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `OPENAI_API_KEY` is fatal.
    pub fn from_env() -> Result<Self, AppError> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "OPENAI_API_KEY is not set in environment variables. Please create a .env file with your API key.".into(),
                )
            })?;

        let temperature = match lookup("OPENAI_TEMPERATURE") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("OPENAI_TEMPERATURE is not a number: {raw}"))
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            temperature,
            manual_url: lookup("OASIS_MANUAL_URL")
                .unwrap_or_else(|| DEFAULT_MANUAL_URL.into()),
            training_dir: lookup("TRAINING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("training")),
        })
    }
}
