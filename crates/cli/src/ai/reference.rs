//! Reference document (OASIS manual) retrieval

use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_MANUAL_URL: &str =
    "https://www.cms.gov/files/document/draft-oasis-e1-manual-04-28-2024.pdf";

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Reference document returned status {0}")]
    Status(u16),
}

/// Source of guidance text for preamble training
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn fetch(&self) -> Result<String, ReferenceError>;
}

/// Plain unauthenticated GET against a fixed URL
#[derive(Clone)]
pub struct HttpReferenceSource {
    http: reqwest::Client,
    url: String,
}

impl HttpReferenceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ReferenceSource for HttpReferenceSource {
    async fn fetch(&self) -> Result<String, ReferenceError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(ReferenceError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
