//! transcript-analyzer library crate
//!
//! Exposes `build_analyzer` and the pipeline pieces for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod ai;
pub mod config;
pub mod error;
pub mod processor;
pub mod training;

use std::sync::Arc;

use transcript_core::Catalog;

use ai::{HttpReferenceSource, OpenAiClient};
use config::Config;
use processor::Analyzer;
use training::{PreambleBuilder, PreambleStore};

pub use error::AppError;
pub use processor::TranscriptInput;

/// Wire the analyzer from configuration with the OASIS catalog.
///
/// Extracted from `main()` so integration tests can point it at mock
/// endpoints.
pub fn build_analyzer(config: &Config) -> Analyzer {
    let catalog = Arc::new(Catalog::oasis());

    let client = OpenAiClient::new(config.openai_api_key.clone())
        .with_base_url(config.openai_base_url.clone())
        .with_model(config.model.clone())
        .with_temperature(config.temperature);
    tracing::debug!(model = client.model(), "Completion client configured");
    let gateway: Arc<dyn ai::CompletionGateway> = Arc::new(client);
    let reference = Arc::new(HttpReferenceSource::new(config.manual_url.clone()));

    let store = PreambleStore::new(config.training_dir.clone());
    let builder = PreambleBuilder::new(catalog.clone(), gateway.clone(), reference, store.clone());

    Analyzer::new(catalog, gateway, store, builder)
}
