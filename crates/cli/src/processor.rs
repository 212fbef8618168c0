//! Transcript analysis pipeline

use std::path::PathBuf;
use std::sync::Arc;

use tracing::Instrument;
use transcript_core::{Catalog, ExpectedStructure, assemble, reconcile, validate_transcript};

use crate::ai::CompletionGateway;
use crate::error::AppError;
use crate::training::{self, PreambleBuilder, PreambleStore};

/// Where a transcript comes from
#[derive(Debug, Clone)]
pub enum TranscriptInput {
    Text(String),
    File(PathBuf),
}

impl TranscriptInput {
    /// Resolve the input to transcript text
    pub async fn load(self) -> Result<String, AppError> {
        match self {
            TranscriptInput::Text(text) => Ok(text),
            TranscriptInput::File(path) => tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| AppError::TranscriptFile { path, source }),
        }
    }
}

/// Runs transcripts through preamble, prompt, model and reconciliation
#[derive(Clone)]
pub struct Analyzer {
    catalog: Arc<Catalog>,
    gateway: Arc<dyn CompletionGateway>,
    store: PreambleStore,
    builder: PreambleBuilder,
}

impl Analyzer {
    pub fn new(
        catalog: Arc<Catalog>,
        gateway: Arc<dyn CompletionGateway>,
        store: PreambleStore,
        builder: PreambleBuilder,
    ) -> Self {
        Self {
            catalog,
            gateway,
            store,
            builder,
        }
    }

    /// Force a preamble rebuild
    pub async fn train(&self) -> Result<String, AppError> {
        self.builder.build().await
    }

    /// Analyze a transcript given as text or a file path
    pub async fn process_input(
        &self,
        input: TranscriptInput,
    ) -> Result<ExpectedStructure, AppError> {
        let transcript = input.load().await?;
        self.process_transcript(&transcript).await
    }

    /// Analyze a transcript.
    ///
    /// Empty input is rejected before any network call. Errors from each
    /// stage propagate unchanged; nothing is retried.
    pub async fn process_transcript(
        &self,
        transcript: &str,
    ) -> Result<ExpectedStructure, AppError> {
        let transcript = validate_transcript(transcript)?;

        let span = tracing::info_span!("analysis", analysis_id = %uuid::Uuid::new_v4());
        async move {
            let system = training::get_preamble(&self.store, &self.builder).await?;

            let assembled = assemble(transcript, &self.catalog);
            tracing::debug!(
                prompt_bytes = assembled.prompt.len(),
                elements = assembled.skeleton.len(),
                "Assembled prompt"
            );

            let response = self.gateway.complete(&system, &assembled.prompt).await?;
            tracing::debug!(response_bytes = response.len(), "Received model response");

            let result = reconcile(&response, &self.catalog)?;
            tracing::info!(elements = result.len(), "Transcript analyzed");
            Ok::<_, AppError>(result)
        }
        .instrument(span)
        .await
    }
}
