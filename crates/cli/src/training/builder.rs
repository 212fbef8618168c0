//! Preamble training: fetch guidance, distill it, compose, persist

use std::sync::Arc;

use transcript_core::{Catalog, preamble};

use super::store::PreambleStore;
use crate::ai::{CompletionGateway, ReferenceSource};
use crate::error::AppError;

/// Builds the system preamble and writes it to the store
#[derive(Clone)]
pub struct PreambleBuilder {
    catalog: Arc<Catalog>,
    gateway: Arc<dyn CompletionGateway>,
    reference: Arc<dyn ReferenceSource>,
    store: PreambleStore,
}

impl PreambleBuilder {
    pub fn new(
        catalog: Arc<Catalog>,
        gateway: Arc<dyn CompletionGateway>,
        reference: Arc<dyn ReferenceSource>,
        store: PreambleStore,
    ) -> Self {
        Self {
            catalog,
            gateway,
            reference,
            store,
        }
    }

    /// Build and persist the preamble, returning the written text.
    ///
    /// Guidance fetch and distillation failures fall back to the
    /// catalog-only template; only the write can fail.
    pub async fn build(&self) -> Result<String, AppError> {
        let guidance = match self.fetch_manual().await {
            Some(manual) => self.extract_relevant_sections(&manual).await,
            None => None,
        };

        let text = preamble::compose(&self.catalog, guidance.as_deref());
        self.store.write(&text).await?;

        tracing::info!(
            path = %self.store.path().display(),
            with_guidance = guidance.is_some(),
            "Model training completed"
        );
        Ok(text)
    }

    async fn fetch_manual(&self) -> Option<String> {
        match self.reference.fetch().await {
            Ok(manual) => {
                tracing::debug!(bytes = manual.len(), "Fetched OASIS manual");
                Some(manual)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch OASIS manual, falling back to basic training");
                None
            }
        }
    }

    async fn extract_relevant_sections(&self, manual: &str) -> Option<String> {
        let request = preamble::distill_request(&self.catalog, manual);
        match self
            .gateway
            .complete(preamble::DISTILL_SYSTEM_PROMPT, &request)
            .await
        {
            Ok(sections) => Some(sections),
            Err(e) => {
                tracing::warn!(error = %e, "Error extracting relevant sections, falling back to basic training");
                None
            }
        }
    }
}
