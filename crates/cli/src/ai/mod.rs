//! Model and reference-document access

pub mod client;
pub mod reference;

use async_trait::async_trait;

pub use client::{GatewayError, OpenAiClient};
pub use reference::{HttpReferenceSource, ReferenceError, ReferenceSource};

/// A hosted language model: system message + prompt in, text out
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GatewayError>;
}
