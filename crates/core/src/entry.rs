use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Answer used when a field could not be extracted
pub const NOT_FOUND_ANSWER: &str = "Information not found in transcript";

/// Skeleton context: the element was asked about but not answered
pub const NO_INFORMATION_CONTEXT: &str = "No information found";

/// Backfill context: the model reply omitted the element entirely
pub const MISSING_FROM_RESPONSE_CONTEXT: &str = "Element not found in GPT-4 response";

/// How sure the model is about an answer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One extracted field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpectedEntry {
    pub answer: String,
    pub confidence: Confidence,
    pub context: String,
}

impl ExpectedEntry {
    /// Placeholder written into the prompt skeleton
    pub fn placeholder() -> Self {
        Self::not_found(NO_INFORMATION_CONTEXT)
    }

    /// Placeholder for ids the model left out of its reply
    pub fn missing_from_response() -> Self {
        Self::not_found(MISSING_FROM_RESPONSE_CONTEXT)
    }

    fn not_found(context: &str) -> Self {
        Self {
            answer: NOT_FOUND_ANSWER.to_string(),
            confidence: Confidence::Low,
            context: context.to_string(),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "answer": self.answer,
            "confidence": self.confidence,
            "context": self.context,
        })
    }
}

/// Element id -> entry.
///
/// Values stay as raw JSON because model-supplied entries pass through
/// unvalidated. Keys iterate in insertion order.
pub type ExpectedStructure = Map<String, JsonValue>;
