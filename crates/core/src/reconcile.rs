//! Merge a model reply back onto the catalog

use serde_json::Value as JsonValue;

use crate::catalog::Catalog;
use crate::entry::{ExpectedEntry, ExpectedStructure};
use crate::error::AnalysisError;

/// Parse the model's reply and backfill every catalog id it left out.
///
/// Entries the model did return are passed through as-is, including keys
/// that are not in the catalog. Only a non-object reply is an error.
pub fn reconcile(raw: &str, catalog: &Catalog) -> Result<ExpectedStructure, AnalysisError> {
    let parsed: JsonValue =
        serde_json::from_str(raw).map_err(|e| AnalysisError::ResponseFormat {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let mut structure = match parsed {
        JsonValue::Object(map) => map,
        other => {
            return Err(AnalysisError::ResponseFormat {
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
                raw: raw.to_string(),
            });
        }
    };

    let missing = ExpectedEntry::missing_from_response().to_json();
    for id in catalog.ids() {
        if !structure.contains_key(id) {
            tracing::debug!(element = id, "Backfilling element missing from response");
            structure.insert(id.to_string(), missing.clone());
        }
    }

    Ok(structure)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
