//! Per-transcript prompt assembly

use serde_json::Value as JsonValue;

use crate::catalog::Catalog;
use crate::entry::{ExpectedEntry, ExpectedStructure};
use crate::error::AnalysisError;

/// Prompt text plus the skeleton it embeds
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    pub prompt: String,
    pub skeleton: ExpectedStructure,
}

/// Reject transcripts that are empty after trimming whitespace.
///
/// Returns the transcript untouched; only the emptiness check trims.
pub fn validate_transcript(transcript: &str) -> Result<&str, AnalysisError> {
    if transcript.trim().is_empty() {
        return Err(AnalysisError::EmptyTranscript);
    }
    Ok(transcript)
}

/// One placeholder entry per catalog id, in catalog order
pub fn skeleton(catalog: &Catalog) -> ExpectedStructure {
    let placeholder = ExpectedEntry::placeholder().to_json();
    catalog
        .ids()
        .map(|id| (id.to_string(), placeholder.clone()))
        .collect()
}

/// Build the user prompt for a transcript.
///
/// Deterministic: the skeleton is rendered in catalog order.
pub fn assemble(transcript: &str, catalog: &Catalog) -> AssembledPrompt {
    let skeleton = skeleton(catalog);
    let rendered = format!("{:#}", JsonValue::Object(skeleton.clone()));

    let prompt = format!(
        r#"Analyze the following clinical transcript and extract information according to the documentation elements.

Transcript:
{transcript}

You must respond with a JSON object that follows this exact structure:
{rendered}

For each element:
1. If you find relevant information, update the "answer" field with the extracted information
2. Set "confidence" to "high", "medium", or "low" based on the clarity of information
3. Update "context" with a brief explanation of why this answer was provided
4. If no information is found, keep the default values

IMPORTANT: Your response must be a valid JSON object matching the structure above. Do not include any text outside the JSON structure."#
    );

    AssembledPrompt { prompt, skeleton }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DocumentationElement;
    use crate::entry::{NO_INFORMATION_CONTEXT, NOT_FOUND_ANSWER};

    fn synthetic_catalog() -> Catalog {
        Catalog::new(vec![
            DocumentationElement::new("zeta", "Last letter?", "ctx z"),
            DocumentationElement::new("alpha", "First letter?", "ctx a"),
            DocumentationElement::new("mid", "Middle?", "ctx m"),
        ])
        .unwrap()
    }

    #[test]
    fn test_skeleton_has_one_placeholder_per_id() {
        let catalog = synthetic_catalog();
        let assembled = assemble("Patient is well.", &catalog);

        assert_eq!(assembled.skeleton.len(), catalog.ids().count());
        for id in catalog.ids() {
            let entry = &assembled.skeleton[id];
            assert_eq!(entry["answer"], NOT_FOUND_ANSWER);
            assert_eq!(entry["confidence"], "low");
            assert_eq!(entry["context"], NO_INFORMATION_CONTEXT);
        }
    }

    #[test]
    fn test_skeleton_follows_catalog_order() {
        let assembled = assemble("text", &synthetic_catalog());
        let keys: Vec<_> = assembled.skeleton.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

        // Rendered skeleton keeps the same order inside the prompt
        let zeta = assembled.prompt.find("\"zeta\"").unwrap();
        let alpha = assembled.prompt.find("\"alpha\"").unwrap();
        let mid = assembled.prompt.find("\"mid\"").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_prompt_layout() {
        let transcript = "  Patient HR 78, BP 120/80.  ";
        let assembled = assemble(transcript, &synthetic_catalog());
        let prompt = &assembled.prompt;

        assert!(prompt.starts_with("Analyze the following clinical transcript"));
        assert!(prompt.contains(&format!("Transcript:\n{transcript}\n")));
        assert!(prompt.contains(
            "You must respond with a JSON object that follows this exact structure:\n{"
        ));
        assert!(prompt.contains("4. If no information is found, keep the default values"));
        assert!(prompt.ends_with("Do not include any text outside the JSON structure."));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let catalog = synthetic_catalog();
        assert_eq!(assemble("same", &catalog), assemble("same", &catalog));
    }

    #[test]
    fn test_validate_transcript() {
        assert!(matches!(
            validate_transcript(""),
            Err(AnalysisError::EmptyTranscript)
        ));
        assert!(matches!(
            validate_transcript(" \n\t "),
            Err(AnalysisError::EmptyTranscript)
        ));
        assert_eq!(validate_transcript(" ok ").unwrap(), " ok ");
    }
}
