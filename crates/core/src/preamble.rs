//! System preamble text: distillation request and final composition

use crate::catalog::Catalog;

/// Opening role sentence of every preamble
pub const ROLE_STATEMENT: &str = "You are a medical documentation assistant trained to extract specific information from clinical transcripts according to OASIS guidelines.";

/// System message for the guidance distillation call
pub const DISTILL_SYSTEM_PROMPT: &str = "You are a medical documentation expert. Extract only the relevant sections from the OASIS manual that pertain to the following documentation elements. Be concise and focus on the key guidelines.";

const INSTRUCTIONS: &str = r#"Instructions:
1. Analyze the transcript thoroughly to identify relevant information for each documentation element
2. For each element:
   - Only provide an answer if there is sufficient information in the transcript
   - If information is unclear or incomplete, respond with "Information not found in transcript"
3. Format the response as a JSON object with element IDs as keys
4. Include confidence level (high/medium/low) for each answer based on the clarity and completeness of information found"#;

/// User message asking the model to pull element-relevant guidance out of
/// the reference manual
pub fn distill_request(catalog: &Catalog, manual: &str) -> String {
    let elements = catalog
        .iter()
        .map(|e| format!("- {}: {}", e.id, e.question))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Please extract relevant sections from the OASIS manual for these elements:\n{elements}\n\nManual content:\n{manual}"
    )
}

/// Compose the system preamble.
///
/// Without `guidance` this is the catalog-only fallback template.
pub fn compose(catalog: &Catalog, guidance: Option<&str>) -> String {
    let mut text = String::new();
    text.push_str(ROLE_STATEMENT);
    text.push_str("\n\n");

    if let Some(guidance) = guidance {
        text.push_str("OASIS Guidelines:\n");
        text.push_str(guidance);
        text.push_str("\n\n");
    }

    text.push_str(
        "Your task is to analyze clinical transcripts and extract information for the following documentation elements:\n",
    );
    let elements = catalog
        .iter()
        .map(|e| format!("- {}: {}\n  Context: {}", e.id, e.question, e.context))
        .collect::<Vec<_>>()
        .join("\n");
    text.push_str(&elements);
    text.push_str("\n\n");
    text.push_str(INSTRUCTIONS);

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DocumentationElement;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            DocumentationElement::new("vital_signs", "What are the vitals?", "HR, BP"),
            DocumentationElement::new("bathing", "Can they bathe?", "M1830"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fallback_template() {
        let text = compose(&catalog(), None);

        assert!(text.starts_with(ROLE_STATEMENT));
        assert!(!text.contains("OASIS Guidelines:"));
        assert!(text.contains(
            "- vital_signs: What are the vitals?\n  Context: HR, BP\n- bathing: Can they bathe?\n  Context: M1830"
        ));
        assert!(text.ends_with("clarity and completeness of information found"));
    }

    #[test]
    fn test_guidance_block_precedes_elements() {
        let text = compose(&catalog(), Some("Rule A applies."));

        let guidance = text.find("OASIS Guidelines:\nRule A applies.").unwrap();
        let elements = text.find("- vital_signs:").unwrap();
        assert!(guidance < elements);
    }

    #[test]
    fn test_distill_request_lists_elements() {
        let request = distill_request(&catalog(), "MANUAL BODY");

        assert!(
            request.contains("- vital_signs: What are the vitals?\n- bathing: Can they bathe?")
        );
        assert!(request.ends_with("Manual content:\nMANUAL BODY"));
    }
}
