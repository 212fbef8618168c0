use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::AnalysisError;

/// A named field extracted from a transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentationElement {
    pub id: String,
    pub question: String,
    /// Hint about where the guidance for this element lives
    pub context: String,
}

impl DocumentationElement {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            context: context.into(),
        }
    }
}

/// Ordered, immutable set of documentation elements.
///
/// Iteration order is the order elements were supplied in; the prompt
/// skeleton and the reconciled result both follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    elements: Vec<DocumentationElement>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and repeated ids
    pub fn new(elements: Vec<DocumentationElement>) -> Result<Self, AnalysisError> {
        if elements.is_empty() {
            return Err(AnalysisError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for element in &elements {
            if !seen.insert(element.id.as_str()) {
                return Err(AnalysisError::DuplicateElementId(element.id.clone()));
            }
        }

        Ok(Self { elements })
    }

    /// The OASIS-E1 home health elements the analyzer ships with
    pub fn oasis() -> Self {
        Self {
            elements: vec![
                DocumentationElement::new(
                    "D0700_social_isolation",
                    "Identify the patient's actual or perceived lack of contact with other people, such as living alone or residing in a remote area.",
                    "Use guidance for D0700: Social Isolation in the Oasis E1 manual",
                ),
                DocumentationElement::new(
                    "M1830_bathing",
                    "Identify the patient's ability to bathe their entire body and the assistance that may be required to safely bathe, including transferring in/out of the tub/shower.",
                    "Use guidance for M1830: Bathing in the Oasis E1 manual",
                ),
                DocumentationElement::new(
                    "GG0170_mobility",
                    "Identify the patient's ability to perform basic self-care and mobility activities.",
                    "Use guidance for GG0170 Mobility in the Oasis E1 manual",
                ),
                DocumentationElement::new(
                    "vital_signs",
                    "What are the patient's vital signs?",
                    "Extract numerical values and units for each of these vital signs: heart rate, blood pressure, respiratory rate, and blood sugar level.",
                ),
                DocumentationElement::new(
                    "statement_of_summary",
                    "Provide a Clinical Statement of Summary",
                    "Extract a concise summary of the patient's medical history, including diagnoses, medications, and relevant test results",
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentationElement> {
        self.elements.iter()
    }

    /// Element ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.id.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::oasis()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DocumentationElement;
    type IntoIter = std::slice::Iter<'a, DocumentationElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
