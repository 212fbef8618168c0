//! transcript-core: documentation catalog, prompt assembly and response
//! reconciliation for clinical transcript analysis
//!
//! Everything here is pure text/JSON work; network and file access live in
//! the analyzer crate.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod preamble;
pub mod prompt;
pub mod reconcile;

pub use catalog::{Catalog, DocumentationElement};
pub use entry::{Confidence, ExpectedEntry, ExpectedStructure};
pub use error::AnalysisError;
pub use prompt::{AssembledPrompt, assemble, validate_transcript};
pub use reconcile::reconcile;
