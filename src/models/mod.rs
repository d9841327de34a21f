//! Data model definitions
//!
//! Contains request/response types for the analysis API and the Gemini
//! wire format

pub mod analysis;
pub mod gemini;
pub mod request;

pub use analysis::{AmbiguousVerdict, AnalysisError, AnalysisOutcome, AnalysisVerdict};
pub use request::{AnalyzeImageRequest, AnalyzeTextRequest};
