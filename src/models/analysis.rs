//! Analysis verdict types
//!
//! The model is instructed to reply with one of three JSON shapes; they
//! are modeled as an untagged union so the reply is validated against the
//! schema instead of being forwarded as opaque JSON. Field order in the
//! structs matches the serialized order consumers see.

use serde::{Deserialize, Serialize};

/// Heading used by the ambiguous-input variant
pub const AMBIGUOUS_HEADING: &str = "Ambiguous Search Query Result";

/// Outcome of one analysis request.
///
/// Variant order matters for `#[serde(untagged)]` decoding: a full
/// verdict carries `brief_info`, the ambiguous variant carries the
/// hyphenated `brief-info` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Full factual-correctness verdict
    Verdict(AnalysisVerdict),
    /// Input was not a checkable factual statement
    Ambiguous(AmbiguousVerdict),
    /// Upstream or parse failure, surfaced as data
    Error(AnalysisError),
}

/// Factual-correctness verdict for a checkable statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisVerdict {
    /// Brief, neutral title for the analyzed text
    pub heading: String,
    /// Factual correctness from 0 to 100
    pub percentage: u8,
    /// Short summary of the analysis
    pub brief_info: String,
    /// Supporting or corrective detail
    pub reasoning: String,
    /// URLs directly substantiating the verdict
    pub sources: Vec<String>,
}

/// Fixed-shape reply for input that cannot be fact-checked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbiguousVerdict {
    /// Explanation of why the input could not be analyzed
    #[serde(rename = "brief-info")]
    pub brief_info: String,
    /// Always 0 for ambiguous input
    pub percentage: u8,
    /// Always [`AMBIGUOUS_HEADING`]
    pub heading: String,
    /// Always empty
    pub reasoning: String,
    /// Always empty
    pub sources: Vec<String>,
}

/// Error payload returned in the response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisError {
    /// Error message
    pub error: String,
    /// Original model reply, kept for diagnosis of parse failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl AnalysisOutcome {
    /// Parse a raw model reply into an outcome.
    ///
    /// The reply nominally contains only a JSON object but may be wrapped
    /// in a fenced code block; the fence markers are stripped before
    /// parsing. A reply that still fails to parse is surfaced as an error
    /// outcome carrying the original, uncleaned text.
    pub fn from_model_reply(raw: &str) -> Self {
        let cleaned = strip_code_fences(raw);
        match serde_json::from_str::<AnalysisOutcome>(cleaned) {
            Ok(outcome) => outcome,
            Err(_) => AnalysisOutcome::Error(AnalysisError {
                error: "Failed to parse Gemini response as JSON".to_string(),
                raw_response: Some(raw.to_string()),
            }),
        }
    }

    /// Build a bare error outcome with no raw response attached
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisOutcome::Error(AnalysisError {
            error: message.into(),
            raw_response: None,
        })
    }
}

/// Strip a leading ```` ```json ```` marker and a trailing ```` ``` ````
/// marker from a model reply
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped;
    }
    text.trim()
}
