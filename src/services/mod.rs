//! Business service modules
//!
//! Defines the generative-model seam and its Gemini implementation

pub mod gemini;
pub mod prompt;

use crate::models::gemini::Part;
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Generative-model seam.
///
/// The handler only depends on this trait, so tests can substitute a
/// scripted double for the real Gemini client.
#[async_trait]
pub trait GenerativeModel: Send + Sync + std::fmt::Debug {
    /// Submit one single-turn request and return the raw completion text
    async fn generate_content(&self, model: &str, parts: Vec<Part>) -> AppResult<String>;
}

pub use gemini::GeminiClient;
