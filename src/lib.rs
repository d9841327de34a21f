//! Factscope Library
//!
//! Fact-check analysis backend: forwards user-submitted text and images
//! to Gemini and returns a normalized factual-correctness verdict

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with_model, AppState};
pub use models::{AnalysisOutcome, AnalysisVerdict};
pub use services::{GeminiClient, GenerativeModel};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
