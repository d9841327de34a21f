//! Gemini HTTP client service
//!
//! Encapsulates HTTP communication with the Gemini `generateContent` API

use crate::config::Settings;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::services::GenerativeModel;
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Gemini REST API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client instance.
    ///
    /// Fails when no API key is present in the settings; callers that
    /// tolerate a missing key decide that before constructing the client.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .gemini
            .api_key
            .clone()
            .context("Gemini API key not configured")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.gemini.timeout))
            .user_agent(concat!("factscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.gemini.base_url.clone(),
        })
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(&self, model: &str, parts: Vec<Part>) -> AppResult<String> {
        debug!("Sending Gemini generateContent request for model: {}", model);

        // Bare model IDs only; tolerate a "models/" prefix from callers
        let model = model.strip_prefix("models/").unwrap_or(model);
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let request = GenerateContentRequest::from_parts(parts);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error (status {}): {}", status, error_text);
            return Err(AppError::Upstream(format!(
                "Gemini API error (status {}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response envelope: {}", e);
            AppError::Upstream(format!("Failed to parse Gemini response envelope: {}", e))
        })?;

        body.first_text().ok_or_else(|| {
            error!("Gemini response contained no text candidates");
            AppError::Upstream("Gemini response contained no text candidates".to_string())
        })
    }
}
