//! Analysis handlers
//!
//! Handles the text and image fact-check endpoints: validate input, build
//! the prompt, call Gemini, clean and parse the reply. Upstream and parse
//! failures are returned as a 200 response carrying an error body, so
//! consumers always inspect the body's `error` key; only protocol and
//! configuration errors surface as HTTP failures.

use crate::handlers::AppState;
use crate::models::gemini::Part;
use crate::models::{AnalysisOutcome, AnalyzeImageRequest, AnalyzeTextRequest};
use crate::services::{prompt, GenerativeModel};
use crate::utils::error::{AppError, AppResult};
use axum::{body::Bytes, extract::State, Json};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle text analysis requests
///
/// POST /analyze
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<AnalysisOutcome>> {
    // Bytes rather than String so a non-UTF-8 body gets the same JSON
    // error shape as any other malformed body
    let request: AnalyzeTextRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidBody)?;
    let (text, url, model) = request.require_fields().map_err(AppError::Validation)?;

    let model_client = state.model()?;
    let model_name = model.unwrap_or_else(|| state.settings.gemini.default_model.clone());

    debug!("Analyzing text from {} with model {}", url, model_name);

    let prompt = prompt::text_prompt(&text, &url, &prompt::current_date());
    let outcome = match model_client
        .generate_content(&model_name, vec![Part::text(prompt)])
        .await
    {
        Ok(reply) => AnalysisOutcome::from_model_reply(&reply),
        Err(e) => {
            warn!("Gemini text analysis failed: {}", e);
            AnalysisOutcome::failure(format!(
                "An error occurred while requesting from Gemini API: {}",
                e
            ))
        }
    };

    Ok(Json(outcome))
}

/// Handle image analysis requests
///
/// POST /analyze_image
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<AnalysisOutcome>> {
    let request: AnalyzeImageRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidBody)?;
    let (image, url, model) = request.require_fields().map_err(AppError::Validation)?;

    let model_client = state.model()?;
    let model_name = model.unwrap_or_else(|| state.settings.gemini.default_model.clone());

    debug!("Analyzing image from {} with model {}", url, model_name);

    let outcome = match run_image_analysis(model_client, &model_name, &image, &url).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Gemini image analysis failed: {}", e);
            AnalysisOutcome::failure(format!(
                "An error occurred while processing the image or requesting from Gemini API: {}",
                e
            ))
        }
    };

    Ok(Json(outcome))
}

/// Decode the data-URI payload, submit prompt plus image, parse the reply
async fn run_image_analysis(
    model_client: Arc<dyn GenerativeModel>,
    model_name: &str,
    image: &str,
    url: &str,
) -> AppResult<AnalysisOutcome> {
    let payload = decode_data_uri(image)?;

    let prompt = prompt::image_prompt(url, &prompt::current_date());
    let parts = vec![
        Part::text(prompt),
        Part::inline_data("image/png", BASE64.encode(&payload)),
    ];

    let reply = model_client.generate_content(model_name, parts).await?;
    Ok(AnalysisOutcome::from_model_reply(&reply))
}

/// Decode the base64 payload of a `<header>,<base64>` data URI.
///
/// The round trip through raw bytes validates the payload before it is
/// re-encoded for the wire.
fn decode_data_uri(image: &str) -> AppResult<Vec<u8>> {
    let (_header, encoded) = image.split_once(',').ok_or_else(|| {
        AppError::ImagePayload("image must be a data URI of the form '<header>,<base64>'".to_string())
    })?;

    BASE64
        .decode(encoded.trim())
        .map_err(|e| AppError::ImagePayload(format!("invalid base64 image payload: {}", e)))
}
