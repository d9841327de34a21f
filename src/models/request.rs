//! Inbound request types
//!
//! Bodies are parsed leniently (all fields optional) so that a
//! syntactically valid body with missing fields produces a field-level
//! validation error rather than a JSON parse error.

use serde::Deserialize;

/// Body of `POST /analyze`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Text selection to fact-check
    pub text: Option<String>,
    /// Page the text was found on
    pub url: Option<String>,
    /// Model override, defaulted when absent
    pub model: Option<String>,
}

/// Body of `POST /analyze_image`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeImageRequest {
    /// Data-URI encoded image (`<header>,<base64-payload>`)
    pub image: Option<String>,
    /// Page the image was found on
    pub url: Option<String>,
    /// Model override, defaulted when absent
    pub model: Option<String>,
}

impl AnalyzeTextRequest {
    /// Extract required fields, rejecting absent or empty values
    pub fn require_fields(self) -> Result<(String, String, Option<String>), String> {
        match (self.text, self.url) {
            (Some(text), Some(url)) if !text.is_empty() && !url.is_empty() => {
                Ok((text, url, self.model))
            }
            _ => Err("'text' and 'url' are required.".to_string()),
        }
    }
}

impl AnalyzeImageRequest {
    /// Extract required fields, rejecting absent or empty values
    pub fn require_fields(self) -> Result<(String, String, Option<String>), String> {
        match (self.image, self.url) {
            (Some(image), Some(url)) if !image.is_empty() && !url.is_empty() => {
                Ok((image, url, self.model))
            }
            _ => Err("'image' and 'url' are required.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_complete() {
        let request: AnalyzeTextRequest =
            serde_json::from_str(r#"{"text":"claim","url":"https://example.com"}"#).unwrap();
        let (text, url, model) = request.require_fields().unwrap();
        assert_eq!(text, "claim");
        assert_eq!(url, "https://example.com");
        assert!(model.is_none());
    }

    #[test]
    fn test_text_request_missing_text() {
        let request: AnalyzeTextRequest =
            serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        let err = request.require_fields().unwrap_err();
        assert_eq!(err, "'text' and 'url' are required.");
    }

    #[test]
    fn test_text_request_empty_field_rejected() {
        let request: AnalyzeTextRequest =
            serde_json::from_str(r#"{"text":"","url":"https://example.com"}"#).unwrap();
        assert!(request.require_fields().is_err());
    }

    #[test]
    fn test_image_request_missing_image() {
        let request: AnalyzeImageRequest =
            serde_json::from_str(r#"{"text":"x","url":"https://example.com"}"#).unwrap();
        let err = request.require_fields().unwrap_err();
        assert_eq!(err, "'image' and 'url' are required.");
    }

    #[test]
    fn test_model_override_passes_through() {
        let request: AnalyzeTextRequest = serde_json::from_str(
            r#"{"text":"claim","url":"https://example.com","model":"gemini-1.5-pro"}"#,
        )
        .unwrap();
        let (_, _, model) = request.require_fields().unwrap();
        assert_eq!(model.as_deref(), Some("gemini-1.5-pro"));
    }
}
