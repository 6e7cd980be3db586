//! Gemini vision recognition provider.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use signsolve_core::{RecognitionRequest, Recognizer};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Recognizer backed by the Gemini `generateContent` API.
pub struct GeminiRecognizer {
    client: Client,
    api_key: String,
    base_url: String,
    relax_safety: bool,
}

impl GeminiRecognizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: crate::http_client(crate::DEFAULT_TIMEOUT),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            relax_safety: false,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = crate::http_client(timeout);
        self
    }

    /// Ask the service to relax content-safety filtering. Captcha signboards
    /// are benign, but filters occasionally refuse brand names.
    pub fn with_relaxed_safety(mut self, relax: bool) -> Self {
        self.relax_safety = relax;
        self
    }
}

/// Build the `generateContent` request body for an instruction/image pair.
fn request_body(request: &RecognitionRequest, relax_safety: bool) -> Value {
    let mut body = json!({
        "contents": [{ "parts": [
            { "text": request.instructions },
            { "inlineData": {
                "mimeType": request.image.mime_type,
                "data": STANDARD.encode(&request.image.bytes),
            } }
        ]}]
    });
    if relax_safety {
        body["safetySettings"] = json!([
            { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE" },
            { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE" },
            { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE" },
            { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" },
        ]);
    }
    body
}

/// Pull the generated text out of a `generateContent` response, treating
/// refusals and empty generations as errors.
fn extract_text(response: &Value) -> Result<String> {
    if let Some(reason) = response["promptFeedback"]["blockReason"].as_str() {
        bail!("Gemini blocked the request: {reason}");
    }

    let candidate = &response["candidates"][0];
    if candidate.is_null() {
        bail!("Gemini returned no candidates");
    }
    if candidate["finishReason"].as_str() == Some("SAFETY") {
        bail!("Gemini stopped the generation for safety");
    }

    let text: String = candidate["content"]["parts"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|part| part["text"].as_str())
        .collect();

    if text.trim().is_empty() {
        bail!("Gemini returned no text");
    }
    Ok(text)
}

#[async_trait]
impl Recognizer for GeminiRecognizer {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn recognize(&self, request: &RecognitionRequest) -> Result<String> {
        debug!(model = %request.model, "Sending image to Gemini");

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );
        let resp = self
            .client
            .post(&url)
            .json(&request_body(request, self.relax_safety))
            .send()
            .await
            .context("Gemini HTTP request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("Gemini returned {}: {}", status, resp.text().await.unwrap_or_default());
        }

        let body: Value = resp.json().await.context("failed to parse Gemini response")?;
        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use signsolve_core::ImagePayload;

    fn request() -> RecognitionRequest {
        RecognitionRequest {
            model: "gemini-2.0-flash".into(),
            instructions: "read the sign".into(),
            image: ImagePayload {
                bytes: Bytes::from_static(&[1, 2, 3]),
                mime_type: "image/png",
            },
        }
    }

    #[test]
    fn body_carries_text_and_inline_image() {
        let body = request_body(&request(), false);
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "read the sign");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], STANDARD.encode([1u8, 2, 3]));
        assert!(body.get("safetySettings").is_none());
    }

    #[test]
    fn relaxed_safety_attaches_block_none_settings() {
        let body = request_body(&request(), true);
        let settings = body["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        assert!(settings.iter().all(|s| s["threshold"] == "BLOCK_NONE"));
    }

    #[test]
    fn extracts_generated_text() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{ "text": "하" }] } }]
        });
        assert_eq!(extract_text(&resp).unwrap(), "하");
    }

    #[test]
    fn concatenates_multiple_parts() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{ "text": "좋" }, { "text": "은" }] } }]
        });
        assert_eq!(extract_text(&resp).unwrap(), "좋은");
    }

    #[test]
    fn block_reason_is_a_refusal() {
        let resp = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_text(&resp).unwrap_err().to_string();
        assert!(err.contains("blocked"), "{err}");
    }

    #[test]
    fn safety_finish_is_a_refusal() {
        let resp = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        assert!(extract_text(&resp).is_err());
    }

    #[test]
    fn empty_candidates_is_an_error() {
        assert!(extract_text(&json!({ "candidates": [] })).is_err());
        assert!(extract_text(&json!({})).is_err());
    }

    #[test]
    fn whitespace_only_text_is_an_error() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{ "text": "  \n" }] } }]
        });
        assert!(extract_text(&resp).is_err());
    }
}
