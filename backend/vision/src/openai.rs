//! OpenAI vision recognition provider.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use signsolve_core::{RecognitionRequest, Recognizer};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Recognizer backed by the OpenAI chat completions API with image input.
pub struct OpenAiRecognizer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiRecognizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: crate::http_client(crate::DEFAULT_TIMEOUT),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
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
}

/// Build the chat completions body; the image travels as a base64 data URL.
fn request_body(request: &RecognitionRequest) -> Value {
    json!({
        "model": request.model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": request.instructions },
                { "type": "image_url", "image_url": { "url": format!(
                    "data:{};base64,{}",
                    request.image.mime_type,
                    STANDARD.encode(&request.image.bytes)
                ) } }
            ]
        }],
        "max_tokens": 64
    })
}

/// Pull the assistant text out of a chat completions response.
fn extract_text(response: &Value) -> Result<String> {
    let choice = &response["choices"][0];
    if choice.is_null() {
        bail!("OpenAI returned no choices");
    }
    if choice["finish_reason"].as_str() == Some("content_filter") {
        bail!("OpenAI filtered the generation");
    }
    let text = choice["message"]["content"].as_str().unwrap_or_default();
    if text.trim().is_empty() {
        bail!("OpenAI returned no text");
    }
    Ok(text.to_string())
}

#[async_trait]
impl Recognizer for OpenAiRecognizer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn recognize(&self, request: &RecognitionRequest) -> Result<String> {
        debug!(model = %request.model, "Sending image to OpenAI");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body(request))
            .send()
            .await
            .context("OpenAI HTTP request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("OpenAI returned {}: {}", status, resp.text().await.unwrap_or_default());
        }

        let body: Value = resp.json().await.context("failed to parse OpenAI response")?;
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
            model: "gpt-4o".into(),
            instructions: "read the sign".into(),
            image: ImagePayload {
                bytes: Bytes::from_static(&[9, 9]),
                mime_type: "image/jpeg",
            },
        }
    }

    #[test]
    fn body_embeds_data_url() {
        let body = request_body(&request());
        assert_eq!(body["model"], "gpt-4o");
        let url = body["messages"][0]["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"), "{url}");
    }

    #[test]
    fn extracts_choice_text() {
        let resp = json!({
            "choices": [{ "message": { "role": "assistant", "content": "좋은" } }]
        });
        assert_eq!(extract_text(&resp).unwrap(), "좋은");
    }

    #[test]
    fn content_filter_is_a_refusal() {
        let resp = json!({
            "choices": [{ "finish_reason": "content_filter", "message": { "content": "" } }]
        });
        assert!(extract_text(&resp).is_err());
    }

    #[test]
    fn empty_choices_is_an_error() {
        assert!(extract_text(&json!({ "choices": [] })).is_err());
    }

    #[test]
    fn empty_content_is_an_error() {
        let resp = json!({ "choices": [{ "message": { "content": "   " } }] });
        assert!(extract_text(&resp).is_err());
    }
}
