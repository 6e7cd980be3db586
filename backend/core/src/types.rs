use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single CAPTCHA resolution request, built once per incoming call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// HTTP(S) URL of the captcha image.
    pub image_url: String,
    /// Question text, usually carrying one placeholder marker.
    pub question_text: String,
    /// Optional recognition model override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Successful resolution payload.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    pub answer: String,
}

/// Downloaded image bytes plus their sniffed MIME type.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Bytes,
    pub mime_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case() {
        let req: SolveRequest = serde_json::from_str(
            r#"{"imageUrl": "https://example.com/a.png", "questionText": "빈칸나은행"}"#,
        )
        .unwrap();
        assert_eq!(req.image_url, "https://example.com/a.png");
        assert_eq!(req.question_text, "빈칸나은행");
        assert!(req.model.is_none());
    }

    #[test]
    fn request_accepts_model_override() {
        let req: SolveRequest = serde_json::from_str(
            r#"{"imageUrl": "https://example.com/a.png", "questionText": "q", "model": "gpt-4o"}"#,
        )
        .unwrap();
        assert_eq!(req.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn result_serializes_answer_field() {
        let json = serde_json::to_string(&SolveResult { answer: "하".into() }).unwrap();
        assert_eq!(json, r#"{"answer":"하"}"#);
    }
}
