use anyhow::Result;
use async_trait::async_trait;

use crate::types::ImagePayload;

/// Request to a vision recognition provider: task instructions plus the image
/// they apply to.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Model name the provider should run.
    pub model: String,
    /// Natural-language task description embedding the extraction contract.
    pub instructions: String,
    /// The captcha image.
    pub image: ImagePayload,
}

/// Trait for vision-language recognition providers.
///
/// Implementations wrap one external service each; the orchestrator picks one
/// per request through the registry and treats any failure as a recognition
/// error.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Read the image under the given instructions and return the generated
    /// text. A refusal or an empty generation is an error, not an empty `Ok`.
    async fn recognize(&self, request: &RecognitionRequest) -> Result<String>;
}

impl std::fmt::Debug for dyn Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("name", &self.name())
            .finish()
    }
}
