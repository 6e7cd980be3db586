//! Vision recognition providers.
//!
//! Each provider wraps one external vision-language service behind the
//! `Recognizer` trait; the registry resolves a provider from a model name.

use std::time::Duration;

pub mod gemini;
pub mod mock;
pub mod openai;
pub mod registry;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client with a bounded per-request timeout.
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

pub use gemini::GeminiRecognizer;
pub use mock::MockRecognizer;
pub use openai::OpenAiRecognizer;
pub use registry::RecognizerRegistry;
