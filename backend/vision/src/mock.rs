//! Canned-response recognizer for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;

use signsolve_core::{RecognitionRequest, Recognizer};

/// A mock recognizer that returns a canned response (or a canned failure)
/// and counts how often it was invoked.
pub struct MockRecognizer {
    name: String,
    fixed_response: Option<String>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockRecognizer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Number of `recognize` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Recognizer for MockRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn recognize(&self, _request: &RecognitionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            bail!("{message}");
        }
        Ok(self
            .fixed_response
            .clone()
            .unwrap_or_else(|| "mock answer".to_string()))
    }
}
