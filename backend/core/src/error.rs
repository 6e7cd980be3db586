use thiserror::Error;

/// Top-level error taxonomy for the signsolve runtime.
///
/// Every failure crossing the orchestration boundary is one of these kinds;
/// the HTTP layer maps `InvalidRequest` to 400 and everything else to 500.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("image fetch failed: {0}")]
    ImageFetch(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SolveError {
    /// Stable kind label used in logs and client-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::ImageFetch(_) => "ImageFetchError",
            Self::Configuration(_) => "ConfigurationError",
            Self::Recognition(_) => "RecognitionError",
            Self::Internal(_) => "InternalError",
        }
    }

    /// Whether this failure is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Short client-facing summary, `kind: message`.
    ///
    /// Never includes backtraces or nested diagnostic chains; those stay in
    /// the server-side logs.
    pub fn client_message(&self) -> String {
        format!("{}: {}", self.kind(), self.detail())
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidRequest(m)
            | Self::ImageFetch(m)
            | Self::Configuration(m)
            | Self::Recognition(m) => m.clone(),
            Self::Internal(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(SolveError::InvalidRequest("x".into()).kind(), "InvalidRequest");
        assert_eq!(SolveError::ImageFetch("x".into()).kind(), "ImageFetchError");
        assert_eq!(SolveError::Configuration("x".into()).kind(), "ConfigurationError");
        assert_eq!(SolveError::Recognition("x".into()).kind(), "RecognitionError");
        assert_eq!(
            SolveError::Internal(anyhow::anyhow!("boom")).kind(),
            "InternalError"
        );
    }

    #[test]
    fn client_message_is_kind_prefixed() {
        let err = SolveError::ImageFetch("http://x returned 404".into());
        assert_eq!(err.client_message(), "ImageFetchError: http://x returned 404");
    }

    #[test]
    fn only_invalid_request_is_client_fault() {
        assert!(SolveError::InvalidRequest("x".into()).is_client_error());
        assert!(!SolveError::Recognition("x".into()).is_client_error());
        assert!(!SolveError::Configuration("x".into()).is_client_error());
    }
}
