use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use signsolve_core::{RecognitionRequest, SolveError, SolveRequest, SolveResult};
use signsolve_extraction::{classify, strip_affixes, Question, PLACEHOLDER_MARKERS};
use signsolve_media::{parse_url, ImageFetcher, Url};
use signsolve_vision::RecognizerRegistry;

use crate::prompt::build_instructions;

/// Solver configuration, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Timeout applied to the image download.
    pub http_timeout: Duration,
    /// Cap on the downloaded image body.
    pub max_image_bytes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            default_model: "gemini-2.0-flash".to_string(),
            http_timeout: Duration::from_secs(30),
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

/// The request orchestrator.
///
/// Holds no per-request state; a single instance serves concurrent requests.
pub struct Solver {
    config: SolverConfig,
    registry: RecognizerRegistry,
    fetcher: ImageFetcher,
}

impl Solver {
    pub fn new(config: SolverConfig, registry: RecognizerRegistry) -> Result<Self> {
        let fetcher = ImageFetcher::new(config.http_timeout, config.max_image_bytes)?;
        Ok(Self {
            config,
            registry,
            fetcher,
        })
    }

    /// Resolve one captcha request end to end.
    pub async fn solve(&self, request: &SolveRequest) -> Result<SolveResult, SolveError> {
        let (url, question) = validate(request)?;

        // Credential resolution happens before any network call; a missing
        // key must fail fast, not after a download.
        let model = request
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.config.default_model)
            .to_string();
        let recognizer = self.registry.resolve(&model)?;

        let image = self.fetcher.fetch(url).await?;

        let instructions = build_instructions(&request.question_text, &question);
        let recognition = RecognitionRequest {
            model: model.clone(),
            instructions,
            image,
        };

        info!(provider = recognizer.name(), model = %model, "Invoking recognition");
        let raw = recognizer
            .recognize(&recognition)
            .await
            .map_err(|e| SolveError::Recognition(format!("{e:#}")))?;

        let answer = shape_answer(&raw, &question)?;
        debug!(answer_chars = answer.chars().count(), "Captcha solved");
        Ok(SolveResult { answer })
    }
}

/// Validate the request and classify its question. No network activity.
fn validate(request: &SolveRequest) -> Result<(Url, Question), SolveError> {
    if request.image_url.trim().is_empty() {
        return Err(SolveError::InvalidRequest("imageUrl is required".into()));
    }
    if request.question_text.trim().is_empty() {
        return Err(SolveError::InvalidRequest("questionText is required".into()));
    }
    let url = parse_url(&request.image_url)?;
    let question =
        classify(&request.question_text).map_err(|e| SolveError::InvalidRequest(e.to_string()))?;
    Ok((url, question))
}

/// Shape raw model output into the final answer.
///
/// The recognizer is trusted to follow the embedded contract, so shaping is
/// limited to trimming plus one deterministic correction: a blank-type answer
/// that reads as a full candidate (prefix and suffix still attached) is
/// reduced to its infix locally.
fn shape_answer(raw: &str, question: &Question) -> Result<String, SolveError> {
    let mut answer = raw.trim().to_string();

    if let Question::Blank { prefix, suffix } = question {
        if let Some(infix) = strip_affixes(prefix, suffix, &answer).map(String::from) {
            debug!(full = %answer, infix = %infix, "Recognizer returned the full candidate; stripping affixes");
            answer = infix;
        }
        if PLACEHOLDER_MARKERS.iter().any(|m| answer.contains(m)) {
            warn!(answer = %answer, "Answer echoes the placeholder marker");
        }
    }

    if answer.is_empty() {
        return Err(SolveError::Recognition(
            "recognizer returned an empty answer".into(),
        ));
    }
    Ok(answer)
}
