//! Provider registry, resolved by model name.

use std::collections::HashMap;
use std::sync::Arc;

use signsolve_core::{Recognizer, SolveError};

/// Registry of recognition providers, looked up per request.
///
/// Only providers with configured credentials are registered at startup, and
/// the registry is read-only afterwards. Resolving a model whose provider is
/// absent is a configuration error, reported before any network call is made.
pub struct RecognizerRegistry {
    providers: HashMap<String, Arc<dyn Recognizer>>,
}

impl RecognizerRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider by name.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Recognizer>) {
        self.providers.insert(name.into(), provider);
    }

    /// Resolve the provider responsible for a model name.
    pub fn resolve(&self, model: &str) -> Result<Arc<dyn Recognizer>, SolveError> {
        let name = provider_name_for_model(model);
        self.providers.get(name).cloned().ok_or_else(|| {
            SolveError::Configuration(format!(
                "no credential configured for provider \"{name}\" (model \"{model}\")"
            ))
        })
    }

    /// Names of all registered providers.
    pub fn list(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}

impl Default for RecognizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a model name onto the provider that serves it. Gemini is the default
/// family; `gpt-*` models route to OpenAI.
fn provider_name_for_model(model: &str) -> &'static str {
    if model.starts_with("gpt-") {
        "openai"
    } else {
        "gemini"
    }
}
