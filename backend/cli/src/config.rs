/// Signsolve runtime configuration, read from the environment once at
/// startup. Replaceable only via restart.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Gemini credential
    pub google_api_key: Option<String>,
    /// OpenAI credential
    pub openai_api_key: Option<String>,
    /// Model used when a request does not name one
    pub default_model: String,
    /// Ask the recognition service to relax content-safety filtering
    pub relax_safety: bool,
    /// Timeout for outbound network calls, in seconds
    pub http_timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            google_api_key: None,
            openai_api_key: None,
            default_model: "gemini-2.0-flash".to_string(),
            relax_safety: false,
            http_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("SIGNSOLVE_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SIGNSOLVE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            google_api_key: std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            default_model: std::env::var("SIGNSOLVE_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            relax_safety: std::env::var("SIGNSOLVE_RELAX_SAFETY")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            http_timeout_secs: std::env::var("SIGNSOLVE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
