mod config;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use signsolve_gateway::{start_server, GatewayState};
use signsolve_solver::{Solver, SolverConfig};
use signsolve_vision::{GeminiRecognizer, OpenAiRecognizer, RecognizerRegistry};

use config::Config;

#[derive(Parser)]
#[command(name = "signsolve")]
#[command(about = "Signsolve — signboard captcha solver service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the solver HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show whether a local instance is running
    Status,
    /// Solve a single captcha against a running instance
    Solve {
        /// URL of the captcha image
        #[arg(long)]
        image_url: String,
        /// Question text containing the placeholder
        #[arg(long)]
        question: String,
        /// Override the recognition model
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("signsolve is not running on port {}", config.port);
                }
            }
        }
        Commands::Solve {
            image_url,
            question,
            model,
        } => {
            let client = reqwest::Client::new();
            let body = serde_json::json!({
                "imageUrl": image_url,
                "questionText": question,
                "model": model,
            });
            let resp = client
                .post(format!("http://localhost:{}/api/solver", config.port))
                .json(&body)
                .send()
                .await
                .context("is signsolve running? start it with `signsolve serve`")?;
            let status = resp.status();
            let body: serde_json::Value = resp.json().await?;
            if status.is_success() {
                println!("{}", body["answer"].as_str().unwrap_or_default());
            } else {
                anyhow::bail!("solve failed: {}", body["error"].as_str().unwrap_or("unknown error"));
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        model = %config.default_model,
        "Starting signsolve"
    );

    let timeout = Duration::from_secs(config.http_timeout_secs);
    let mut registry = RecognizerRegistry::new();

    if let Some(api_key) = &config.google_api_key {
        registry.register(
            "gemini",
            Arc::new(
                GeminiRecognizer::new(api_key)
                    .with_relaxed_safety(config.relax_safety)
                    .with_timeout(timeout),
            ),
        );
        info!("Registered Gemini recognizer");
    }

    if let Some(api_key) = &config.openai_api_key {
        registry.register(
            "openai",
            Arc::new(OpenAiRecognizer::new(api_key).with_timeout(timeout)),
        );
        info!("Registered OpenAI recognizer");
    }

    if registry.list().is_empty() {
        warn!("No recognizer credential configured; solves will fail until GOOGLE_API_KEY or OPENAI_API_KEY is set");
    }

    let solver = Solver::new(
        SolverConfig {
            default_model: config.default_model.clone(),
            http_timeout: timeout,
            ..SolverConfig::default()
        },
        registry,
    )?;

    let state = GatewayState {
        solver: Arc::new(solver),
    };

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;

    start_server(addr, state).await
}
