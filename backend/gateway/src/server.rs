//! Gateway HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;

use signsolve_solver::Solver;

use crate::{health_api, solver_api};

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub solver: Arc<Solver>,
}

/// Build the gateway router.
///
/// Every response, including errors and the preflight, carries
/// `Access-Control-Allow-Origin: *`; the captcha widget calls this endpoint
/// from arbitrary origins.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route(
            "/api/solver",
            post(solver_api::solve).options(solver_api::preflight),
        )
        .route("/api/health", get(health_api::get_health))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Start the Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
