//! Solver endpoint (`/api/solver`).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use signsolve_core::{SolveError, SolveRequest};

use crate::server::GatewayState;

/// Handler for `POST /api/solver`.
pub async fn solve(
    State(state): State<GatewayState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(%request_id, error = %rejection, "Rejected malformed request body");
            return error_response(&SolveError::InvalidRequest(
                "request body must be a JSON object with imageUrl and questionText".into(),
            ));
        }
    };

    info!(%request_id, image_url = %request.image_url, "Solving captcha");
    match state.solver.solve(&request).await {
        Ok(result) => {
            info!(%request_id, answer_chars = result.answer.chars().count(), "Captcha solved");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            error!(%request_id, kind = err.kind(), error = %err, "Solve failed");
            error_response(&err)
        }
    }
}

/// Handler for `OPTIONS /api/solver` (CORS preflight).
pub async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

/// Map a solve failure to its HTTP status and client-facing body. The body
/// carries the short `kind: message` summary only; diagnostics stay in the
/// server logs.
fn error_response(err: &SolveError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(json!({ "error": err.client_message() }))).into_response()
}
