//! HTTP route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, error};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use wayfarer_core::prelude::{RoutingRequest, RoutingResponse};

use super::state::AppState;

/// Creates the application router.
///
/// The routing endpoint accepts `POST` with a JSON body. `OPTIONS`
/// preflights are answered by the CORS layer; any other method gets
/// `405 Method Not Allowed` from the method router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/route", post(compute_route))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Computes a route for a JSON routing request.
async fn compute_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutingResponse>, AppError> {
    // Parse the JSON by hand so malformed bodies map to 400
    let request: RoutingRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejecting malformed routing request: {e}");
        AppError::BadRequest(format!("Invalid JSON: {e}"))
    })?;

    // The search is CPU-bound; run it on the blocking pool so request
    // workers scale with demand
    let handler = state.handler.clone();
    let response = tokio::task::spawn_blocking(move || handler.handle(&request))
        .await
        .map_err(|e| AppError::Internal(format!("Routing computation failed: {e}")))?;

    Ok(Json(response))
}

/// Application error type. Unresolvable endpoints and missing routes
/// are not errors, they answer 200 with an empty journey list.
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => {
                error!("Internal error while handling a request: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}
