use crate::coordinator::Coordinator;
use crate::error::CoordinatorError;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::{NavigationEvent, RuntimeMessage, TabId, TabInfo};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Navigation events carry the tab's whole rendered page, which can be well
/// past axum's 2 MB default.
pub const MAX_NAVIGATION_BODY: usize = 32 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub injected: bool,
}

pub fn router(state: Arc<Coordinator>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/navigation",
            post(navigation).layer(DefaultBodyLimit::max(MAX_NAVIGATION_BODY)),
        )
        .route("/tabs/active", get(active_tab))
        .route("/tabs/{id}/messages", post(tab_message))
        .route("/runtime/messages", post(runtime_message))
        .with_state(state)
}

impl IntoResponse for CoordinatorError {
    fn into_response(self) -> Response {
        let status = match &self {
            CoordinatorError::NoSuchTab(_) | CoordinatorError::NoListener(_) => {
                StatusCode::NOT_FOUND
            }
            CoordinatorError::Scrape(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoordinatorError::Protocol(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn decode(value: Value) -> Result<RuntimeMessage, CoordinatorError> {
    RuntimeMessage::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "Rejected runtime message");
        CoordinatorError::from(e)
    })
}

async fn health() -> &'static str {
    "ok"
}

async fn navigation(
    State(state): State<Arc<Coordinator>>,
    Json(event): Json<NavigationEvent>,
) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        injected: state.on_navigation(event),
    })
}

async fn active_tab(State(state): State<Arc<Coordinator>>) -> Result<Json<TabInfo>, StatusCode> {
    state.active_tab().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn tab_message(
    State(state): State<Arc<Coordinator>>,
    Path(id): Path<u32>,
    Json(value): Json<Value>,
) -> Result<Response, CoordinatorError> {
    let message = decode(value)?;
    let reply = state.send_to_tab(TabId(id), &message)?;
    Ok(match reply {
        Some(details) => Json(details).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

async fn runtime_message(
    State(state): State<Arc<Coordinator>>,
    Json(value): Json<Value>,
) -> Result<Response, CoordinatorError> {
    let message = decode(value)?;
    Ok(match state.handle_message(message).await {
        Some(outcome) => Json(outcome).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
