use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use lexi_core::Language;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

mod dictionary;
mod health;
mod translate;
mod upload;
mod word;

pub fn build_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.import.max_upload_bytes;

    let mut router = Router::new()
        .route("/health", get(health::health))
        .route("/translate", get(translate::translate))
        .route("/word", post(word::add).delete(word::delete))
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/stats", get(dictionary::stats))
        .route("/dictionary/recent", get(dictionary::recent))
        .route("/dictionary/dump", get(dictionary::dump))
        .route("/dictionary/neighbors", get(dictionary::neighbors))
        .layer(TraceLayer::new_for_http());

    if state.config.server.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Self {
        Self { success: true }
    }
}

/// Non-blank query/body parameter or a 400 with `message`
fn required(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}

fn parse_language(value: &str) -> Result<Language, ApiError> {
    value.parse().map_err(ApiError::Dictionary)
}
