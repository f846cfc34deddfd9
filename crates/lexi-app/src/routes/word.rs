use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use super::{SuccessResponse, parse_language, required};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWordRequest {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    translation: Option<String>,
    #[serde(default)]
    from_lang: Option<String>,
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddWordRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    const MISSING: &str = "Word, translation, and language direction are required";
    let word = required(request.word, MISSING)?;
    let translation = required(request.translation, MISSING)?;
    let from = parse_language(&required(request.from_lang, MISSING)?)?;

    state
        .dictionary
        .write()
        .await
        .add_word(&word, &translation, from)?;

    Ok(Json(SuccessResponse::ok()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWordParams {
    word: Option<String>,
    from_lang: Option<String>,
    /// Only drop this one link instead of the whole entry
    translation: Option<String>,
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteWordParams>,
) -> Result<Json<SuccessResponse>, ApiError> {
    const MISSING: &str = "Word and language direction are required";
    let word = required(params.word, MISSING)?;
    let from = parse_language(&required(params.from_lang, MISSING)?)?;

    let mut dictionary = state.dictionary.write().await;
    match params.translation.filter(|t| !t.trim().is_empty()) {
        Some(translation) => dictionary.delete_pair(&word, &translation, from)?,
        None => {
            dictionary.delete_word(&word, from)?;
        }
    }

    Ok(Json(SuccessResponse::ok()))
}
