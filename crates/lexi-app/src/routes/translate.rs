use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{parse_language, required};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    word: Option<String>,
    from_lang: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    translations: Vec<String>,
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslateResponse>, ApiError> {
    const MISSING: &str = "Word and language direction are required";
    let word = required(params.word, MISSING)?;
    let from = parse_language(&required(params.from_lang, MISSING)?)?;

    let translations = state.dictionary.read().await.translate(&word, from);
    Ok(Json(TranslateResponse { translations }))
}
