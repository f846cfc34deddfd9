use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use lexi_core::{DictionaryStats, Language};
use serde::{Deserialize, Serialize};

use super::{parse_language, required};
use crate::audit::AdditionRecord;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn recent(State(state): State<Arc<AppState>>) -> Json<Vec<AdditionRecord>> {
    let dictionary = state.dictionary.read().await;
    Json(dictionary.recent().cloned().collect())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    stats: DictionaryStats,
    last_updated: DateTime<Utc>,
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let dictionary = state.dictionary.read().await;
    Json(StatsResponse {
        stats: dictionary.stats(),
        last_updated: dictionary.last_updated(),
    })
}

#[derive(Deserialize)]
pub struct DumpParams {
    lang: Option<String>,
}

#[derive(Serialize)]
pub struct DumpEntry {
    word: String,
    translations: Vec<String>,
}

/// Every entry of one tree in ascending key order
pub async fn dump(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DumpParams>,
) -> Result<Json<Vec<DumpEntry>>, ApiError> {
    let language = match params.lang {
        Some(lang) => parse_language(&lang)?,
        None => Language::English,
    };

    let dictionary = state.dictionary.read().await;
    let entries = dictionary
        .pairs()
        .tree(language)
        .iter_inorder()
        .map(|(word, translations)| DumpEntry {
            word: word.to_string(),
            translations: translations.iter().cloned().collect(),
        })
        .collect();

    Ok(Json(entries))
}

#[derive(Deserialize)]
pub struct NeighborsParams {
    word: Option<String>,
    lang: Option<String>,
}

#[derive(Serialize)]
pub struct NeighborsResponse {
    word: String,
    predecessor: Option<String>,
    successor: Option<String>,
    height: usize,
}

pub async fn neighbors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NeighborsParams>,
) -> Result<Json<NeighborsResponse>, ApiError> {
    const MISSING: &str = "Word and language are required";
    let word = required(params.word, MISSING)?;
    let language = parse_language(&required(params.lang, MISSING)?)?;

    let dictionary = state.dictionary.read().await;
    let neighbors = dictionary
        .neighbors(&word, language)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(NeighborsResponse {
        word: lexi_core::preprocess::normalize(&word),
        predecessor: neighbors.predecessor,
        successor: neighbors.successor,
        height: dictionary.pairs().tree(language).height(),
    }))
}
