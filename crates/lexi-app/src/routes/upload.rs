use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    success: bool,
    word_count: usize,
    message: String,
    /// `[english, french]` tuples
    sample_words: Vec<(String, String)>,
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (file_name, bytes) = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| ApiError::bad_request("No file part"))?;

    if file_name.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }

    tracing::info!(%file_name, size = bytes.len(), "upload received");

    // Spreadsheet parsing is CPU bound
    let pairs = tokio::task::spawn_blocking(move || lexi_import::load_pairs(&file_name, &bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("import task failed: {e}")))??;

    let sample_size = state.config.import.sample_size;
    let summary = state.dictionary.write().await.import(&pairs, sample_size)?;

    Ok(Json(UploadResponse {
        success: true,
        word_count: summary.word_count,
        message: format!("Successfully imported {} word pairs.", summary.word_count),
        sample_words: summary
            .sample
            .into_iter()
            .map(|pair| (pair.english, pair.french))
            .collect(),
    }))
}

/// First field named `file`, with its (possibly empty) file name
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<(String, Bytes)>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some((file_name, bytes)));
    }
    Ok(None)
}
