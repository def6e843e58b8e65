//! Media upload route handlers.
//!
//! Accepts a multipart form with a single `file` field and proxies it to
//! Cloudflare Images; the returned delivery URLs get stored on products,
//! categories or settings by subsequent edits.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::services::UploadedMedia;
use crate::state::AppState;

/// Upload one media file.
#[instrument(skip(state, multipart))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedMedia>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map_or_else(|| "upload".to_string(), ToString::to_string);
        let content_type = field
            .content_type()
            .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read file field: {e}")))?;

        let media = state
            .storage()
            .upload(&filename, &content_type, bytes.to_vec())
            .await?;

        return Ok((StatusCode::CREATED, Json(media)));
    }

    Err(AppError::BadRequest(
        "multipart body must contain a 'file' field".to_string(),
    ))
}

/// Delete an uploaded image by its Cloudflare ID.
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.storage().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
