//! Import handler: uploaded résumé PDF → text → extraction → bulk apply.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pdf_to_text;
use crate::models::resume::ExtractedFields;
use crate::session::handlers::{check_upload_size, read_upload, SessionView};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// What the extraction collaborator found (possibly partial).
    pub extracted: ExtractedFields,
    /// The résumé after the bulk apply.
    pub resume: SessionView,
}

/// Runs the import flow for one session. The session must exist before the
/// upload is parsed, so a bad id fails fast without an LLM call.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    state.sessions.get(id).await?;

    let bytes = read_upload(&mut multipart).await?;
    check_upload_size(&state, bytes.len())?;
    let text = pdf_to_text(&bytes)?;
    info!(
        "Session {id}: imported PDF, {} bytes, {} chars of text",
        bytes.len(),
        text.len()
    );

    let extracted = state.extractor.extract(&text).await?;

    state
        .sessions
        .with_data(id, |data| data.apply_extracted(extracted.clone()))
        .await?;

    let session = state.sessions.get(id).await?;
    info!("Session {id}: extraction applied");

    Ok(Json(ImportResponse {
        extracted,
        resume: SessionView::build(id, &session),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
