//! Session CRUD handlers: create a session, read/edit its résumé fields, and
//! manage the profile photo upload.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// The résumé as exposed over the API. Picture bytes stay server-side; only
/// their presence is reported.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub profile_summary: Option<String>,
    pub work_experience: Vec<String>,
    pub has_profile_picture: bool,
}

impl SessionView {
    pub fn build(session_id: Uuid, session: &Session) -> Self {
        let data = &session.data;
        SessionView {
            session_id,
            created_at: session.created_at,
            name: data.name.clone(),
            job_title: data.job_title.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            address: data.address.clone(),
            linked_in: data.linked_in.clone(),
            profile_summary: data.profile_summary.clone(),
            work_experience: data.work_experience.clone(),
            has_profile_picture: data.profile_picture.is_some(),
        }
    }
}

/// Partial manual edit. Absent keys are untouched; `work_experience`, when
/// present, replaces the whole list (reordering is delete + re-add).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub profile_summary: Option<String>,
    pub work_experience: Option<Vec<String>>,
}

impl UpdateRequest {
    fn apply(self, data: &mut ResumeData) {
        if let Some(v) = self.name {
            data.name = Some(v);
        }
        if let Some(v) = self.job_title {
            data.job_title = Some(v);
        }
        if let Some(v) = self.email {
            data.email = Some(v);
        }
        if let Some(v) = self.phone {
            data.phone = Some(v);
        }
        if let Some(v) = self.address {
            data.address = Some(v);
        }
        if let Some(v) = self.linked_in {
            data.linked_in = Some(v);
        }
        if let Some(v) = self.profile_summary {
            data.profile_summary = Some(v);
        }
        if let Some(v) = self.work_experience {
            data.work_experience = v;
        }
    }
}

pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session_id = state.sessions.create().await;
    info!("Created session {session_id}");
    Ok(Json(CreateSessionResponse { session_id }))
}

pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::build(id, &session)))
}

pub async fn handle_update_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateRequest>,
) -> Result<Json<SessionView>, AppError> {
    state.sessions.with_data(id, |data| update.apply(data)).await?;
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::build(id, &session)))
}

pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.sessions.remove(id).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

/// Accepts a multipart upload with a single image file field and stores the
/// bytes on the session. Contents are not validated beyond being non-empty —
/// rendering sniffs the format when embedding.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let bytes = read_upload(&mut multipart).await?;
    check_upload_size(&state, bytes.len())?;
    info!("Session {id}: photo upload, {} bytes", bytes.len());
    state
        .sessions
        .with_data(id, |data| data.profile_picture = Some(bytes))
        .await?;
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::build(id, &session)))
}

pub async fn handle_delete_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .with_data(id, |data| data.profile_picture = None)
        .await?;
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::build(id, &session)))
}

/// Rejects uploads over the configured cap. The body-size layer catches most
/// of these first; this guards the decoded field as well.
pub(crate) fn check_upload_size(state: &AppState, len: usize) -> Result<(), AppError> {
    if len > state.config.max_upload_bytes {
        return Err(AppError::Upload(format!(
            "Upload of {len} bytes exceeds the {} byte limit",
            state.config.max_upload_bytes
        )));
    }
    Ok(())
}

/// Pulls the first file field out of a multipart body.
pub(crate) async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Malformed multipart body: {e}")))?
        .ok_or_else(|| AppError::Upload("Expected a file field".to_string()))?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read upload: {e}")))?;

    if bytes.is_empty() {
        return Err(AppError::Upload("Uploaded file is empty".to_string()));
    }
    Ok(bytes.to_vec())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
