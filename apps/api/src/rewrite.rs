//! Rewrite collaborator — opaque text → text polishing for a single field.
//!
//! The contract is deliberately thin: given a string, return a rewritten
//! string of comparable semantic content. Which field gets rewritten (the
//! summary or one experience entry) is the handler's business.

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::state::AppState;

const REWRITE_SYSTEM: &str = "\
You are a professional resume copywriter. \
Rewrite the text you are given to be clearer and more impactful while keeping \
every fact intact — never add accomplishments, numbers, or titles that are \
not in the original. Respond with the rewritten text only, no commentary.";

/// Pluggable rewrite seam, same shape as the extraction trait.
#[async_trait]
pub trait Rewriter: Send + Sync {
    async fn rewrite(&self, text: &str) -> Result<String, AppError>;
}

/// LLM-backed rewriter using the shared Anthropic client.
pub struct LlmRewriter {
    llm: LlmClient,
}

impl LlmRewriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Rewriter for LlmRewriter {
    async fn rewrite(&self, text: &str) -> Result<String, AppError> {
        let rewritten = self
            .llm
            .complete(REWRITE_SYSTEM, text)
            .await
            .map_err(|e| AppError::Llm(format!("Rewrite failed: {e}")))?;
        Ok(rewritten.trim().to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// Which field to rewrite.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case", tag = "field")]
pub enum RewriteTarget {
    Summary,
    Experience { index: usize },
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    #[serde(flatten)]
    pub target: RewriteTarget,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten: String,
}

/// Rewrites one field in place and returns the new text.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let session = state.sessions.get(id).await?;

    let current = match request.target {
        RewriteTarget::Summary => session
            .data
            .profile_summary
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::Validation("There is no profile summary to rewrite".to_string())
            })?,
        RewriteTarget::Experience { index } => session
            .data
            .work_experience
            .get(index)
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .ok_or_else(|| {
                AppError::Validation(format!("No work experience entry at index {index}"))
            })?,
    };

    let rewritten = state.rewriter.rewrite(&current).await?;
    info!("Session {id}: rewrote {:?}", request.target);

    state
        .sessions
        .with_data(id, |data| match request.target {
            RewriteTarget::Summary => data.profile_summary = Some(rewritten.clone()),
            RewriteTarget::Experience { index } => {
                if let Some(entry) = data.work_experience.get_mut(index) {
                    *entry = rewritten.clone();
                }
            }
        })
        .await?;

    Ok(Json(RewriteResponse { rewritten }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_target_summary_deserializes() {
        let request: RewriteRequest = serde_json::from_str(r#"{"field": "summary"}"#).unwrap();
        assert!(matches!(request.target, RewriteTarget::Summary));
    }

    #[test]
    fn test_rewrite_target_experience_carries_index() {
        let request: RewriteRequest =
            serde_json::from_str(r#"{"field": "experience", "index": 2}"#).unwrap();
        assert!(matches!(
            request.target,
            RewriteTarget::Experience { index: 2 }
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<RewriteRequest, _> = serde_json::from_str(r#"{"field": "name"}"#);
        assert!(result.is_err(), "only summary and experience are rewritable");
    }
}
