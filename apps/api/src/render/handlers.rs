//! Preview and export handlers — the only places the pure rendering core is
//! invoked from the HTTP surface.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export;
use crate::render::plain::flatten;
use crate::render::{render, TemplateChoice};
use crate::state::AppState;

/// Which document form the export collaborator is handed.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Styled HTML → PDF.
    #[default]
    Styled,
    /// Plain-text fallback → PDF (Latin-1 narrowed downstream).
    Plain,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub template: Option<TemplateChoice>,
    /// 6-hex-digit accent color, passed through verbatim. Defaults per
    /// template when absent.
    pub accent: Option<String>,
    #[serde(default)]
    pub format: ExportFormat,
}

impl RenderQuery {
    fn resolve(&self) -> (TemplateChoice, String) {
        let template = self.template.unwrap_or(TemplateChoice::Modern);
        let accent = self
            .accent
            .clone()
            .unwrap_or_else(|| template.default_accent().to_string());
        (template, accent)
    }
}

/// Returns the styled HTML document for on-screen preview.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(id).await?;
    let (template, accent) = query.resolve();
    let doc = render(&session.data, template, &accent);
    Ok(Html(doc.into_inner()))
}

/// Exports the résumé as a downloadable PDF, either from the styled markup or
/// from the plain-text fallback.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let (template, accent) = query.resolve();

    let bytes = match query.format {
        ExportFormat::Styled => export::markup_to_pdf(&render(&session.data, template, &accent)),
        ExportFormat::Plain => export::plain_to_pdf(&flatten(&session.data)),
    }
    .map_err(|e| AppError::Export(e.to_string()))?;

    info!(
        "Session {id}: exported {:?}/{:?}, {} bytes",
        template,
        query.format,
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
