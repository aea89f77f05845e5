//! Plain-text flattening — the degraded rendition for export paths that
//! cannot accept styled markup.
//!
//! The layout is fixed: name header, blank line, PROFILE label + summary,
//! blank line, WORK EXPERIENCE label, one `- ` bullet per non-empty entry.
//! Absent fields flatten to their empty line rather than shifting the layout,
//! which keeps the function total and the output shape predictable.
//!
//! No character-set filtering happens here. Narrowing to a single-byte set is
//! the export collaborator's responsibility; non-Latin-1 text passes through
//! intact.

use crate::models::resume::ResumeData;
use crate::render::non_empty_entries;

/// An unstyled, linear text rendition of the résumé content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText(String);

impl PlainText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Flattens the résumé to plain text. Pure, total, deterministic.
///
/// Uses the same blank-entry filter as the HTML renderer; the two must never
/// disagree on which entries survive.
pub fn flatten(data: &ResumeData) -> PlainText {
    let mut lines: Vec<String> = Vec::new();

    lines.push(data.name.clone().unwrap_or_default());
    lines.push(String::new());
    lines.push("PROFILE".to_string());
    lines.push(data.profile_summary.clone().unwrap_or_default());
    lines.push(String::new());
    lines.push("WORK EXPERIENCE".to_string());
    for entry in non_empty_entries(&data.work_experience) {
        lines.push(format!("- {entry}"));
    }

    PlainText(lines.join("\n"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
