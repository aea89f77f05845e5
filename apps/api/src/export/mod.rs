//! Document-render collaborator — turns the core's output documents into PDF
//! bytes.
//!
//! The styled path feeds the HTML document straight to printpdf. The plain
//! path mirrors the classic single-byte-font pipeline: narrow to Latin-1 with
//! `?` replacement, wrap long lines, then encode. Character-set narrowing
//! happens here and only here — the core never filters text.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};
use thiserror::Error;
use tracing::debug;

use crate::render::plain::PlainText;
use crate::render::MarkupDocument;

/// Wrap width for the plain-text page, in characters.
const PLAIN_WRAP_COLUMNS: usize = 90;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Renders a styled markup document to PDF bytes.
pub fn markup_to_pdf(doc: &MarkupDocument) -> Result<Vec<u8>, ExportError> {
    html_to_pdf_bytes(doc.as_str())
}

/// Renders the plain-text fallback to PDF bytes.
///
/// Text outside Latin-1 is replaced with `?` before encoding, matching what a
/// single-byte-encoded PDF font can carry; Latin-1 text passes unchanged.
pub fn plain_to_pdf(text: &PlainText) -> Result<Vec<u8>, ExportError> {
    let narrowed = narrow_to_latin1(text.as_str());

    let mut html = String::from(
        "<html>\n<head>\n<style>\nbody { font-family: Helvetica, Arial, sans-serif; \
         font-size: 12px; margin: 40px; }\np { margin: 0 0 6px; min-height: 12px; }\n\
         </style>\n</head>\n<body>\n",
    );
    for line in narrowed.lines() {
        // wrap_line maps an empty line to one empty piece, which becomes the
        // blank paragraph separating sections.
        for piece in wrap_line(line, PLAIN_WRAP_COLUMNS) {
            html.push_str(&format!("<p>{}</p>\n", escape_html(&piece)));
        }
    }
    html.push_str("</body>\n</html>");

    html_to_pdf_bytes(&html)
}

fn html_to_pdf_bytes(html: &str) -> Result<Vec<u8>, ExportError> {
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(), // images
        &BTreeMap::new(), // fonts
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let bytes = doc.save(&Default::default(), &mut warnings);

    if !warnings.is_empty() {
        debug!("PDF generation warnings: {warnings:?}");
    }

    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Pure helpers
// ────────────────────────────────────────────────────────────────────────────

/// Replaces every character above U+00FF with `?`. Latin-1 characters,
/// accents included, survive untouched.
fn narrow_to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

/// Greedy word wrap. Words longer than the width are hard-split so no output
/// line ever exceeds it.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            let mut chunk = String::new();
            for c in word.chars() {
                chunk.push(c);
                if chunk.chars().count() == width {
                    wrapped.push(std::mem::take(&mut chunk));
                }
            }
            current = chunk;
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };
        if needed > width {
            wrapped.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Minimal escaping for text that goes into the fallback HTML page. This is
/// the collaborator's own formatting concern; the core still inserts user
/// text verbatim into its markup.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;
    use crate::render::plain::flatten;
    use crate::render::{render, TemplateChoice};

    #[test]
    fn test_narrow_keeps_latin1_and_replaces_the_rest() {
        assert_eq!(narrow_to_latin1("José Müller"), "José Müller");
        assert_eq!(narrow_to_latin1("建築家 — ok"), "??? ? ok");
    }

    #[test]
    fn test_narrow_is_identity_on_ascii() {
        let text = "- Built X\nWORK EXPERIENCE";
        assert_eq!(narrow_to_latin1(text), text);
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_line("short line", 90), vec!["short line"]);
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        let wrapped = wrap_line("alpha beta gamma delta", 11);
        assert_eq!(wrapped, vec!["alpha beta", "gamma delta"]);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 11));
    }

    #[test]
    fn test_wrap_hard_splits_oversized_words() {
        let wrapped = wrap_line("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_escape_html_for_fallback_page() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_markup_export_produces_pdf_bytes() {
        let data = ResumeData {
            name: Some("Jo Smith".to_string()),
            work_experience: vec!["Built X".to_string()],
            ..Default::default()
        };
        let doc = render(&data, TemplateChoice::Clean, "7A263A");
        let bytes = markup_to_pdf(&doc).expect("styled export must succeed");
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
    }

    #[test]
    fn test_plain_export_produces_pdf_bytes() {
        let data = ResumeData {
            name: Some("José Müller 建築家".to_string()),
            profile_summary: Some("Summary".to_string()),
            work_experience: vec!["Built X".to_string()],
            ..Default::default()
        };
        let bytes = plain_to_pdf(&flatten(&data)).expect("plain export must succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
