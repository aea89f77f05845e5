//! Template rendering core — turns a `ResumeData` value into a styled HTML
//! document or a plain-text fallback.
//!
//! Everything in this module tree is pure and total: no I/O, no shared state,
//! no error path. Any input combination — including an all-empty résumé —
//! yields a well-formed document; deciding whether an empty result is worth
//! showing or exporting is the caller's problem.
//!
//! User-supplied text is inserted verbatim, markup-significant characters
//! included. The service targets a single trusted user per session, so markup
//! injection by that user is an accepted limitation, not an attack surface.

pub mod handlers;
pub mod plain;
pub mod templates;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A styled, self-contained HTML document (inline stylesheet, inline photo),
/// ready for on-screen preview or conversion to a paginated export format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument(String);

impl MarkupDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The closed set of visual templates. Each variant carries its own layout
/// skeleton, stylesheet, and default accent color; the set of data fields
/// shown is identical across all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateChoice {
    Modern,
    Minimalist,
    CreativeSidebar,
    Clean,
}

impl TemplateChoice {
    pub const ALL: [TemplateChoice; 4] = [
        TemplateChoice::Modern,
        TemplateChoice::Minimalist,
        TemplateChoice::CreativeSidebar,
        TemplateChoice::Clean,
    ];

    /// Default 6-hex-digit accent color, used when the caller supplies none.
    pub fn default_accent(&self) -> &'static str {
        match self {
            TemplateChoice::Modern => "1F6FEB",
            TemplateChoice::Minimalist => "444444",
            TemplateChoice::CreativeSidebar => "2E7D6B",
            TemplateChoice::Clean => "7A263A",
        }
    }
}

/// The contact fields a template may show. Each template function passes an
/// explicit field list to [`contact_parts`] so that field visibility is a
/// declaration, not an accident of which interpolation block mentions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Address,
    LinkedIn,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering entry point
// ────────────────────────────────────────────────────────────────────────────

/// Renders `data` under the chosen template with the given accent color.
///
/// The accent value is interpolated verbatim into every accent occurrence in
/// the stylesheet. An invalid color string propagates into the output
/// unchanged — accepted risk, not silently corrected.
pub fn render(data: &ResumeData, template: TemplateChoice, accent: &str) -> MarkupDocument {
    match template {
        TemplateChoice::Modern => templates::modern(data, accent),
        TemplateChoice::Minimalist => templates::minimalist(data, accent),
        TemplateChoice::CreativeSidebar => templates::creative_sidebar(data, accent),
        TemplateChoice::Clean => templates::clean(data, accent),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers (renderer + flattener must agree on these)
// ────────────────────────────────────────────────────────────────────────────

/// Yields the trimmed, non-empty work-experience entries in insertion order.
///
/// This is the single filter rule for both the HTML renderer and the
/// plain-text flattener; keep them on this helper so they cannot drift.
pub fn non_empty_entries(entries: &[String]) -> impl Iterator<Item = &str> {
    entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty())
}

/// Collects the declared contact fields that are present and non-blank,
/// in declaration order.
pub fn contact_parts<'a>(data: &'a ResumeData, fields: &[ContactField]) -> Vec<&'a str> {
    fields
        .iter()
        .filter_map(|field| match field {
            ContactField::Email => data.email.as_deref(),
            ContactField::Phone => data.phone.as_deref(),
            ContactField::Address => data.address.as_deref(),
            ContactField::LinkedIn => data.linked_in.as_deref(),
        })
        .filter(|value| !value.trim().is_empty())
        .collect()
}

/// Builds the single inline `<img>` element for the profile picture, or
/// `None` when there is no picture. Templates must emit nothing at all in the
/// `None` case — no reserved empty image space.
pub fn photo_img(data: &ResumeData) -> Option<String> {
    data.profile_picture.as_ref().map(|bytes| {
        let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
        format!(
            "<img class=\"photo\" alt=\"\" src=\"data:{};base64,{}\">",
            sniff_image_mime(bytes),
            b64
        )
    })
}

/// Best-effort image mime sniffing from magic bytes. Unknown payloads fall
/// back to octet-stream rather than lying about the format.
fn sniff_image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn jo_smith() -> ResumeData {
        ResumeData {
            name: Some("Jo Smith".to_string()),
            job_title: Some("Engineer".to_string()),
            email: Some("jo@example.com".to_string()),
            work_experience: vec![
                "".to_string(),
                "Built X".to_string(),
                "  ".to_string(),
                "Shipped Y".to_string(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = jo_smith();
        for template in TemplateChoice::ALL {
            let first = render(&data, template, "ABC123");
            let second = render(&data, template, "ABC123");
            assert_eq!(first, second, "{template:?} must render byte-identically");
        }
    }

    #[test]
    fn test_all_templates_show_the_same_fields() {
        let data = jo_smith();
        for template in TemplateChoice::ALL {
            let html = render(&data, template, template.default_accent());
            let html = html.as_str();
            assert!(html.contains("Jo Smith"), "{template:?} missing name");
            assert!(html.contains("Engineer"), "{template:?} missing job title");
            assert!(html.contains("jo@example.com"), "{template:?} missing email");
            assert!(html.contains("Built X"), "{template:?} missing experience");
        }
    }

    #[test]
    fn test_two_templates_differ_in_structure() {
        let data = jo_smith();
        let a = render(&data, TemplateChoice::Modern, "1F6FEB");
        let b = render(&data, TemplateChoice::Minimalist, "1F6FEB");
        assert!(a.as_str().contains("Jo Smith"));
        assert!(b.as_str().contains("Jo Smith"));
        assert_ne!(a, b, "different templates must produce different markup");
    }

    #[test]
    fn test_accent_color_is_interpolated_verbatim() {
        let data = jo_smith();
        for template in TemplateChoice::ALL {
            let html = render(&data, template, "C0FFEE");
            assert!(
                html.as_str().contains("#C0FFEE"),
                "{template:?} must carry the caller's accent color"
            );
        }
    }

    #[test]
    fn test_invalid_accent_propagates_unchanged() {
        // No validation by design: garbage in, garbage out.
        let html = render(&jo_smith(), TemplateChoice::Clean, "not-a-color");
        assert!(html.as_str().contains("#not-a-color"));
    }

    #[test]
    fn test_no_photo_means_no_img_element() {
        let data = jo_smith();
        for template in TemplateChoice::ALL {
            let html = render(&data, template, "123456");
            assert!(
                !html.as_str().contains("<img"),
                "{template:?} must not reserve image space without a photo"
            );
        }
    }

    #[test]
    fn test_photo_renders_exactly_one_img_element() {
        let mut data = jo_smith();
        data.profile_picture = Some(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A]);
        for template in TemplateChoice::ALL {
            let html = render(&data, template, "123456");
            let count = html.as_str().matches("<img").count();
            assert_eq!(count, 1, "{template:?} has one profile-image slot");
            assert!(html.as_str().contains("data:image/png;base64,"));
        }
    }

    #[test]
    fn test_blank_experience_entries_produce_no_list_items() {
        let data = jo_smith();
        for template in TemplateChoice::ALL {
            let html = render(&data, template, "123456");
            assert_eq!(
                html.as_str().matches("<li>").count(),
                2,
                "{template:?} must drop blank entries"
            );
        }
    }

    #[test]
    fn test_empty_resume_still_renders_a_document() {
        let data = ResumeData::default();
        for template in TemplateChoice::ALL {
            let html = render(&data, template, template.default_accent());
            assert!(html.as_str().starts_with("<!DOCTYPE html>"));
            assert!(html.as_str().ends_with("</html>"));
        }
    }

    #[test]
    fn test_user_text_is_not_escaped() {
        let mut data = jo_smith();
        data.profile_summary = Some("Fan of <b>bold</b> claims & more".to_string());
        let html = render(&data, TemplateChoice::Modern, "123456");
        assert!(
            html.as_str().contains("<b>bold</b> claims & more"),
            "text must pass through verbatim"
        );
    }

    #[test]
    fn test_non_latin1_text_passes_through_intact() {
        let mut data = jo_smith();
        data.name = Some("José Müller 建築家".to_string());
        let html = render(&data, TemplateChoice::CreativeSidebar, "123456");
        assert!(html.as_str().contains("José Müller 建築家"));
    }

    #[test]
    fn test_non_empty_entries_filters_and_preserves_order() {
        let entries = vec![
            " a ".to_string(),
            "".to_string(),
            "\t".to_string(),
            "b".to_string(),
        ];
        let kept: Vec<&str> = non_empty_entries(&entries).collect();
        assert_eq!(kept, vec!["a", "b"]);
    }

    #[test]
    fn test_sniff_image_mime() {
        assert_eq!(sniff_image_mime(&[0x89, b'P', b'N', b'G']), "image/png");
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_image_mime(b"GIF89a"), "image/gif");
        assert_eq!(sniff_image_mime(b"RIFF\x00\x00\x00\x00WEBP"), "image/webp");
        assert_eq!(sniff_image_mime(b"bogus payload"), "application/octet-stream");
    }

    #[test]
    fn test_contact_parts_respects_declaration_order() {
        let data = jo_smith();
        let parts = contact_parts(
            &data,
            &[
                ContactField::Phone,
                ContactField::Email,
                ContactField::Address,
            ],
        );
        // Only email is set in the fixture.
        assert_eq!(parts, vec!["jo@example.com"]);
    }
}
