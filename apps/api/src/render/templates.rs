//! The closed set of template functions, one per [`TemplateChoice`] variant.
//!
//! Each function takes `(data, accent)` and returns a full HTML document. The
//! variants differ in arrangement (header banner vs. two-column sidebar vs.
//! minimal header) and in which elements receive the accent color; the set of
//! data fields shown is identical across all of them. Stylesheets are fixed
//! templates with an `{accent}` placeholder filled in verbatim.

use crate::models::resume::ResumeData;
use crate::render::{contact_parts, non_empty_entries, photo_img, ContactField, MarkupDocument};

/// All templates declare the full contact set; visibility is explicit, not an
/// accident of which interpolation block mentions a field.
const CONTACT_FIELDS: &[ContactField] = &[
    ContactField::Email,
    ContactField::Phone,
    ContactField::Address,
    ContactField::LinkedIn,
];

// ────────────────────────────────────────────────────────────────────────────
// Stylesheets
// ────────────────────────────────────────────────────────────────────────────

const MODERN_STYLE: &str = "\
body { font-family: 'Helvetica Neue', Arial, sans-serif; margin: 0; color: #222; }
.banner { background: #{accent}; color: #fff; padding: 28px 36px; display: flex; align-items: center; gap: 24px; }
.banner h1 { margin: 0; font-size: 30px; }
.banner .title { margin: 4px 0 0; font-size: 16px; opacity: 0.9; }
.banner .contact { margin: 10px 0 0; font-size: 12px; opacity: 0.85; }
.photo { width: 84px; height: 84px; border-radius: 50%; object-fit: cover; border: 3px solid #fff; }
main { padding: 24px 36px; }
section h2 { color: #{accent}; border-left: 4px solid #{accent}; padding-left: 8px; font-size: 16px; text-transform: uppercase; letter-spacing: 1px; }
section ul { margin: 8px 0; padding-left: 20px; }
section li { margin-bottom: 6px; }
";

const MINIMALIST_STYLE: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; margin: 48px 64px; color: #333; }
header h1 { margin: 0; font-size: 26px; font-weight: normal; letter-spacing: 2px; border-bottom: 1px solid #{accent}; padding-bottom: 8px; }
header .title { margin: 6px 0 0; font-size: 14px; font-style: italic; color: #{accent}; }
header .contact { margin: 8px 0 0; font-size: 11px; color: #777; }
.photo { width: 64px; height: 64px; object-fit: cover; margin-top: 12px; filter: grayscale(100%); }
section h2 { font-size: 13px; font-weight: normal; text-transform: lowercase; letter-spacing: 3px; color: #555; margin-top: 28px; }
section ul { list-style: none; padding: 0; }
section li { margin-bottom: 8px; padding-left: 12px; border-left: 2px solid #{accent}; }
";

const SIDEBAR_STYLE: &str = "\
body { font-family: 'Segoe UI', Tahoma, sans-serif; margin: 0; color: #2b2b2b; }
.page { display: flex; min-height: 100vh; }
aside { background: #{accent}; color: #fff; width: 220px; padding: 32px 20px; box-sizing: border-box; }
aside .contact-line { font-size: 12px; margin-bottom: 10px; word-break: break-word; }
.photo { width: 120px; height: 120px; border-radius: 50%; object-fit: cover; display: block; margin: 0 auto 24px; border: 4px solid rgba(255,255,255,0.6); }
.main { flex: 1; padding: 32px 36px; }
.main h1 { margin: 0; font-size: 28px; color: #{accent}; }
.main .title { margin: 4px 0 20px; font-size: 15px; color: #666; }
section h2 { font-size: 15px; text-transform: uppercase; letter-spacing: 1px; border-bottom: 2px solid #{accent}; padding-bottom: 4px; }
section ul { padding-left: 18px; }
section li { margin-bottom: 6px; }
";

const CLEAN_STYLE: &str = "\
body { font-family: Verdana, Geneva, sans-serif; margin: 40px auto; max-width: 680px; color: #2f2f2f; }
header { text-align: center; }
header h1 { margin: 12px 0 0; font-size: 26px; }
header .title { margin: 4px 0 0; font-size: 14px; color: #666; }
header .rule { width: 80px; height: 3px; background: #{accent}; margin: 14px auto; }
header .contact { font-size: 11px; color: #777; }
.photo { width: 90px; height: 90px; border-radius: 50%; object-fit: cover; }
section h2 { color: #{accent}; font-size: 15px; margin-top: 26px; }
section ul { padding-left: 20px; }
section li { margin-bottom: 5px; }
";

// ────────────────────────────────────────────────────────────────────────────
// Template functions
// ────────────────────────────────────────────────────────────────────────────

/// Header-banner layout: accent-colored banner with photo, name, and contact
/// row; accent section headings below.
pub(super) fn modern(data: &ResumeData, accent: &str) -> MarkupDocument {
    let mut body = String::new();
    body.push_str("<header class=\"banner\">\n");
    if let Some(img) = photo_img(data) {
        body.push_str(&img);
        body.push('\n');
    }
    body.push_str("<div class=\"ident\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", text(&data.name)));
    body.push_str(&format!("<p class=\"title\">{}</p>\n", text(&data.job_title)));
    body.push_str(&format!(
        "<p class=\"contact\">{}</p>\n",
        contact_parts(data, CONTACT_FIELDS).join(" · ")
    ));
    body.push_str("</div>\n</header>\n<main>\n");
    push_profile_section(&mut body, data);
    push_experience_section(&mut body, data);
    body.push_str("</main>\n");

    document(MODERN_STYLE, accent, &body)
}

/// Minimal-header layout: serif type, thin accent rules, grayscale photo.
pub(super) fn minimalist(data: &ResumeData, accent: &str) -> MarkupDocument {
    let mut body = String::new();
    body.push_str("<header>\n");
    body.push_str(&format!("<h1>{}</h1>\n", text(&data.name)));
    body.push_str(&format!("<p class=\"title\">{}</p>\n", text(&data.job_title)));
    body.push_str(&format!(
        "<p class=\"contact\">{}</p>\n",
        contact_parts(data, CONTACT_FIELDS).join(" / ")
    ));
    if let Some(img) = photo_img(data) {
        body.push_str(&img);
        body.push('\n');
    }
    body.push_str("</header>\n");
    push_profile_section(&mut body, data);
    push_experience_section(&mut body, data);

    document(MINIMALIST_STYLE, accent, &body)
}

/// Two-column layout: accent sidebar holding the photo and contact details,
/// main column with name, profile, and experience.
pub(super) fn creative_sidebar(data: &ResumeData, accent: &str) -> MarkupDocument {
    let mut body = String::new();
    body.push_str("<div class=\"page\">\n<aside>\n");
    if let Some(img) = photo_img(data) {
        body.push_str(&img);
        body.push('\n');
    }
    for part in contact_parts(data, CONTACT_FIELDS) {
        body.push_str(&format!("<div class=\"contact-line\">{part}</div>\n"));
    }
    body.push_str("</aside>\n<div class=\"main\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", text(&data.name)));
    body.push_str(&format!("<p class=\"title\">{}</p>\n", text(&data.job_title)));
    push_profile_section(&mut body, data);
    push_experience_section(&mut body, data);
    body.push_str("</div>\n</div>\n");

    document(SIDEBAR_STYLE, accent, &body)
}

/// Centered layout: photo and name centered above an accent rule, accent
/// section headings.
pub(super) fn clean(data: &ResumeData, accent: &str) -> MarkupDocument {
    let mut body = String::new();
    body.push_str("<header>\n");
    if let Some(img) = photo_img(data) {
        body.push_str(&img);
        body.push('\n');
    }
    body.push_str(&format!("<h1>{}</h1>\n", text(&data.name)));
    body.push_str(&format!("<p class=\"title\">{}</p>\n", text(&data.job_title)));
    body.push_str("<div class=\"rule\"></div>\n");
    body.push_str(&format!(
        "<p class=\"contact\">{}</p>\n",
        contact_parts(data, CONTACT_FIELDS).join(" | ")
    ));
    body.push_str("</header>\n");
    push_profile_section(&mut body, data);
    push_experience_section(&mut body, data);

    document(CLEAN_STYLE, accent, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn push_profile_section(body: &mut String, data: &ResumeData) {
    body.push_str("<section>\n<h2>Profile</h2>\n");
    body.push_str(&format!("<p>{}</p>\n", text(&data.profile_summary)));
    body.push_str("</section>\n");
}

fn push_experience_section(body: &mut String, data: &ResumeData) {
    body.push_str("<section>\n<h2>Work Experience</h2>\n<ul>\n");
    for entry in non_empty_entries(&data.work_experience) {
        body.push_str(&format!("<li>{entry}</li>\n"));
    }
    body.push_str("</ul>\n</section>\n");
}

fn document(style: &str, accent: &str, body: &str) -> MarkupDocument {
    let style = style.replace("{accent}", accent);
    MarkupDocument(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{style}</style>\n</head>\n<body>\n{body}</body>\n</html>"
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeData {
        ResumeData {
            name: Some("Jo Smith".to_string()),
            email: Some("jo@example.com".to_string()),
            linked_in: Some("linkedin.com/in/josmith".to_string()),
            work_experience: vec!["Built X".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_modern_uses_banner_layout() {
        let html = modern(&sample(), "1F6FEB");
        assert!(html.as_str().contains("class=\"banner\""));
        assert!(html.as_str().contains("background: #1F6FEB"));
    }

    #[test]
    fn test_minimalist_has_no_accent_background() {
        let html = minimalist(&sample(), "444444");
        assert!(!html.as_str().contains("background: #444444"));
        assert!(html.as_str().contains("border-bottom: 1px solid #444444"));
    }

    #[test]
    fn test_sidebar_puts_contact_in_aside() {
        let html = creative_sidebar(&sample(), "2E7D6B");
        let s = html.as_str();
        let aside_end = s.find("</aside>").expect("sidebar must have an aside");
        let email_pos = s.find("jo@example.com").expect("email must render");
        assert!(email_pos < aside_end, "contact details belong in the sidebar");
    }

    #[test]
    fn test_clean_centers_header_with_rule() {
        let html = clean(&sample(), "7A263A");
        assert!(html.as_str().contains("class=\"rule\""));
        assert!(html.as_str().contains("text-align: center"));
    }

    #[test]
    fn test_contact_separator_differs_between_templates() {
        let data = ResumeData {
            email: Some("a@b.c".to_string()),
            phone: Some("123".to_string()),
            ..Default::default()
        };
        assert!(modern(&data, "000000").as_str().contains("a@b.c · 123"));
        assert!(minimalist(&data, "000000").as_str().contains("a@b.c / 123"));
        assert!(clean(&data, "000000").as_str().contains("a@b.c | 123"));
    }

    #[test]
    fn test_absent_contact_fields_are_simply_unrendered() {
        let data = ResumeData {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        let html = modern(&data, "000000");
        assert!(html.as_str().contains("<p class=\"contact\">555-0100</p>"));
    }
}
