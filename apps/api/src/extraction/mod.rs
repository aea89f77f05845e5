//! Extraction collaborator — turns an uploaded résumé PDF into raw text and
//! raw text into a structured [`ExtractedFields`] record.
//!
//! The LLM boundary is behind the [`FieldExtractor`] trait so handlers can be
//! exercised with a canned extractor in tests; the production implementation
//! wraps the shared [`LlmClient`].

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACTION_PROMPT, EXTRACTION_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::resume::ExtractedFields;

/// Converts uploaded PDF bytes to raw text.
///
/// A PDF with no extractable text (scanned images, empty pages) is an upload
/// error — there is nothing to hand the extractor.
pub fn pdf_to_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Upload(format!("Could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Upload(
            "PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}

/// Pluggable extraction seam. Production: [`LlmFieldExtractor`]. Tests: mocks.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    /// Returns a structured record with optional keys; a partial record is a
    /// success, not a failure — missing keys default downstream.
    async fn extract(&self, raw_text: &str) -> Result<ExtractedFields, AppError>;
}

/// LLM-backed extractor using the shared Anthropic client.
pub struct LlmFieldExtractor {
    llm: LlmClient,
}

impl LlmFieldExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FieldExtractor for LlmFieldExtractor {
    async fn extract(&self, raw_text: &str) -> Result<ExtractedFields, AppError> {
        let prompt = EXTRACTION_PROMPT.replace("{resume_text}", raw_text);
        self.llm
            .complete_json(EXTRACTION_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Field extraction failed: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_to_text_rejects_garbage_bytes() {
        let err = pdf_to_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Upload(_)));
    }

    #[test]
    fn test_extraction_prompt_embeds_resume_text() {
        let prompt = EXTRACTION_PROMPT.replace("{resume_text}", "Jo Smith, Engineer");
        assert!(prompt.contains("Jo Smith, Engineer"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
