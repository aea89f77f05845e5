//! Resume data model — the structured record of one user's résumé content.
//!
//! `ResumeData` is a pure value holder: field contents pass through unchecked
//! (free text, unvalidated email strings). That permissiveness is deliberate —
//! validation belongs to no layer of this service.

use serde::{Deserialize, Serialize};

/// The structured résumé content for one session.
///
/// `work_experience` entries are never null; empty strings are permitted here
/// and filtered out at render time. `profile_picture` is owned exclusively by
/// this value — the raw bytes are never shared or serialized into API
/// responses (handlers expose presence as a boolean instead).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_in: Option<String>,
    pub profile_summary: Option<String>,
    pub work_experience: Vec<String>,
    #[serde(skip)]
    pub profile_picture: Option<Vec<u8>>,
}

/// A structured record returned by the extraction collaborator.
///
/// Every key is optional: the LLM is asked for JSON with these keys, but a
/// partial record must apply cleanly rather than fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Option<Vec<String>>,
}

impl ResumeData {
    /// Bulk-applies an extraction result.
    ///
    /// Scalar keys present in the record overwrite the current value; missing
    /// keys keep whatever was there before. A present `experience` key
    /// replaces `work_experience` wholesale (order preserved); a missing key
    /// leaves it untouched. The profile picture is never part of extraction.
    pub fn apply_extracted(&mut self, fields: ExtractedFields) {
        if let Some(name) = fields.name {
            self.name = Some(name);
        }
        if let Some(job_title) = fields.job_title {
            self.job_title = Some(job_title);
        }
        if let Some(email) = fields.email {
            self.email = Some(email);
        }
        if let Some(phone) = fields.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = fields.address {
            self.address = Some(address);
        }
        if let Some(linked_in) = fields.linked_in {
            self.linked_in = Some(linked_in);
        }
        if let Some(summary) = fields.summary {
            self.profile_summary = Some(summary);
        }
        if let Some(experience) = fields.experience {
            self.work_experience = experience;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> ResumeData {
        ResumeData {
            name: Some("Jo Smith".to_string()),
            job_title: Some("Engineer".to_string()),
            email: Some("jo@example.com".to_string()),
            phone: Some("+31 6 1234 5678".to_string()),
            address: Some("Amsterdam".to_string()),
            linked_in: Some("linkedin.com/in/josmith".to_string()),
            profile_summary: Some("Builds things.".to_string()),
            work_experience: vec!["Built X".to_string(), "Shipped Y".to_string()],
            profile_picture: Some(vec![0x89, 0x50, 0x4E, 0x47]),
        }
    }

    #[test]
    fn test_apply_empty_record_changes_nothing() {
        let mut data = populated();
        let before = format!("{data:?}");
        data.apply_extracted(ExtractedFields::default());
        assert_eq!(format!("{data:?}"), before, "empty record must be a no-op");
    }

    #[test]
    fn test_apply_partial_record_updates_only_named_fields() {
        let mut data = populated();
        data.apply_extracted(ExtractedFields {
            name: Some("Ana".to_string()),
            ..Default::default()
        });
        assert_eq!(data.name.as_deref(), Some("Ana"));
        assert_eq!(data.job_title.as_deref(), Some("Engineer"));
        assert_eq!(data.email.as_deref(), Some("jo@example.com"));
        assert_eq!(data.work_experience.len(), 2, "experience must be untouched");
    }

    #[test]
    fn test_apply_replaces_experience_wholesale() {
        let mut data = populated();
        data.apply_extracted(ExtractedFields {
            experience: Some(vec!["New role".to_string()]),
            ..Default::default()
        });
        assert_eq!(data.work_experience, vec!["New role".to_string()]);
    }

    #[test]
    fn test_apply_preserves_experience_order() {
        let mut data = ResumeData::default();
        data.apply_extracted(ExtractedFields {
            experience: Some(vec!["first".into(), "second".into(), "third".into()]),
            ..Default::default()
        });
        assert_eq!(data.work_experience, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_apply_never_touches_profile_picture() {
        let mut data = populated();
        data.apply_extracted(ExtractedFields {
            name: Some("Ana".to_string()),
            experience: Some(vec![]),
            ..Default::default()
        });
        assert!(data.profile_picture.is_some());
    }

    #[test]
    fn test_extracted_fields_tolerates_missing_keys_in_json() {
        let record: ExtractedFields = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Ana"));
        assert!(record.experience.is_none());
    }

    #[test]
    fn test_resume_data_does_not_serialize_picture_bytes() {
        let json = serde_json::to_string(&populated()).unwrap();
        assert!(!json.contains("profile_picture"));
    }
}
