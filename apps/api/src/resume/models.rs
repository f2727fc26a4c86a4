use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::skills::ExtractedSkills;
use crate::form::counter::CharacterCounter;
use crate::form::notice::Notice;
use crate::form::policy::{FieldDescriptor, FieldPolicy};
use crate::form::shortcuts::{PageContext, ShortcutAction};
use crate::form::submit::SubmitBehavior;
use crate::form::validator::ValidationResult;

/// The four resume textareas. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFields {
    pub job_titles: String,
    pub projects: String,
    pub skills: String,
    pub education: String,
}

impl ResumeFields {
    /// `(field, value)` pairs in document order.
    pub fn pairs(&self) -> [(&str, &str); 4] {
        [
            ("job_titles", self.job_titles.as_str()),
            ("projects", self.projects.as_str()),
            ("skills", self.skills.as_str()),
            ("education", self.education.as_str()),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct ResumeSubmission {
    #[serde(flatten)]
    pub fields: ResumeFields,
    /// Drafts under this scope are cleared once the submission validates.
    #[serde(default)]
    pub draft_scope: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ResumeData {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_titles: String,
    pub projects: String,
    pub skills: String,
    pub education: String,
    pub extracted_skills: ExtractedSkills,
    pub keyword_density: BTreeMap<String, u32>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FormSchemaResponse {
    pub fields: Vec<FieldDescriptor>,
    pub default_policy: FieldPolicy,
    pub submit_behavior: SubmitBehavior,
}

#[derive(Debug, Deserialize)]
pub struct ValidateFieldRequest {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateFieldResponse {
    pub field: String,
    pub result: ValidationResult,
    pub counter: CharacterCounter,
}

#[derive(Debug, Deserialize)]
pub struct DraftUpdate {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct DraftsResponse {
    pub scope: Uuid,
    pub drafts: BTreeMap<String, String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Deserialize)]
pub struct ShortcutRequest {
    pub key: String,
    #[serde(default)]
    pub ctrl_or_meta: bool,
    #[serde(default)]
    pub page: PageContext,
}

#[derive(Debug, Serialize)]
pub struct ShortcutResponse {
    pub action: Option<ShortcutAction>,
}
