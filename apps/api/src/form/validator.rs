use serde::{Deserialize, Serialize};

use crate::form::policy::policy_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    TooShort,
    TooLong,
}

/// A field whose trimmed value falls outside its policy bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub limit: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }
}

impl From<&FieldViolation> for ValidationResult {
    fn from(v: &FieldViolation) -> Self {
        Self {
            valid: false,
            reason: Some(v.message.clone()),
        }
    }
}

/// Checks one value against the policy for `field_name`.
///
/// The value is trimmed before measuring; length counts chars, not bytes.
/// Below-minimum is checked before above-maximum.
pub fn check_field(field_name: &str, value: &str) -> Result<(), FieldViolation> {
    let policy = policy_for(field_name);
    let len = value.trim().chars().count();

    if len < policy.min_length {
        return Err(FieldViolation {
            field: field_name.to_string(),
            kind: ViolationKind::TooShort,
            limit: policy.min_length,
            message: format!("Must contain at least {} characters.", policy.min_length),
        });
    }
    if len > policy.max_length {
        return Err(FieldViolation {
            field: field_name.to_string(),
            kind: ViolationKind::TooLong,
            limit: policy.max_length,
            message: format!("Must not exceed {} characters.", policy.max_length),
        });
    }
    Ok(())
}

pub fn validate_field(field_name: &str, value: &str) -> ValidationResult {
    match check_field(field_name, value) {
        Ok(()) => ValidationResult::ok(),
        Err(v) => ValidationResult::from(&v),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<FieldViolation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormValidation {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
    /// First invalid field in the order the fields were given.
    pub first_invalid: Option<String>,
}

impl FormValidation {
    pub fn violations(&self) -> Vec<FieldViolation> {
        self.fields
            .iter()
            .filter_map(|r| r.violation.clone())
            .collect()
    }
}

/// Validates every `(field, value)` pair. Callers pass fields in document order so
/// `first_invalid` names the field the page should scroll to.
pub fn validate_form<'a, I>(fields: I) -> FormValidation
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let fields: Vec<FieldReport> = fields
        .into_iter()
        .map(|(name, value)| {
            let violation = check_field(name, value).err();
            let result = violation
                .as_ref()
                .map(ValidationResult::from)
                .unwrap_or_else(ValidationResult::ok);
            FieldReport {
                field: name.to_string(),
                result,
                violation,
            }
        })
        .collect();

    let first_invalid = fields
        .iter()
        .find(|r| !r.result.valid)
        .map(|r| r.field.clone());

    FormValidation {
        valid: first_invalid.is_none(),
        fields,
        first_invalid,
    }
}
