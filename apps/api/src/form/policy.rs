//! Field policy — static min/max character bounds for each resume textarea.

use serde::Serialize;

/// Inclusive character-count bounds for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

/// Bounds applied to any field name not listed in `FIELD_POLICIES`.
pub const DEFAULT_POLICY: FieldPolicy = FieldPolicy {
    min_length: 10,
    max_length: 1000,
};

const FIELD_POLICIES: &[(&str, FieldPolicy)] = &[
    (
        "job_titles",
        FieldPolicy {
            min_length: 10,
            max_length: 2000,
        },
    ),
    (
        "projects",
        FieldPolicy {
            min_length: 10,
            max_length: 2000,
        },
    ),
    (
        "skills",
        FieldPolicy {
            min_length: 5,
            max_length: 1000,
        },
    ),
    (
        "education",
        FieldPolicy {
            min_length: 10,
            max_length: 1000,
        },
    ),
];

/// Exact-match lookup; unknown names fall back to `DEFAULT_POLICY`.
pub fn policy_for(field_name: &str) -> FieldPolicy {
    FIELD_POLICIES
        .iter()
        .find(|(name, _)| *name == field_name)
        .map(|(_, policy)| *policy)
        .unwrap_or(DEFAULT_POLICY)
}

/// Describes one tracked textarea on the resume form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub rows: u8,
    pub policy: FieldPolicy,
}

/// Tracked fields in document order. Error reporting and draft loading iterate this order.
pub const TRACKED_FIELDS: &[&str] = &["job_titles", "projects", "skills", "education"];

pub fn is_tracked(field_name: &str) -> bool {
    TRACKED_FIELDS.contains(&field_name)
}

pub fn form_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            name: "job_titles",
            label: "Job Titles & Experience",
            placeholder: "e.g., Software Engineer at TechCorp (2020-2023)\nDeveloped web applications using Python and React...",
            rows: 5,
            policy: policy_for("job_titles"),
        },
        FieldDescriptor {
            name: "projects",
            label: "Projects",
            placeholder: "e.g., E-commerce Platform\nBuilt a full-stack e-commerce application using Django, PostgreSQL, and React...",
            rows: 5,
            policy: policy_for("projects"),
        },
        FieldDescriptor {
            name: "skills",
            label: "Skills",
            placeholder: "e.g., Python, JavaScript, React, Django, PostgreSQL, AWS, Docker...",
            rows: 3,
            policy: policy_for("skills"),
        },
        FieldDescriptor {
            name: "education",
            label: "Education",
            placeholder: "e.g., Bachelor of Science in Computer Science\nUniversity of Technology (2016-2020)\nRelevant Coursework: Data Structures, Algorithms, Software Engineering...",
            rows: 4,
            policy: policy_for("education"),
        },
    ]
}
