//! Submit orchestration — decides what the page does when the resume form is submitted.
//!
//! One routine covers both historical page behaviors; `SubmitBehavior` selects between them.

use serde::{Deserialize, Serialize};

use crate::form::notice::Notice;
use crate::form::validator::{validate_form, FormValidation};

pub const LOADING_LABEL: &str = "Generating Resume...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBehavior {
    /// Cancel the native submission when any field is invalid.
    pub block_submission_on_invalid: bool,
    /// Disable the textareas while the loading state is shown. Browsers omit disabled
    /// controls from the submitted form data, so this defaults to off.
    pub disable_inputs_while_submitting: bool,
}

impl Default for SubmitBehavior {
    fn default() -> Self {
        Self {
            block_submission_on_invalid: true,
            disable_inputs_while_submitting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingState {
    pub button_disabled: bool,
    pub button_label: &'static str,
    pub spinner_visible: bool,
    pub inputs_disabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitPlan {
    /// Whether the submission reaches the server.
    pub proceed: bool,
    pub prevent_default: bool,
    pub validation: FormValidation,
    pub notice: Option<Notice>,
    /// Field to scroll to and focus.
    pub focus_field: Option<String>,
    pub loading: Option<LoadingState>,
    pub clear_drafts: bool,
}

/// Plans a submission of `fields` (document order) under `behavior`.
pub fn plan_submission<'a, I>(fields: I, behavior: SubmitBehavior) -> SubmitPlan
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let validation = validate_form(fields);

    if !validation.valid {
        let block = behavior.block_submission_on_invalid;
        return SubmitPlan {
            proceed: !block,
            prevent_default: block,
            focus_field: validation.first_invalid.clone(),
            notice: Some(Notice::correct_errors()),
            validation,
            loading: None,
            clear_drafts: false,
        };
    }

    SubmitPlan {
        proceed: true,
        prevent_default: false,
        validation,
        notice: None,
        focus_field: None,
        loading: Some(LoadingState {
            button_disabled: true,
            button_label: LOADING_LABEL,
            spinner_visible: true,
            inputs_disabled: behavior.disable_inputs_while_submitting,
        }),
        clear_drafts: true,
    }
}
