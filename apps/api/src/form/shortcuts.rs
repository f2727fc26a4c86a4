use serde::{Deserialize, Serialize};

/// What the current page contains; shortcuts only apply where their target exists.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageContext {
    pub has_form: bool,
    pub has_resume_content: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    SubmitForm,
    /// Print with resume print styles; the browser's own print dialog is suppressed.
    Print,
}

/// Maps a key press to an action. Only Ctrl (or Cmd) combinations are shortcuts.
pub fn resolve_shortcut(
    key: &str,
    ctrl_or_meta: bool,
    page: PageContext,
) -> Option<ShortcutAction> {
    if !ctrl_or_meta {
        return None;
    }
    match key {
        "Enter" if page.has_form => Some(ShortcutAction::SubmitForm),
        "p" if page.has_resume_content => Some(ShortcutAction::Print),
        _ => None,
    }
}
