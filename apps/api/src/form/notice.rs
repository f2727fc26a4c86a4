use serde::Serialize;

/// Page-level notices dismiss themselves after this long.
pub const AUTO_DISMISS_MS: u64 = 5000;

pub const CORRECT_ERRORS_MESSAGE: &str = "Please correct the errors below before submitting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub css_class: &'static str,
    pub dismiss_after_ms: u64,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        let css_class = match level {
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Error => "alert-danger",
        };
        Self {
            level,
            message: message.into(),
            css_class,
            dismiss_after_ms: AUTO_DISMISS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn correct_errors() -> Self {
        Self::error(CORRECT_ERRORS_MESSAGE)
    }
}
