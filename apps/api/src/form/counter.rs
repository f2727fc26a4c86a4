use serde::Serialize;

use crate::form::policy::policy_for;

/// Remaining-character threshold below which the counter turns to a warning.
const WARNING_REMAINING: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterTone {
    Muted,
    Warning,
    Danger,
}

impl CounterTone {
    pub fn css_class(self) -> &'static str {
        match self {
            CounterTone::Muted => "text-muted",
            CounterTone::Warning => "text-warning",
            CounterTone::Danger => "text-danger",
        }
    }
}

/// Live `current/max` counter shown under a textarea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterCounter {
    pub current: usize,
    pub max: usize,
    pub remaining: i64,
    pub tone: CounterTone,
    pub css_class: &'static str,
    pub text: String,
}

/// Counts the raw (untrimmed) value against the field's max length.
pub fn counter_for(field_name: &str, value: &str) -> CharacterCounter {
    let max = policy_for(field_name).max_length;
    let current = value.chars().count();
    let remaining = max as i64 - current as i64;

    let tone = if remaining < 0 {
        CounterTone::Danger
    } else if remaining < WARNING_REMAINING {
        CounterTone::Warning
    } else {
        CounterTone::Muted
    };

    CharacterCounter {
        current,
        max,
        remaining,
        tone,
        css_class: tone.css_class(),
        text: format!("{current}/{max}"),
    }
}
