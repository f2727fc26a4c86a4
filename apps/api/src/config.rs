use anyhow::{Context, Result};

use crate::form::submit::SubmitBehavior;

const DEFAULT_DRAFT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset → drafts are kept in process memory.
    pub redis_url: Option<String>,
    pub draft_ttl_secs: u64,
    pub submit_behavior: SubmitBehavior,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SubmitBehavior::default();

        Ok(Config {
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            draft_ttl_secs: std::env::var("DRAFT_TTL_SECS")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("DRAFT_TTL_SECS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_DRAFT_TTL_SECS),
            submit_behavior: SubmitBehavior {
                block_submission_on_invalid: env_flag(
                    "BLOCK_SUBMISSION_ON_INVALID",
                    defaults.block_submission_on_invalid,
                )?,
                disable_inputs_while_submitting: env_flag(
                    "DISABLE_INPUTS_WHILE_SUBMITTING",
                    defaults.disable_inputs_while_submitting,
                )?,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw).with_context(|| format!("'{key}' must be true or false")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" YES ").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(!parse_flag("False").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
        assert!(parse_flag("").is_err());
    }
}
