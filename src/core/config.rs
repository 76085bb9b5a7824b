//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with listener, logging, skill id and reminder settings

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REMINDER_OFFSET_SECONDS: u64 = 60;
pub const DEFAULT_REMINDER_LOCALE: &str = "en-US";
pub const DEFAULT_REMINDER_TEXT: &str = "Test reminder";
pub const DEFAULT_REMINDER_TIMEOUT_SECONDS: u64 = 10;

/// Settings for the reminder scheduled by the Yes intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSettings {
    pub offset_seconds: u64,
    pub locale: String,
    pub text: String,
    pub timeout: Duration,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            offset_seconds: DEFAULT_REMINDER_OFFSET_SECONDS,
            locale: DEFAULT_REMINDER_LOCALE.to_string(),
            text: DEFAULT_REMINDER_TEXT.to_string(),
            timeout: Duration::from_secs(DEFAULT_REMINDER_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub log_level: String,
    /// Expected application id; `None` accepts any caller
    pub skill_id: Option<String>,
    pub reminder: ReminderSettings,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Load configuration from an explicit variable map
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let offset_seconds = parse_positive(
            "REMINDER_OFFSET_SECONDS",
            get("REMINDER_OFFSET_SECONDS"),
            DEFAULT_REMINDER_OFFSET_SECONDS,
        )?;
        let timeout_seconds = parse_positive(
            "REMINDER_TIMEOUT_SECONDS",
            get("REMINDER_TIMEOUT_SECONDS"),
            DEFAULT_REMINDER_TIMEOUT_SECONDS,
        )?;

        Ok(Self {
            bind_addr: get("SKILL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            skill_id: get("SKILL_ID"),
            reminder: ReminderSettings {
                offset_seconds,
                locale: get("REMINDER_LOCALE")
                    .unwrap_or_else(|| DEFAULT_REMINDER_LOCALE.to_string()),
                text: get("REMINDER_TEXT").unwrap_or_else(|| DEFAULT_REMINDER_TEXT.to_string()),
                timeout: Duration::from_secs(timeout_seconds),
            },
        })
    }
}

fn parse_positive(key: &str, raw: Option<String>, default: u64) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: u64 = raw
        .parse()
        .map_err(|e| anyhow!("{key} must be a whole number of seconds, got '{raw}': {e}"))?;
    if value == 0 {
        return Err(anyhow!("{key} must be greater than zero"));
    }
    Ok(value)
}
