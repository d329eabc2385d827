//! Timestamps check
//!
//! Finds every `YYYY-MM-DD HH:MM[:SS]` shaped substring and requires it to
//! be a real calendar date and time.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

static TIMESTAMP: OnceLock<Regex> = OnceLock::new();

fn timestamp() -> &'static Regex {
    TIMESTAMP.get_or_init(|| {
        Regex::new(r"\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}(?::\d{2})?").expect("valid regex")
    })
}

/// Why a timestamp-shaped substring was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampDefect {
    /// Neither 16 nor 19 characters long
    Format,
    /// Right length, not a valid date or time
    Value,
}

/// Validate one timestamp-shaped substring
pub fn validate_timestamp(text: &str) -> Result<NaiveDateTime, TimestampDefect> {
    let format = match text.chars().count() {
        16 => "%Y-%m-%d %H:%M",
        19 => "%Y-%m-%d %H:%M:%S",
        _ => return Err(TimestampDefect::Format),
    };
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let parsed =
        NaiveDateTime::parse_from_str(&normalized, format).map_err(|_| TimestampDefect::Value)?;
    // chrono parses second 60 as a leap second; seconds stop at 59 here
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimestampDefect::Value);
    }
    Ok(parsed)
}

pub struct TimestampsCheck;

impl TimestampsCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimestampsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for TimestampsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Timestamps
    }

    fn description(&self) -> &'static str {
        "Requires every date-time in the text to be valid"
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> CheckResult {
        let issues = timestamp()
            .find_iter(content)
            .filter_map(|m| {
                let text = m.as_str();
                match validate_timestamp(text) {
                    Ok(_) => None,
                    Err(TimestampDefect::Format) => {
                        Some(format!("Invalid timestamp format: {}", text))
                    }
                    Err(TimestampDefect::Value) => Some(format!("Invalid timestamp: {}", text)),
                }
            })
            .collect();

        CheckResult::from_issues(issues)
    }
}
