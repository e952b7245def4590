//! Cron expression parsing and field matching.
//!
//! Supports the standard 5-field cron format: `minute hour day month weekday`.
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0 = Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! Parsing is deliberately lenient: the only hard error is a wrong field
//! count. A field whose tokens do not parse as integers simply never matches,
//! so live, partially-typed input degrades to "no runs" instead of crashing
//! the caller.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing cron expressions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CronError {
    #[error("Invalid cron expression: expected 5 fields, got {0}")]
    InvalidFieldCount(usize),
}

/// A single field in a cron expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronField {
    /// Wildcard (`*`) - matches all values.
    Any,
    /// Specific value.
    Value(u32),
    /// List of values (e.g., `1,3,5`).
    List(Vec<u32>),
    /// Inclusive range (e.g., `1-5`).
    Range(u32, u32),
    /// Step (e.g., `*/5`).
    Step(u32),
    /// Malformed field - matches nothing.
    Unmatchable,
}

impl CronField {
    /// Parse a single field specification.
    ///
    /// Never fails: tokens that do not parse as integers yield
    /// [`CronField::Unmatchable`] (or are dropped from a list), so a
    /// half-typed field means "never fires" rather than an error.
    pub fn parse(field: &str) -> Self {
        if field == "*" {
            return Self::Any;
        }

        // Step (*/n). A zero step would divide by zero below, so it is
        // unmatchable rather than a panic.
        if let Some(step_str) = field.strip_prefix("*/") {
            return match step_str.parse::<u32>() {
                Ok(step) if step > 0 => Self::Step(step),
                _ => Self::Unmatchable,
            };
        }

        // Range (a-b).
        if let Some((start, end)) = field.split_once('-') {
            return match (start.parse::<u32>(), end.parse::<u32>()) {
                (Ok(start), Ok(end)) => Self::Range(start, end),
                _ => Self::Unmatchable,
            };
        }

        // List (a,b,c). Unparseable members are skipped; they can never
        // match, so dropping them is equivalent.
        if field.contains(',') {
            let values: Vec<u32> = field
                .split(',')
                .filter_map(|token| token.parse::<u32>().ok())
                .collect();
            return Self::List(values);
        }

        // Single value.
        match field.parse::<u32>() {
            Ok(value) => Self::Value(value),
            Err(_) => Self::Unmatchable,
        }
    }

    /// Check if the field matches the given calendar value.
    ///
    /// No domain check is applied: a literal outside the field's calendar
    /// domain (e.g. minute `75`) simply never matches. `Step(n)` tests
    /// `value % n == 0` against the absolute value, which intentionally
    /// ignores the domain minimum (day-of-month starts at 1, but `*/n`
    /// still steps from 0).
    pub fn matches(&self, value: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Value(v) => *v == value,
            Self::List(values) => values.contains(&value),
            Self::Range(start, end) => value >= *start && value <= *end,
            Self::Step(step) => value % step == 0,
            Self::Unmatchable => false,
        }
    }
}

/// A parsed cron expression.
///
/// Retains the original field tokens so [`fmt::Display`] reproduces the
/// canonical single-spaced form byte-for-byte; downstream schedulers parse
/// that string independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    /// Original field tokens, in order.
    tokens: [String; 5],
    /// Minute (0-59).
    pub minute: CronField,
    /// Hour (0-23).
    pub hour: CronField,
    /// Day of month (1-31).
    pub day_of_month: CronField,
    /// Month (1-12).
    pub month: CronField,
    /// Day of week (0-6, Sunday = 0).
    pub day_of_week: CronField,
}

impl CronExpression {
    /// Parse a cron expression string.
    ///
    /// # Errors
    ///
    /// Returns [`CronError::InvalidFieldCount`] when the expression does not
    /// split into exactly 5 whitespace-separated fields. Field contents are
    /// never an error (see [`CronField::parse`]).
    pub fn parse(expr: &str) -> Result<Self, CronError> {
        let parts: Vec<&str> = expr.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(CronError::InvalidFieldCount(parts.len()));
        }

        Ok(Self {
            tokens: [
                parts[0].to_string(),
                parts[1].to_string(),
                parts[2].to_string(),
                parts[3].to_string(),
                parts[4].to_string(),
            ],
            minute: CronField::parse(parts[0]),
            hour: CronField::parse(parts[1]),
            day_of_month: CronField::parse(parts[2]),
            month: CronField::parse(parts[3]),
            day_of_week: CronField::parse(parts[4]),
        })
    }

    /// Check if the cron expression matches the given instant.
    ///
    /// All five fields must match simultaneously. The instant is evaluated
    /// against whatever calendar clock its timezone carries; no conversion
    /// is performed.
    pub fn matches<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> bool {
        self.minute.matches(time.minute())
            && self.hour.matches(time.hour())
            && self.day_of_month.matches(time.day())
            && self.month.matches(time.month())
            && self.day_of_week.matches(time.weekday().num_days_from_sunday())
    }

    /// The raw token for each of the five fields, in order.
    pub fn tokens(&self) -> &[String; 5] {
        &self.tokens
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
