//! Schedule descriptors and cron compilation.
//!
//! A [`ScheduleDescriptor`] captures *how* a schedule was built (every N
//! minutes, daily at a fixed time, ...) independently of the compiled cron
//! string. The descriptor is ephemeral builder state; the cron string is the
//! only artifact that crosses a process boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::cron::{CronError, CronExpression, CronField};

/// All weekdays, used when a day-of-week selection collapses to a wildcard.
const ALL_DAYS: std::ops::RangeInclusive<u32> = 0..=6;

/// A structured description of a recurring schedule.
///
/// `Weekly::days_of_week` has a documented quirk: an empty set and the full
/// 7-day set both compile to `*`, and a non-trivial set always serializes as
/// a sorted comma list (`1,2,3,4,5`), never range form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleDescriptor {
    /// Fires every N minutes.
    Minutes { interval_minutes: u32 },
    /// Fires at minute 0 every N hours.
    Hourly { interval_hours: u32 },
    /// Fires once per day at a fixed time.
    Daily { hour: u32, minute: u32 },
    /// Fires at a fixed time on a subset of weekdays (0 = Sunday).
    Weekly {
        hour: u32,
        minute: u32,
        days_of_week: BTreeSet<u32>,
    },
    /// Fires at a fixed time on a fixed day of the month.
    Monthly {
        hour: u32,
        minute: u32,
        day_of_month: u32,
    },
    /// Free-form expression, user-authored or preset-derived.
    ///
    /// Carries the five raw field tokens plus the day-of-week selection
    /// expanded into an explicit set so a weekday-toggle UI can reflect
    /// presets consistently.
    Custom {
        minute: String,
        hour: String,
        day_of_month: String,
        month: String,
        day_of_week: String,
        days_of_week: BTreeSet<u32>,
    },
}

impl ScheduleDescriptor {
    /// Compile the descriptor into its canonical 5-field cron expression.
    ///
    /// No domain validation is performed; an out-of-range parameter (e.g.
    /// `hour: 25`) compiles to an expression that never fires. Validating
    /// inputs is the caller's concern.
    pub fn compile(&self) -> String {
        match self {
            Self::Minutes { interval_minutes } => format!("*/{interval_minutes} * * * *"),
            Self::Hourly { interval_hours: 1 } => "0 * * * *".to_string(),
            Self::Hourly { interval_hours } => format!("0 */{interval_hours} * * *"),
            Self::Daily { hour, minute } => format!("{minute} {hour} * * *"),
            Self::Weekly {
                hour,
                minute,
                days_of_week,
            } => {
                let dow = if days_of_week.is_empty() || days_of_week.len() == 7 {
                    "*".to_string()
                } else {
                    // Always a sorted comma list, never `a-b` range form.
                    days_of_week
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",")
                };
                format!("{minute} {hour} * * {dow}")
            }
            Self::Monthly {
                hour,
                minute,
                day_of_month,
            } => format!("{minute} {hour} {day_of_month} * *"),
            Self::Custom {
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
                ..
            } => format!("{minute} {hour} {day_of_month} {month} {day_of_week}"),
        }
    }

    /// Parse a cron expression back into a descriptor for editing.
    ///
    /// Best-effort: the result is always a [`ScheduleDescriptor::Custom`]
    /// carrying the raw fields, with the day-of-week field expanded into an
    /// explicit day set (wildcard → all 7, range → inclusive run, list →
    /// members, literal → singleton; anything else → empty).
    ///
    /// # Errors
    ///
    /// Returns [`CronError::InvalidFieldCount`] when the expression does not
    /// have exactly 5 fields.
    pub fn decompile(cron: &str) -> Result<Self, CronError> {
        let expr = CronExpression::parse(cron)?;
        let [minute, hour, day_of_month, month, day_of_week] = expr.tokens().clone();

        let days_of_week = expand_day_set(&expr.day_of_week);

        Ok(Self::Custom {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            days_of_week,
        })
    }
}

/// Expand a parsed day-of-week field into an explicit day set.
///
/// Members outside 0-6 are dropped; they have no toggle to map to. Step and
/// malformed fields expand to the empty set.
fn expand_day_set(field: &CronField) -> BTreeSet<u32> {
    match field {
        CronField::Any => ALL_DAYS.collect(),
        CronField::Value(day) => ALL_DAYS.filter(|d| d == day).collect(),
        CronField::Range(start, end) => (*start..=*end).filter(|d| ALL_DAYS.contains(d)).collect(),
        CronField::List(days) => days
            .iter()
            .copied()
            .filter(|d| ALL_DAYS.contains(d))
            .collect(),
        CronField::Step(_) | CronField::Unmatchable => BTreeSet::new(),
    }
}
