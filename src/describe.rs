//! Natural-language descriptions of cron expressions.
//!
//! Known presets get their canned description by exact string match; every
//! other expression gets a sentence composed from per-field clauses in a
//! fixed order (minute, hour, day-of-week, day-of-month, month). A field
//! whose shape has no phrasing contributes no clause, so garbage degrades to
//! a shorter sentence instead of an error.

use crate::cron::{CronExpression, CronField};
use crate::presets;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Produce a one-line cadence summary for a cron expression.
///
/// Returns the literal `"Invalid cron expression"` when the input does not
/// split into 5 fields; never panics for any input string.
pub fn describe(cron: &str) -> String {
    let Ok(expr) = CronExpression::parse(cron) else {
        return "Invalid cron expression".to_string();
    };

    if let Some(preset) = presets::find(&expr.to_string()) {
        return preset.description.to_string();
    }

    let mut clauses: Vec<String> = Vec::new();

    // Minute and hour share the leading time slot: a literal hour folds any
    // minute clause into a single combined 12-hour time.
    match &expr.hour {
        CronField::Value(hour) => {
            let minute = match &expr.minute {
                CronField::Value(minute) => *minute,
                _ => 0,
            };
            clauses.push(format!("at {}", twelve_hour(*hour, minute)));
        }
        hour => {
            if let Some(clause) = minute_clause(&expr.minute) {
                clauses.push(clause);
            }
            match hour {
                CronField::Step(n) => clauses.push(format!("every {n} hours")),
                CronField::Range(start, end) => {
                    clauses.push(format!("between {start}:00 and {end}:00"));
                }
                _ => {}
            }
        }
    }

    if let Some(clause) = day_of_week_clause(&expr.day_of_week) {
        clauses.push(clause);
    }

    match &expr.day_of_month {
        CronField::Step(n) => clauses.push(format!("every {n} days")),
        CronField::Value(day) => clauses.push(format!("on day {day}")),
        _ => {}
    }

    match &expr.month {
        CronField::Step(n) => clauses.push(format!("every {n} months")),
        CronField::Value(month) => {
            if let Some(name) = month_abbrev(*month) {
                clauses.push(format!("in {name}"));
            }
        }
        _ => {}
    }

    clauses.join(", ")
}

fn minute_clause(field: &CronField) -> Option<String> {
    match field {
        CronField::Any => Some("every minute".to_string()),
        CronField::Step(n) => Some(format!("every {n} minutes")),
        CronField::Value(0) => Some("at the start of the hour".to_string()),
        CronField::Value(minute) => Some(format!("at minute {minute}")),
        _ => None,
    }
}

fn day_of_week_clause(field: &CronField) -> Option<String> {
    match field {
        CronField::Range(start, end) => {
            let start = day_name(*start)?;
            let end = day_name(*end)?;
            Some(format!("{start} to {end}"))
        }
        CronField::List(days) => {
            let names: Vec<&str> = days.iter().filter_map(|&d| day_abbrev(d)).collect();
            if names.is_empty() {
                None
            } else {
                Some(format!("on {}", names.join(", ")))
            }
        }
        CronField::Value(day) => Some(format!("every {}", day_name(*day)?)),
        _ => None,
    }
}

/// 12-hour clock rendering: hour 0 is 12 AM, hour 13 is 1 PM.
fn twelve_hour(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:{minute:02} {period}")
}

fn day_name(day: u32) -> Option<&'static str> {
    DAY_NAMES.get(day as usize).copied()
}

fn day_abbrev(day: u32) -> Option<&'static str> {
    DAY_ABBREVS.get(day as usize).copied()
}

fn month_abbrev(month: u32) -> Option<&'static str> {
    MONTH_ABBREVS.get(month.checked_sub(1)? as usize).copied()
}
