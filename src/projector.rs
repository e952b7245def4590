//! Forward projection of cron execution times.
//!
//! The projector walks the calendar one minute at a time and collects the
//! instants that satisfy all five fields. Month lengths, leap years and year
//! rollovers come from chrono's calendar arithmetic rather than being
//! reimplemented here.

use chrono::{DateTime, Duration, TimeZone, Timelike};
use tracing::debug;

use crate::cron::CronExpression;

/// Upper bound on projection steps: the minutes in a non-leap year.
///
/// Some syntactically valid expressions are permanently unsatisfiable
/// (e.g. day-of-month 31 in a February-only month field); the bound turns
/// them into an empty result instead of an infinite loop.
pub const MAX_PROJECTION_MINUTES: u32 = 365 * 24 * 60;

impl CronExpression {
    /// Calculate the next matching instant strictly after `after`.
    ///
    /// Advance-then-test: `after` itself is never returned, even when it
    /// matches. Returns `None` when no match exists within
    /// [`MAX_PROJECTION_MINUTES`].
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.next_runs(after.clone(), 1).into_iter().next()
    }

    /// Calculate the next `count` matching instants strictly after `from`.
    ///
    /// Results are strictly increasing at whole-minute resolution and each
    /// satisfies all five fields simultaneously. The iteration budget is
    /// shared across the whole call, so an unsatisfiable or sparse
    /// expression yields fewer than `count` instants (possibly zero); that
    /// is an expected outcome, not an error.
    pub fn next_runs<Tz: TimeZone>(&self, from: DateTime<Tz>, count: usize) -> Vec<DateTime<Tz>> {
        let mut runs = Vec::with_capacity(count);
        if count == 0 {
            return runs;
        }

        // Truncate to whole-minute resolution so minute stepping stays
        // aligned to the calendar grid.
        let mut current = from
            .clone()
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(from);

        for _ in 0..MAX_PROJECTION_MINUTES {
            current = current + Duration::minutes(1);
            if self.matches(&current) {
                runs.push(current.clone());
                if runs.len() == count {
                    return runs;
                }
            }
        }

        debug!(
            expression = %self,
            collected = runs.len(),
            requested = count,
            "projection budget exhausted before collecting all runs"
        );
        runs
    }
}

/// Project the next `count` execution instants of a cron expression string.
///
/// A malformed expression (wrong field count) yields an empty vector rather
/// than an error; the engine is driven by live user input and must never
/// interrupt the caller mid-keystroke.
pub fn next_runs<Tz: TimeZone>(cron: &str, from: DateTime<Tz>, count: usize) -> Vec<DateTime<Tz>> {
    match CronExpression::parse(cron) {
        Ok(expr) => expr.next_runs(from, count),
        Err(_) => Vec::new(),
    }
}
