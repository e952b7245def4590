//! Static catalog of common schedules.
//!
//! Presets are immutable seed data for picker UIs; they are matched by exact
//! cron string, never by semantic equivalence, so a hand-written
//! `0,5,10,...` list does not inherit the `*/5` preset's description.

/// A named, pre-authored cron expression with a canned description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// The 5-field cron expression, in canonical single-spaced form.
    pub cron: &'static str,
    /// Human-readable cadence summary.
    pub description: &'static str,
}

/// The preset catalog, ordered from tightest to loosest cadence.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Every minute",
        cron: "* * * * *",
        description: "Runs every minute",
    },
    Preset {
        name: "Every 5 minutes",
        cron: "*/5 * * * *",
        description: "Runs every 5 minutes",
    },
    Preset {
        name: "Every 15 minutes",
        cron: "*/15 * * * *",
        description: "Runs every 15 minutes",
    },
    Preset {
        name: "Every 30 minutes",
        cron: "*/30 * * * *",
        description: "Runs every 30 minutes",
    },
    Preset {
        name: "Every hour",
        cron: "0 * * * *",
        description: "Runs at the start of every hour",
    },
    Preset {
        name: "Every 2 hours",
        cron: "0 */2 * * *",
        description: "Runs every 2 hours",
    },
    Preset {
        name: "Every 6 hours",
        cron: "0 */6 * * *",
        description: "Runs every 6 hours",
    },
    Preset {
        name: "Every 12 hours",
        cron: "0 */12 * * *",
        description: "Runs every 12 hours",
    },
    Preset {
        name: "Daily at midnight",
        cron: "0 0 * * *",
        description: "Runs daily at midnight",
    },
    Preset {
        name: "Daily at 9 AM",
        cron: "0 9 * * *",
        description: "Runs daily at 9:00 AM",
    },
    Preset {
        name: "Daily at 6 PM",
        cron: "0 18 * * *",
        description: "Runs daily at 6:00 PM",
    },
    Preset {
        name: "Weekdays at 9 AM",
        cron: "0 9 * * 1-5",
        description: "Runs at 9:00 AM, Monday to Friday",
    },
    Preset {
        name: "Weekly on Sunday",
        cron: "0 0 * * 0",
        description: "Runs every Sunday at midnight",
    },
    Preset {
        name: "Monthly on the 1st",
        cron: "0 0 1 * *",
        description: "Runs on the 1st of every month at midnight",
    },
];

/// Look up a preset by exact cron string.
///
/// The input is whitespace-normalized with the same tokenization parsing
/// uses before comparing, so `"0  9 * * *"` still hits the 9 AM preset.
pub fn find(cron: &str) -> Option<&'static Preset> {
    let normalized = cron.split_whitespace().collect::<Vec<_>>().join(" ");
    PRESETS.iter().find(|preset| preset.cron == normalized)
}
