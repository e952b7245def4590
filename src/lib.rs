//! Cronplan - a pure cron schedule engine.
//!
//! This crate parses, builds, projects and describes 5-field cron
//! expressions (`minute hour day month weekday`). It is self-contained
//! computation: no clock reads, no I/O, no persistence, no job execution.
//! Callers supply the reference instant, so every function is deterministic
//! and unit-testable.
//!
//! # Architecture
//!
//! The engine is organized into four components, composed bottom-up:
//!
//! - [`cron`]: expression parsing and per-field matching
//! - [`schedule`]: structured schedule descriptors compiled to/from cron strings
//! - [`projector`]: forward projection of upcoming execution instants
//! - [`describe`]: natural-language cadence summaries
//! - [`presets`]: a static catalog of common schedules for picker UIs
//!
//! # Error posture
//!
//! The engine is driven by live, possibly half-typed user input, so the
//! projection and description surfaces never fail: a malformed expression
//! yields an empty run list or the literal `"Invalid cron expression"`, and
//! garbage inside a field degrades to "never matches" rather than an error.
//! Only the structural check (exactly 5 fields) surfaces as [`CronError`].
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cronplan::{describe, next_runs, ScheduleDescriptor};
//!
//! let cron = ScheduleDescriptor::Daily { hour: 9, minute: 0 }.compile();
//! assert_eq!(cron, "0 9 * * *");
//! assert_eq!(describe(&cron), "Runs daily at 9:00 AM");
//!
//! let from = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let runs = next_runs(&cron, from, 3);
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[0].to_rfc3339(), "2024-01-16T09:00:00+00:00");
//! ```

pub mod cron;
pub mod describe;
pub mod presets;
pub mod projector;
pub mod schedule;

// Re-exports
pub use cron::{CronError, CronExpression, CronField};
pub use describe::describe;
pub use presets::{Preset, PRESETS};
pub use projector::{next_runs, MAX_PROJECTION_MINUTES};
pub use schedule::ScheduleDescriptor;
