//! End-to-end properties of the schedule engine.
//!
//! Covers the cross-module contracts: descriptor compilation feeding the
//! projector and the description generator, preset round-trips, and the
//! never-fails posture on malformed or unsatisfiable input.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use cronplan::{describe, next_runs, CronExpression, ScheduleDescriptor, PRESETS};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap()
}

#[test]
fn minute_intervals_project_divisible_minutes() {
    for n in 1..=30 {
        let cron = ScheduleDescriptor::Minutes {
            interval_minutes: n,
        }
        .compile();
        let runs = next_runs(&cron, t0(), 5);
        assert_eq!(runs.len(), 5, "interval {n} produced too few runs");
        for run in &runs {
            assert_eq!(run.minute() % n, 0, "interval {n} hit minute {}", run.minute());
            assert_eq!(run.second(), 0);
        }
        for pair in runs.windows(2) {
            assert!(pair[0] < pair[1], "runs must be strictly increasing");
        }
    }
}

#[test]
fn minute_intervals_dividing_the_hour_are_evenly_spaced() {
    // Uniform spacing holds exactly when the interval divides 60; other
    // intervals snap back at the top of each hour because the step matcher
    // tests minute % n.
    for n in [1u32, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30] {
        let cron = ScheduleDescriptor::Minutes {
            interval_minutes: n,
        }
        .compile();
        let runs = next_runs(&cron, t0(), 5);
        for pair in runs.windows(2) {
            assert_eq!(
                pair[1] - pair[0],
                Duration::minutes(i64::from(n)),
                "interval {n} spacing"
            );
        }
    }
}

#[test]
fn daily_nine_am_is_a_preset() {
    let cron = ScheduleDescriptor::Daily { hour: 9, minute: 0 }.compile();
    assert_eq!(cron, "0 9 * * *");
    assert_eq!(describe(&cron), "Runs daily at 9:00 AM");
}

#[test]
fn weekdays_compile_to_list_form_and_describe_by_abbrev() {
    let descriptor = ScheduleDescriptor::Weekly {
        hour: 9,
        minute: 0,
        days_of_week: (1..=5).collect(),
    };
    let cron = descriptor.compile();
    // Always sorted list form, never `1-5` range form.
    assert_eq!(cron, "0 9 * * 1,2,3,4,5");

    let description = describe(&cron);
    for abbrev in ["Mon", "Tue", "Wed", "Thu", "Fri"] {
        assert!(description.contains(abbrev), "missing {abbrev}: {description}");
    }
}

#[test]
fn decompile_then_compile_reproduces_the_cron_string() {
    let descriptors = [
        ScheduleDescriptor::Minutes {
            interval_minutes: 10,
        },
        ScheduleDescriptor::Hourly { interval_hours: 1 },
        ScheduleDescriptor::Hourly { interval_hours: 4 },
        ScheduleDescriptor::Daily {
            hour: 23,
            minute: 45,
        },
        ScheduleDescriptor::Weekly {
            hour: 8,
            minute: 15,
            days_of_week: [0, 6].into_iter().collect(),
        },
        ScheduleDescriptor::Monthly {
            hour: 2,
            minute: 30,
            day_of_month: 15,
        },
    ];

    for descriptor in descriptors {
        let cron = descriptor.compile();
        let round_tripped = ScheduleDescriptor::decompile(&cron).unwrap();
        assert_eq!(round_tripped.compile(), cron, "round trip of {descriptor:?}");
    }
}

#[test]
fn preset_catalog_round_trips() {
    for preset in PRESETS {
        let descriptor = ScheduleDescriptor::decompile(preset.cron).unwrap();
        assert!(
            matches!(descriptor, ScheduleDescriptor::Custom { .. }),
            "presets decompile to Custom"
        );
        assert_eq!(descriptor.compile(), preset.cron, "preset {}", preset.name);
        assert_eq!(describe(preset.cron), preset.description);
    }
}

#[test]
fn impossible_schedule_terminates_with_no_runs() {
    // Day 31 in a February-only month never occurs; the projector must give
    // up after its iteration budget instead of hanging.
    let runs = next_runs("0 0 31 2 *", t0(), 5);
    assert!(runs.is_empty());
}

#[test]
fn sparse_schedule_returns_partial_results() {
    // Feb 29 exists once within the one-year budget starting 2023-06-01.
    let from = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
    let runs = next_runs("0 0 29 2 *", from, 5);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0], Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
}

#[test]
fn malformed_expressions_never_error() {
    assert!(next_runs("* * *", t0(), 5).is_empty());
    assert_eq!(describe("* * *"), "Invalid cron expression");

    // Garbage inside a field is not a structural error: 5 fields still
    // parse, the garbage just never matches.
    assert!(CronExpression::parse("nope * * * *").is_ok());
    assert!(next_runs("nope * * * *", t0(), 5).is_empty());
}

#[test]
fn projected_runs_satisfy_the_expression() {
    let expr = CronExpression::parse("30 6 * * 1").unwrap();
    let runs = next_runs("30 6 * * 1", t0(), 4);
    assert_eq!(runs.len(), 4);
    for run in &runs {
        assert!(expr.matches(run));
        assert!(*run > t0());
    }
}

#[test]
fn descriptor_serializes_with_kind_tag() {
    let descriptor = ScheduleDescriptor::Weekly {
        hour: 9,
        minute: 30,
        days_of_week: BTreeSet::from([1, 3, 5]),
    };
    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(json["kind"], "weekly");
    assert_eq!(json["days_of_week"], serde_json::json!([1, 3, 5]));

    let back: ScheduleDescriptor = serde_json::from_value(json).unwrap();
    assert_eq!(back, descriptor);
}
