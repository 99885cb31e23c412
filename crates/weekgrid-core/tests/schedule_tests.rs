//! End-to-end tests for the public `calculate` operation.

use chrono::NaiveDate;
use weekgrid_core::{calculate, calculate_in, ScheduleError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// The 2024-W01 reference scenario
// ---------------------------------------------------------------------------

#[test]
fn first_week_of_2024_in_berlin() {
    let schedule = calculate(Some(2024), Some(1), Some("Europe/Berlin")).unwrap();

    assert_eq!(schedule.year, 2024);
    assert_eq!(schedule.week, 1);
    assert_eq!((schedule.year_prev, schedule.week_prev), (2023, 52));
    assert_eq!((schedule.year_next, schedule.week_next), (2024, 2));

    assert_eq!(schedule.dates.before, date(2023, 12, 31));
    assert_eq!(schedule.dates.day(0), date(2024, 1, 1));
    assert_eq!(schedule.dates.day(6), date(2024, 1, 7));
    assert_eq!(schedule.dates.after, date(2024, 1, 8));

    // No transition in early January: 168 entries, none null.
    assert_eq!(schedule.timestamps.len(), 168);
    assert!(schedule.timestamps.iter().all(|s| s.is_some()));

    // Monday's hours 00:00..=06:00 local sit one per hour block, each
    // exactly 3600 seconds apart, starting at 2024-01-01T00:00+01:00.
    for hour in 0..7 {
        assert_eq!(
            schedule.timestamps[hour * 7],
            Some(1_704_063_600 + 3600 * hour as i64)
        );
    }
}

// ---------------------------------------------------------------------------
// Transition weeks end-to-end
// ---------------------------------------------------------------------------

#[test]
fn spring_forward_week_end_to_end() {
    let schedule = calculate(Some(2024), Some(13), Some("Europe/Berlin")).unwrap();
    assert_eq!(schedule.timestamps.len(), 168);
    assert_eq!(schedule.timestamps.iter().filter(|s| s.is_none()).count(), 1);
    assert_eq!(schedule.timestamps[2 * 7 + 6], None);
}

#[test]
fn fall_back_week_end_to_end() {
    let schedule = calculate(Some(2024), Some(44), Some("America/New_York")).unwrap();
    assert_eq!(schedule.timestamps.len(), 175);
    assert_eq!(schedule.timestamps[14 + 6], Some(1_730_613_600));
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn year_and_week_default_to_the_current_iso_week() {
    let schedule = calculate(None, None, Some("UTC")).unwrap();
    assert!(schedule.week >= 1 && schedule.week <= 53);
    assert!(schedule.timestamps.len() >= 168);

    // The defaulted pair must itself be a valid input.
    let again = calculate(Some(schedule.year), Some(schedule.week), Some("UTC")).unwrap();
    assert_eq!(again.week, schedule.week);
}

#[test]
fn typed_timezone_entry_point_matches_string_surface() {
    let via_str = calculate(Some(2024), Some(10), Some("America/New_York")).unwrap();
    let via_tz = calculate_in(Some(2024), Some(10), chrono_tz::America::New_York).unwrap();
    assert_eq!(via_str, via_tz);
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[test]
fn invalid_week_is_rejected() {
    assert_eq!(
        calculate(Some(2024), Some(54), Some("UTC")).unwrap_err(),
        ScheduleError::InvalidWeek {
            year: 2024,
            week: 54
        }
    );
    // 2024 has 52 ISO weeks.
    assert!(calculate(Some(2024), Some(53), Some("UTC")).is_err());
    // ...but 2020 has 53.
    assert!(calculate(Some(2020), Some(53), Some("UTC")).is_ok());
}

#[test]
fn unknown_timezone_is_rejected_not_substituted() {
    let err = calculate(Some(2024), Some(1), Some("Mars/Olympus_Mons")).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::InvalidTimezone("Mars/Olympus_Mons".to_string())
    );
}

#[test]
fn timezone_is_validated_before_week_defaulting() {
    // Even with year/week omitted, a bad zone must fail.
    assert!(matches!(
        calculate(None, None, Some("not-a-zone")),
        Err(ScheduleError::InvalidTimezone(_))
    ));
}

// ---------------------------------------------------------------------------
// Serialization shape
// ---------------------------------------------------------------------------

#[test]
fn schedule_serializes_for_the_rendering_layer() {
    let schedule = calculate(Some(2024), Some(1), Some("Europe/Berlin")).unwrap();
    let value = serde_json::to_value(&schedule).unwrap();

    assert_eq!(value["year"], 2024);
    assert_eq!(value["week_prev"], 52);
    assert_eq!(value["dates"]["before"], "2023-12-31");
    assert_eq!(value["dates"]["days"][0], "2024-01-01");
    assert_eq!(value["timestamps"][0], 1_704_063_600_i64);
    assert_eq!(value["timestamps"].as_array().unwrap().len(), 168);

    let back: weekgrid_core::WeekSchedule = serde_json::from_value(value).unwrap();
    assert_eq!(back, schedule);
}

#[test]
fn collapsed_slots_serialize_as_null() {
    let schedule = calculate(Some(2024), Some(13), Some("Europe/Berlin")).unwrap();
    let value = serde_json::to_value(&schedule).unwrap();
    assert!(value["timestamps"][2 * 7 + 6].is_null());
}
