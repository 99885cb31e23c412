//! ISO week resolution -- border weeks and the nine anchor dates.
//!
//! A week's timestamp grid needs more than its own seven days: the hour
//! before Monday 00:00 belongs to the Sunday of the previous ISO week, and
//! the hour after Sunday 23:00 belongs to the Monday of the next one. This
//! module resolves those bordering (year, week) pairs and produces the nine
//! calendar dates the grid is anchored on.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Monday-first weekday order used for ISO week dates.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The (year, week) pairs bordering a target ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBorders {
    pub year_prev: i32,
    pub week_prev: u32,
    pub year_next: i32,
    pub week_next: u32,
}

/// The nine anchor dates of a target week: its seven days plus one
/// boundary day on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAnchors {
    /// Sunday of the previous border week (day index −1).
    pub before: NaiveDate,
    /// Monday through Sunday of the target week (day indices 0..=6).
    pub days: [NaiveDate; 7],
    /// Monday of the next border week (day index 7).
    pub after: NaiveDate,
}

impl DayAnchors {
    /// Returns the date of the given day of the target week (0 = Monday).
    pub fn day(&self, index: usize) -> NaiveDate {
        self.days[index]
    }
}

/// Returns the number of the last ISO week of `year`.
///
/// December 28 always falls in the last ISO week of its year, so its week
/// number is the week count (52 or 53).
///
/// # Errors
///
/// Returns [`ScheduleError::YearOutOfRange`] if `year` exceeds the range
/// chrono's calendar arithmetic supports.
pub fn last_iso_week(year: i32) -> Result<u32> {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .ok_or(ScheduleError::YearOutOfRange(year))
}

/// Resolves the (year, week) pairs bordering `(year, week)`.
///
/// Week 1 borders the last ISO week of the previous year; the last ISO
/// week of the year borders week 1 of the next year; every other week
/// borders its numeric neighbors within the same year.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeek`] if `week` is not a valid ISO week
/// of `year`. Validation happens before any date resolution.
pub fn resolve_borders(year: i32, week: u32) -> Result<WeekBorders> {
    let last = last_iso_week(year)?;
    if week < 1 || week > last {
        return Err(ScheduleError::InvalidWeek { year, week });
    }

    let borders = if week == 1 {
        WeekBorders {
            year_prev: year - 1,
            week_prev: last_iso_week(year - 1)?,
            year_next: year,
            week_next: week + 1,
        }
    } else if week == last {
        WeekBorders {
            year_prev: year,
            week_prev: week - 1,
            year_next: year + 1,
            week_next: 1,
        }
    } else {
        WeekBorders {
            year_prev: year,
            week_prev: week - 1,
            year_next: year,
            week_next: week + 1,
        }
    };
    Ok(borders)
}

/// Resolves the nine anchor dates for `(year, week)` and its borders.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidWeek`] if any of the three (year, week)
/// pairs does not resolve to calendar dates.
pub fn resolve_dates(year: i32, week: u32, borders: &WeekBorders) -> Result<DayAnchors> {
    let mut days = [NaiveDate::MIN; 7];
    for (slot, weekday) in days.iter_mut().zip(WEEKDAYS) {
        *slot = iso_week_date(year, week, weekday)?;
    }
    let before = iso_week_date(borders.year_prev, borders.week_prev, Weekday::Sun)?;
    let after = iso_week_date(borders.year_next, borders.week_next, Weekday::Mon)?;
    Ok(DayAnchors {
        before,
        days,
        after,
    })
}

fn iso_week_date(year: i32, week: u32, weekday: Weekday) -> Result<NaiveDate> {
    NaiveDate::from_isoywd_opt(year, week, weekday)
        .ok_or(ScheduleError::InvalidWeek { year, week })
}
