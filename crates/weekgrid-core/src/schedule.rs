//! The public `calculate` operation and its `WeekSchedule` result.
//!
//! Runs the full pipeline for one week: border resolution, anchor dates,
//! raw timestamp grid, hour-major transposition. All entities are created
//! fresh per call and the timezone is an explicit parameter, so concurrent
//! calls with different zones never interfere.

use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::grid;
use crate::transpose;
use crate::week::{self, DayAnchors};

/// A fully computed week: its identity, its borders, its anchor dates, and
/// the hour-major timestamp sequence consumed by a week-by-hour renderer.
///
/// `timestamps` holds at least 168 entries (24 hours × 7 days) in blocks
/// of 7, Monday first; a week containing a fall-back transition carries one
/// extra block for the repeated hour. `None` entries are hours that do not
/// exist locally (spring forward) or padding in an anomaly block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub year: i32,
    pub week: u32,
    pub year_prev: i32,
    pub week_prev: u32,
    pub year_next: i32,
    pub week_next: u32,
    pub dates: DayAnchors,
    pub timestamps: Vec<Option<i64>>,
}

/// Computes the week schedule for `(year, week)` in the named IANA zone.
///
/// `year` and `week` default to the host clock's current ISO year/week;
/// `timezone` defaults to the host's ambient zone.
///
/// # Errors
///
/// - [`ScheduleError::InvalidTimezone`] if `timezone` is not a known IANA
///   zone name. No substitute zone is ever used.
/// - [`ScheduleError::AmbientTimezone`] if `timezone` is omitted and the
///   host zone cannot be discovered.
/// - [`ScheduleError::InvalidWeek`] if `week` is not a valid ISO week of
///   `year`.
/// - [`ScheduleError::OffsetLookup`] if an offset lookup fails; the
///   operation is all-or-nothing and returns no partial schedule.
pub fn calculate(
    year: Option<i32>,
    week: Option<u32>,
    timezone: Option<&str>,
) -> Result<WeekSchedule> {
    let tz = match timezone {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| ScheduleError::InvalidTimezone(name.to_string()))?,
        None => ambient_timezone()?,
    };
    calculate_in(year, week, tz)
}

/// Computes the week schedule in an already-resolved zone.
///
/// Omitted `year`/`week` default to the current ISO year/week *in `tz`* --
/// around midnight at a year boundary the current ISO week is a property
/// of the zone, not of the process.
///
/// # Errors
///
/// Same as [`calculate`], minus the timezone parsing cases.
#[tracing::instrument]
pub fn calculate_in(year: Option<i32>, week: Option<u32>, tz: Tz) -> Result<WeekSchedule> {
    let (year, week) = match (year, week) {
        (Some(y), Some(w)) => (y, w),
        (y, w) => {
            let today = Utc::now().with_timezone(&tz).date_naive().iso_week();
            (y.unwrap_or_else(|| today.year()), w.unwrap_or_else(|| today.week()))
        }
    };

    let borders = week::resolve_borders(year, week)?;
    let dates = week::resolve_dates(year, week, &borders)?;
    let raw = grid::build(tz, &dates)?;
    let timestamps = transpose::transpose(&raw);

    Ok(WeekSchedule {
        year,
        week,
        year_prev: borders.year_prev,
        week_prev: borders.week_prev,
        year_next: borders.year_next,
        week_next: borders.week_next,
        dates,
        timestamps,
    })
}

/// Discovers the host's ambient IANA zone and parses it as a [`Tz`].
fn ambient_timezone() -> Result<Tz> {
    let name = iana_time_zone::get_timezone()
        .map_err(|e| ScheduleError::AmbientTimezone(e.to_string()))?;
    name.parse()
        .map_err(|_| ScheduleError::AmbientTimezone(name))
}
