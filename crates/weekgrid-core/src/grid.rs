//! Raw timestamp grid -- one instant per (day, hour) slot of the week.
//!
//! The grid spans a chronological chain from the last hour of the previous
//! border week, `(-1, 23)`, through every hour of the seven target days, to
//! the first hour of the next border week, `(7, 0)`. The two boundary
//! sentinels exist so a DST transition at the very edge of the week is
//! still detected.

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Result;
use crate::offset::{offset_minute, resolve_instant};
use crate::week::DayAnchors;

/// Hours in a regular day.
pub const HOURS_PER_DAY: usize = 24;
/// Days in a week.
pub const DAYS_PER_WEEK: usize = 7;

/// Day-major grid of optional instants for one week plus its boundary
/// sentinels. A `None` slot is a local hour skipped by a spring-forward
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGrid {
    pub(crate) before: Option<i64>,
    pub(crate) days: [[Option<i64>; HOURS_PER_DAY]; DAYS_PER_WEEK],
    pub(crate) after: Option<i64>,
}

impl RawGrid {
    /// Returns the instant at `(day, hour)` of the target week, or `None`
    /// for a slot collapsed by a spring-forward transition.
    pub fn slot(&self, day: usize, hour: usize) -> Option<i64> {
        self.days[day][hour]
    }

    /// Returns the boundary sentinel one hour before the week, `(-1, 23)`.
    pub fn before(&self) -> Option<i64> {
        self.before
    }

    /// Returns the boundary sentinel one hour after the week, `(7, 0)`.
    pub fn after(&self) -> Option<i64> {
        self.after
    }

    /// Returns the chronological successor of `(day, hour)` in the chain,
    /// crossing day boundaries and ending at the `(7, 0)` sentinel.
    pub(crate) fn next_slot(&self, day: usize, hour: usize) -> Option<i64> {
        if hour + 1 < HOURS_PER_DAY {
            self.days[day][hour + 1]
        } else if day + 1 < DAYS_PER_WEEK {
            self.days[day + 1][0]
        } else {
            self.after
        }
    }
}

/// Builds the raw grid for the given anchors, resolving every slot in
/// strictly ascending chain order.
///
/// Each slot is resolved from the local wall-clock tuple
/// `(date, hour, offset_minute)` -- the pinned minute makes the resolution
/// deterministic even where a wall-clock hour occurs twice. Immediately
/// after a slot is computed it is compared to its chain predecessor: equal
/// instants mean the clock skipped an hour, and the predecessor is marked
/// `None`.
///
/// # Errors
///
/// Returns [`crate::ScheduleError::OffsetLookup`] if any slot fails to
/// resolve. The build is all-or-nothing.
pub fn build(tz: Tz, anchors: &DayAnchors) -> Result<RawGrid> {
    let mut slots: Vec<(NaiveDate, u32)> =
        Vec::with_capacity(DAYS_PER_WEEK * HOURS_PER_DAY + 2);
    slots.push((anchors.before, 23));
    for date in anchors.days {
        for hour in 0..HOURS_PER_DAY as u32 {
            slots.push((date, hour));
        }
    }
    slots.push((anchors.after, 0));

    let mut values: Vec<Option<i64>> = Vec::with_capacity(slots.len());
    for &(date, hour) in &slots {
        let minute = offset_minute(tz, date, hour)?;
        let instant = resolve_instant(tz, date, hour, minute)?;
        if let Some(last) = values.last_mut() {
            if *last == Some(instant) {
                debug!(%date, hour, instant, "collapsing skipped hour");
                *last = None;
            }
        }
        values.push(Some(instant));
    }

    let mut days = [[None; HOURS_PER_DAY]; DAYS_PER_WEEK];
    for (day, row) in days.iter_mut().enumerate() {
        for (hour, slot) in row.iter_mut().enumerate() {
            *slot = values[1 + day * HOURS_PER_DAY + hour];
        }
    }
    Ok(RawGrid {
        before: values[0],
        days,
        after: values[1 + DAYS_PER_WEEK * HOURS_PER_DAY],
    })
}
