//! UTC-offset lookups and deterministic local-time resolution.
//!
//! Each grid slot is pinned to the minute component of the UTC offset in
//! effect at that local hour. Zones on whole-hour offsets always pin to
//! minute 0; fractional-offset zones (e.g. +05:45) pin to their minute
//! remainder so every slot resolves to one exact instant.
//!
//! Local wall-clock times are not always unique: a fall-back transition
//! makes one hour occur twice, a spring-forward transition removes one
//! entirely. Resolution here is deterministic:
//!
//! - ambiguous times resolve to the **earliest** occurrence; the grid
//!   transposer re-emits the second occurrence as an anomaly block,
//! - nonexistent times resolve as if the pre-transition offset still
//!   applied, which lands on the same instant as the hour after the gap
//!   and lets the grid builder collapse the skipped slot.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// Returns the minute component, in `[0, 60)`, of the UTC offset in effect
/// at local time `date@hour:00:00` in `tz`.
///
/// # Errors
///
/// Returns [`ScheduleError::OffsetLookup`] if `hour` is not a valid hour of
/// day or the local time cannot be resolved against the zone's rule table.
pub fn offset_minute(tz: Tz, date: NaiveDate, hour: u32) -> Result<u32> {
    let resolved = resolve_local(tz, date, hour, 0)?;
    let offset_secs = resolved.offset().fix().local_minus_utc();
    // Strip whole hours, keep the minute remainder, normalized into [0, 60).
    // % keeps the sign of the dividend, so west-of-UTC offsets need the
    // final normalization step.
    let minute = (offset_secs % 3600) / 60;
    Ok(((60 + minute) % 60) as u32)
}

/// Resolves the local wall-clock tuple `(date, hour, minute)` in `tz` to an
/// epoch-second instant.
///
/// # Errors
///
/// Returns [`ScheduleError::OffsetLookup`] if the tuple is not a valid time
/// of day or cannot be resolved against the zone's rule table.
pub fn resolve_instant(tz: Tz, date: NaiveDate, hour: u32, minute: u32) -> Result<i64> {
    Ok(resolve_local(tz, date, hour, minute)?.timestamp())
}

/// Maps a local wall-clock time to a single zoned datetime.
fn resolve_local(tz: Tz, date: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Tz>> {
    let lookup_failed = || ScheduleError::OffsetLookup { tz, date, hour };
    let naive = date.and_hms_opt(hour, minute, 0).ok_or_else(lookup_failed)?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        // Fall-back repeat: take the first occurrence.
        LocalResult::Ambiguous(first, _) => Ok(first),
        // Spring-forward gap: interpret with the offset in effect before
        // the transition. The hour preceding a 60-minute gap always exists,
        // so resolve it and step one real hour forward.
        LocalResult::None => {
            let preceding = tz
                .from_local_datetime(&(naive - Duration::hours(1)))
                .earliest()
                .ok_or_else(lookup_failed)?;
            Ok(preceding + Duration::hours(1))
        }
    }
}
