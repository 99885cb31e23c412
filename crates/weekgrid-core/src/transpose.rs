//! Hour-major output layout with fall-back anomaly blocks.
//!
//! The raw grid is day-major; the rendering layer consumes hour-major rows
//! (one 7-day block per hour of day). A fall-back transition makes one
//! local hour occur twice on one day; that second occurrence gets its own
//! extra 7-day block directly after the repeated hour's normal block, with
//! the other six days left empty.

use tracing::debug;

use crate::grid::{RawGrid, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Seconds between nominally adjacent slots when a local hour repeated.
const REPEATED_HOUR_GAP: i64 = 7200;

/// Re-lays the raw grid into the hour-major output sequence.
///
/// The result has one 7-element block per hour of day (168 entries), plus
/// one extra 7-element block per fall-back anomaly, inserted immediately
/// after the block of the hour in which the repeat occurred. Day order
/// within every block is Monday..Sunday.
pub fn transpose(raw: &RawGrid) -> Vec<Option<i64>> {
    let mut out = Vec::with_capacity(HOURS_PER_DAY * DAYS_PER_WEEK + DAYS_PER_WEEK);
    for hour in 0..HOURS_PER_DAY {
        // A 2-hour gap to the chain successor marks the first occurrence of
        // a repeated local hour. At most one day can repeat per hour.
        let mut repeat: Option<(usize, i64)> = None;
        for day in 0..DAYS_PER_WEEK {
            if let (Some(instant), Some(next)) = (raw.slot(day, hour), raw.next_slot(day, hour)) {
                if next - instant == REPEATED_HOUR_GAP {
                    debug!(day, hour, instant, "repeated hour detected");
                    repeat = Some((day, instant + 3600));
                }
            }
            out.push(raw.slot(day, hour));
        }
        if let Some((repeat_day, second_occurrence)) = repeat {
            for day in 0..DAYS_PER_WEEK {
                out.push((day == repeat_day).then_some(second_occurrence));
            }
        }
    }
    out
}
