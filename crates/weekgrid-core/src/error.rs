//! Error types for week-grid operations.

use chrono::NaiveDate;
use chrono_tz::Tz;
use thiserror::Error;

/// Errors that can occur while computing a week schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The requested week number is not a valid ISO week of the year.
    #[error("week {week} is not a valid ISO week of year {year}")]
    InvalidWeek { year: i32, week: u32 },

    /// The year falls outside the calendar range the date arithmetic supports.
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// The timezone identifier is not a known IANA zone name.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The host's ambient timezone could not be discovered or parsed.
    #[error("ambient timezone lookup failed: {0}")]
    AmbientTimezone(String),

    /// The offset lookup for a local hour failed.
    #[error("offset lookup failed for {date} {hour:02}:00 in {tz}")]
    OffsetLookup { tz: Tz, date: NaiveDate, hour: u32 },
}

/// Convenience alias used throughout weekgrid-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
