//! # weekgrid-core
//!
//! DST-aware hourly timestamp grids for ISO calendar weeks.
//!
//! Given an ISO `(year, week)` and an IANA timezone, [`calculate`] returns
//! the exact epoch instant of every hour-of-week cell in a 7-day × 24-hour
//! scheduling grid. One-hour DST transitions are handled: a spring-forward
//! (23-hour) day gets its skipped hour collapsed to `None`, and a fall-back
//! (25-hour) day gets one extra 7-day block for the repeated hour.
//!
//! ## Quick start
//!
//! ```rust
//! use weekgrid_core::calculate;
//!
//! let schedule = calculate(Some(2024), Some(1), Some("Europe/Berlin")).unwrap();
//! assert_eq!(schedule.year_prev, 2023);
//! assert_eq!(schedule.week_prev, 52);
//! assert_eq!(schedule.timestamps.len(), 168);
//! // Monday 2024-01-01T00:00+01:00
//! assert_eq!(schedule.timestamps[0], Some(1704063600));
//! ```
//!
//! ## Modules
//!
//! - [`week`] — border week resolution and the nine anchor dates
//! - [`offset`] — UTC-offset minute pinning and local-time disambiguation
//! - [`grid`] — day-major raw grid with spring-forward collapsing
//! - [`transpose`] — hour-major output layout with fall-back anomaly blocks
//! - [`schedule`] — the `calculate` operation and `WeekSchedule` result
//! - [`error`] — Error types

pub mod error;
pub mod grid;
pub mod offset;
pub mod schedule;
pub mod transpose;
pub mod week;

pub use error::ScheduleError;
pub use grid::{build, RawGrid};
pub use schedule::{calculate, calculate_in, WeekSchedule};
pub use transpose::transpose;
pub use week::{last_iso_week, resolve_borders, resolve_dates, DayAnchors, WeekBorders};
