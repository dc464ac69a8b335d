//! Time units in milliseconds.
//!
//! `MONTH`, `QUARTER` and `YEAR` are averages over a 365.25-day year.

use std::time::Duration;

pub const SECOND: u64 = 1_000;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
/// 30.4375 days.
pub const MONTH: u64 = YEAR / 12;
/// 91.3125 days.
pub const QUARTER: u64 = YEAR / 4;
/// 365.25 days.
pub const YEAR: u64 = DAY * 36_525 / 100;

/// Convert a millisecond count into a [`Duration`].
pub fn duration(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
