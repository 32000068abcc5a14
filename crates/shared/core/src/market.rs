//! Gold market trading hours

use chrono::{Datelike, Timelike, Weekday};

use crate::values::Timestamp;

/// Friday close, UTC hour
const FRIDAY_CLOSE_HOUR: u32 = 21;
/// Sunday reopen, UTC hour
const SUNDAY_OPEN_HOUR: u32 = 22;

/// Whether the spot gold market is trading at `at`
///
/// The market closes Friday 21:00 UTC and reopens Sunday 22:00 UTC.
pub fn is_market_open(at: Timestamp) -> bool {
    let hour = at.hour();
    match at.weekday() {
        Weekday::Sat => false,
        Weekday::Fri => hour < FRIDAY_CLOSE_HOUR,
        Weekday::Sun => hour >= SUNDAY_OPEN_HOUR,
        _ => true,
    }
}
