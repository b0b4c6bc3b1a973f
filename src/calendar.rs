//! Seasonal date checks.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

const HALLOWEEN_MONTH: u32 = 10;
const HALLOWEEN_DAY: u32 = 31;

pub fn is_halloween(date: NaiveDate) -> bool {
    date.month() == HALLOWEEN_MONTH && date.day() == HALLOWEEN_DAY
}

/// Checks the local calendar date.
pub fn is_today_halloween() -> bool {
    let today = Local::now().date_naive();
    let halloween = is_halloween(today);
    debug!(%today, halloween, "halloween check");
    halloween
}
