//! Wall-clock formatting for the header clock and footer year.

use chrono::{Datelike, Local, Timelike};

/// Current local time as zero-padded `HH:MM`.
pub fn now_hhmm() -> String {
    let now = Local::now();
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Current calendar year.
pub fn current_year() -> i32 {
    Local::now().year()
}
