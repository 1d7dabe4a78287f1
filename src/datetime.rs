//! Date utilities for Report Desk.
//!
//! Upload dates are captured from a [`Clock`] so tests can pin "today".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Date format used for file upload dates.
pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current time.
pub trait Clock: std::fmt::Debug {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format a DateTime<Utc> as a calendar date in the given timezone.
///
/// Falls back to the UTC date if the timezone name is unknown.
pub fn format_date(dt: &DateTime<Utc>, timezone: &str) -> String {
    match timezone.parse::<Tz>() {
        Ok(tz) => dt.with_timezone(&tz).format(UPLOAD_DATE_FORMAT).to_string(),
        Err(_) => dt.format(UPLOAD_DATE_FORMAT).to_string(),
    }
}

/// Today's date on `clock`, as seen from `timezone`.
pub fn today(clock: &dyn Clock, timezone: &str) -> String {
    format_date(&clock.now(), timezone)
}
