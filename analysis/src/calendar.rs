use chrono::{Datelike, Weekday};
use chrono_tz::Tz;

/// Zone every match date is expressed in. The North American scene schedules
/// by Eastern time, so dates must not depend on the machine's local zone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::US::Eastern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
}

impl MatchDate {
    /// Civil date of `timestamp` in `timezone`, `None` if the timestamp is
    /// out of chrono's range.
    pub fn from_timestamp(timestamp: i64, timezone: &Tz) -> Option<Self> {
        let local = chrono::DateTime::from_timestamp(timestamp, 0)?.with_timezone(timezone);

        Some(Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            weekday: local.weekday(),
        })
    }

    pub fn ymd(&self) -> [i32; 3] {
        [self.year, self.month as i32, self.day as i32]
    }

    pub fn weekday_name(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}
