//! Jalali date paired with a wall-clock time.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::gregorian::GregorianDate;
use crate::jalali::JalaliDate;

/// A Jalali date with the time of day carried over from a Gregorian
/// timestamp. No time zone handling happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDateTime {
    date: JalaliDate,
    hour: u8,
    minute: u8,
    second: u8,
}

impl JalaliDateTime {
    /// Returns the date part.
    pub fn date(self) -> JalaliDate {
        self.date
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59). Leap seconds are folded into 59.
    pub fn second(self) -> u8 {
        self.second
    }

    /// Formats the timestamp with a custom date separator.
    ///
    /// The time part always uses `:`.
    pub fn format_with(self, separator: &str) -> String {
        format!(
            "{} {:02}:{:02}:{:02}",
            self.date.format_with(separator),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl From<NaiveDateTime> for JalaliDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            date: GregorianDate::from(value.date()).to_jalali(),
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second().min(59) as u8,
        }
    }
}

impl fmt::Display for JalaliDateTime {
    /// Writes `YYYY-MM-DD HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Formats an optional timestamp as a Jalali `YYYY-MM-DD HH:MM:SS` string.
///
/// `None` formats as the empty string, so a missing timestamp renders as a
/// blank cell.
///
/// ```
/// use chrono::NaiveDate;
/// use jalali_calendar::format_jalali_datetime;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 3, 20)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(format_jalali_datetime(Some(ts)), "1403-01-01 09:05:00");
/// assert_eq!(format_jalali_datetime(None), "");
/// ```
pub fn format_jalali_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| JalaliDateTime::from(ts).to_string())
        .unwrap_or_default()
}
