//! Jalali (Solar Hijri) date produced by the converter.

use std::fmt;

/// A date in the Jalali calendar.
///
/// Only the converter creates these. The month is always in 1..=12 and
/// the day in 1..=31 (1..=30 from month 7 on). Jalali leap years are not
/// checked, so day 30 of month 12 is never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    pub(crate) fn from_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        debug_assert!((1..=31).contains(&day));
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Formats the date with a custom separator between its parts.
    ///
    /// Month and day are zero-padded to two digits; the year is not padded.
    ///
    /// ```
    /// use jalali_calendar::gregorian_to_jalali;
    ///
    /// let date = gregorian_to_jalali(2024, 3, 20);
    /// assert_eq!(date.format_with("/"), "1403/01/01");
    /// ```
    pub fn format_with(self, separator: &str) -> String {
        format!(
            "{}{separator}{:02}{separator}{:02}",
            self.year, self.month, self.day
        )
    }
}

impl fmt::Display for JalaliDate {
    /// Writes `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
