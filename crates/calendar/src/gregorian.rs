//! Validated proleptic Gregorian dates.

use std::fmt;

use chrono::Datelike;

use crate::convert::{MONTH_OFFSETS, gregorian_to_jalali};
use crate::error::CalendarError;
use crate::jalali::JalaliDate;

/// Number of days in each month of a common year (index 0 = January).
const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Always holds a month in 1..=12 and a day that exists in that month,
/// leap years included. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` does not exist in the
    /// given month of `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                month: i32::from(month),
            });
        }
        let max_day = Self::days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day: i32::from(day),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns January 1 of `year`, which always exists.
    pub(crate) fn first_of_year(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    /// Returns `true` if `year` is a leap year under the Gregorian rules.
    ///
    /// ```
    /// use jalali_calendar::GregorianDate;
    ///
    /// assert!(GregorianDate::is_leap_year(2000));
    /// assert!(!GregorianDate::is_leap_year(1900));
    /// assert!(GregorianDate::is_leap_year(2024));
    /// ```
    pub fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Returns the number of days in `month` of `year`, or 0 if `month`
    /// is not in 1..=12.
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            1..=12 => DAYS_PER_MONTH[usize::from(month - 1)],
            _ => 0,
        }
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

    /// Returns the day of the year (1..=366).
    pub fn ordinal(self) -> u16 {
        let leap = u16::from(self.month > 2 && Self::is_leap_year(self.year));
        MONTH_OFFSETS[usize::from(self.month - 1)] as u16 + leap + u16::from(self.day)
    }

    /// Returns the following day, or `None` after December 31 of `i32::MAX`.
    pub fn next(self) -> Option<Self> {
        if self.day < Self::days_in_month(self.year, self.month) {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Some(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else {
            self.year.checked_add(1).map(|year| Self {
                year,
                month: 1,
                day: 1,
            })
        }
    }

    /// Converts this date to the Jalali calendar.
    pub fn to_jalali(self) -> JalaliDate {
        gregorian_to_jalali(self.year, i32::from(self.month), i32::from(self.day))
    }
}

impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        // chrono only hands out valid dates.
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl fmt::Display for GregorianDate {
    /// Writes `YYYY-MM-DD`, with a leading `-` before the four year digits
    /// for years below zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}
