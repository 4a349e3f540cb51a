//! Date sequence generation for the Gregorian calendar.

use crate::gregorian::GregorianDate;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries,
/// leap days included, are handled by [`GregorianDate::next`]. The
/// sequence stops early only at the end of the representable range.
///
/// # Example
///
/// ```
/// use jalali_calendar::{GregorianDate, gregorian_sequence};
///
/// let start = GregorianDate::new(2000, 2, 28).unwrap();
/// let dates = gregorian_sequence(start, 3);
/// assert_eq!(dates[1], GregorianDate::new(2000, 2, 29).unwrap());
/// assert_eq!(dates[2], GregorianDate::new(2000, 3, 1).unwrap());
/// ```
pub fn gregorian_sequence(start: GregorianDate, n_days: usize) -> Vec<GregorianDate> {
    std::iter::successors(Some(start), |d| d.next())
        .take(n_days)
        .collect()
}

/// Returns every date of a Gregorian year, January 1 through December 31.
pub fn gregorian_year(year: i32) -> Vec<GregorianDate> {
    let n_days = if GregorianDate::is_leap_year(year) {
        366
    } else {
        365
    };
    gregorian_sequence(GregorianDate::first_of_year(year), n_days)
}
