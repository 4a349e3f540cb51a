//! Gregorian to Jalali conversion.

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::jalali::JalaliDate;

/// Days before each month in a common (non-leap) Gregorian year.
pub(crate) const MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Length of a 33-year Jalali cycle in days.
const CYCLE_33_DAYS: i64 = 12053;

/// Length of a 4-year cycle in days.
const CYCLE_4_DAYS: i64 = 1461;

/// Days in the first six Jalali months (6 * 31).
const FIRST_HALF_DAYS: i64 = 186;

/// Gregorian year at or below which the early epoch is used.
const EPOCH_SPLIT_YEAR: i64 = 1600;

/// Converts a proleptic Gregorian date to the Jalali calendar.
///
/// No validation is performed. Inputs outside the calendar still yield a
/// deterministic result: a month outside 1..=12 carries whole years into
/// `gy` (month 13 is January of the next year, month 0 is December of the
/// previous one) and a day past the end of its month runs into the
/// following months. The result year saturates at the `i32` bounds.
///
/// Use [`try_gregorian_to_jalali`] to reject invalid input instead.
///
/// # Examples
///
/// ```
/// use jalali_calendar::gregorian_to_jalali;
///
/// let nowruz = gregorian_to_jalali(2024, 3, 20);
/// assert_eq!(nowruz.ymd(), (1403, 1, 1));
/// ```
pub fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> JalaliDate {
    let month_index = i64::from(gm) - 1;
    let gy = i64::from(gy) + month_index.div_euclid(12);
    let gm = month_index.rem_euclid(12) + 1;

    let (mut jy, gy) = if gy <= EPOCH_SPLIT_YEAR {
        (0, gy - 621)
    } else {
        (979, gy - EPOCH_SPLIT_YEAR)
    };

    // Count this year's leap day only once February is over.
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        - 80
        + i64::from(gd)
        + MONTH_OFFSETS[(gm - 1) as usize];

    jy += 33 * days.div_euclid(CYCLE_33_DAYS);
    days = days.rem_euclid(CYCLE_33_DAYS);

    jy += 4 * days.div_euclid(CYCLE_4_DAYS);
    days = days.rem_euclid(CYCLE_4_DAYS);

    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    // days is now in 0..=365, so month and day always fit in u8.
    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        let rest = days - FIRST_HALF_DAYS;
        (7 + rest / 30, 1 + rest % 30)
    };

    JalaliDate::from_parts(saturate_year(jy), jm as u8, jd as u8)
}

/// Validates a Gregorian date and converts it to the Jalali calendar.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `gm` is not in 1..=12 and
/// [`CalendarError::InvalidDay`] if `gd` does not exist in that month.
///
/// # Examples
///
/// ```
/// use jalali_calendar::{CalendarError, try_gregorian_to_jalali};
///
/// assert_eq!(try_gregorian_to_jalali(1979, 3, 21).unwrap().ymd(), (1358, 1, 1));
/// assert_eq!(
///     try_gregorian_to_jalali(2023, 13, 1).unwrap_err(),
///     CalendarError::InvalidMonth { month: 13 },
/// );
/// ```
pub fn try_gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> Result<JalaliDate, CalendarError> {
    let month = u8::try_from(gm)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or(CalendarError::InvalidMonth { month: gm })?;
    let day = u8::try_from(gd).map_err(|_| CalendarError::InvalidDay {
        year: gy,
        month,
        day: gd,
        max_day: GregorianDate::days_in_month(gy, month),
    })?;
    Ok(GregorianDate::new(gy, month, day)?.to_jalali())
}

fn saturate_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}
