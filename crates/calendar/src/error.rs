//! Error types for the jalali-calendar crate.

/// Error type for the strict (validating) conversion path.
///
/// The permissive [`gregorian_to_jalali`](crate::gregorian_to_jalali) never
/// produces these; they come from [`GregorianDate::new`](crate::GregorianDate::new)
/// and the wrappers built on it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number does not exist in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The year the month belongs to.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
