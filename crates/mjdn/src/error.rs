//! Error types for the astrocalc-mjdn crate.

/// Error type for all fallible operations in the astrocalc-mjdn crate.
///
/// These errors arise when building a [`CalendarDate`](crate::CalendarDate)
/// from raw fields or text, when configuring a
/// [`Converter`](crate::Converter), or when a checked conversion finds that a
/// date does not exist or does not fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },

    /// Returned when a date is well formed but is skipped by the calendar
    /// in force, e.g. Gregorian February 29, 1900 or a day inside the
    /// calendar reform gap.
    #[error("date {date} does not exist in the calendar in force (nearest reading is {normalized})")]
    NonexistentDate {
        /// The requested date, as `YYYY-MM-DD`.
        date: String,
        /// The date the day number actually maps back to.
        normalized: String,
    },

    /// Returned when a day number maps to a year outside the `i32` range.
    #[error("day number {day_number} falls in year {year}, outside the supported range")]
    YearOutOfRange {
        /// The day number that was converted.
        day_number: i64,
        /// The year it falls in.
        year: i64,
    },

    /// Returned when the Gregorian reform date is later than 1970-01-01,
    /// where day numbers are always counted in the Gregorian calendar.
    #[error("Gregorian reform date {date} is after 1970-01-01")]
    ReformAfterEpoch {
        /// The rejected reform date, as `YYYY-MM-DD`.
        date: String,
    },

    /// Returned when a date string cannot be parsed.
    #[error("cannot parse date {input:?}: expected [-]YYYY-MM-DD")]
    Parse {
        /// The text that failed to parse.
        input: String,
    },
}
