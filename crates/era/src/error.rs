//! Error types for the astrocalc-era crate.

use astrocalc_mjdn::{CalendarDate, CalendarError, DayNumber};

/// Error type for all fallible operations in the astrocalc-era crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EraError {
    /// Returned when a bounds-checked era is applied to a date before its
    /// first day.
    #[error("date {date} precedes the start of era {era} (day {start})")]
    OutOfBounds {
        /// Primary name of the era.
        era: String,
        /// The rejected date.
        date: CalendarDate,
        /// First day of the era.
        start: DayNumber,
    },

    /// Returned when no era in a table has started by the given date.
    #[error("no era in force on {date}")]
    NoEraInForce {
        /// The date that precedes every era in the table.
        date: CalendarDate,
    },

    /// Returned when looking up an era name that a table does not contain.
    #[error("unknown era: {name:?}")]
    UnknownEra {
        /// The name that was looked up.
        name: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
