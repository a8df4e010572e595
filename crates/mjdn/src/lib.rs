//! # astrocalc-mjdn
//!
//! Conversion between civil calendar dates and Modified Julian Day Numbers.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|"Converter::to_day_number()"| B["DayNumber"]
//!     B -->|"Converter::to_calendar_date()"| A
//!     C["chrono::DateTime"] -->|"CalendarDate::from_datetime()"| A
//! ```
//!
//! Dates before the Gregorian reform (1582-10-15 unless configured otherwise)
//! are Julian; later dates are Gregorian. Years are astronomical, so 1 BC is
//! year 0. Time of day is never represented: every date is a midnight.
//!
//! ## Quick Start
//!
//! ```
//! use astrocalc_mjdn::{CalendarDate, Converter, DayNumber, day_number};
//!
//! assert_eq!(day_number(2015, 1, 1).unwrap(), DayNumber::new(57023));
//!
//! let conv = Converter::new();
//! let date = conv.to_utc_date(DayNumber::new(-100_841));
//! assert_eq!(date, CalendarDate::new(1582, 10, 4).unwrap()); // last Julian day
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_number` | `DayNumber` newtype |
//! | `date` | `CalendarDate` value with location |
//! | `convert` | `Converter` and the conversion formulas |
//! | `arith` | Floor division and modulo |
//! | `error` | Error types |
//!
//! ## Limits
//!
//! Arithmetic is on `i64` and is exact for every `i32` year. Day numbers
//! whose year falls outside that range are rejected by
//! `Converter::checked_calendar_date` with `CalendarError::YearOutOfRange`;
//! the unchecked inverse panics on them. The Gregorian reform date may not be
//! later than 1970-01-01.

mod arith;
mod convert;
mod date;
mod day_number;
mod error;

pub use convert::{Converter, calendar_date, day_number};
pub use date::CalendarDate;
pub use day_number::DayNumber;
pub use error::CalendarError;
