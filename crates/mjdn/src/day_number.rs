//! Modified Julian Day Number newtype.

use std::fmt;
use std::ops::{Add, Sub};

use crate::convert::Converter;
use crate::date::CalendarDate;

/// A Modified Julian Day Number (MJDN).
///
/// Counts whole days since 1858-11-17 (Gregorian), so day 0 is that date
/// and earlier dates are negative. The count is proleptic: it does not skip
/// anything at calendar reforms, which is why 1582-10-04 (Julian) and
/// 1582-10-15 (Gregorian) are consecutive.
///
/// # Example
///
/// ```
/// use astrocalc_mjdn::DayNumber;
///
/// let dn = DayNumber::new(57023);
/// assert_eq!((dn + 1).get(), 57024);
/// assert_eq!(dn - DayNumber::UNIX_EPOCH, 16436);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DayNumber(i64);

impl DayNumber {
    /// Day number of 1970-01-01, the UNIX epoch.
    pub const UNIX_EPOCH: DayNumber = DayNumber(40587);

    /// Wraps a raw day count.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Calendar date of this day in UTC.
    pub fn to_date(self, converter: &Converter) -> CalendarDate {
        converter.to_utc_date(self)
    }

    /// Formats the day number followed by its calendar date in UTC, e.g.
    /// `57023 (2015-01-01)`.
    pub fn describe(self, converter: &Converter) -> String {
        format!("{} ({})", self.0, self.to_date(converter))
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DayNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<DayNumber> for i64 {
    fn from(dn: DayNumber) -> Self {
        dn.0
    }
}

impl Add<i64> for DayNumber {
    type Output = DayNumber;
    fn add(self, rhs: i64) -> Self::Output {
        DayNumber(self.0 + rhs)
    }
}

impl Sub<i64> for DayNumber {
    type Output = DayNumber;
    fn sub(self, rhs: i64) -> Self::Output {
        DayNumber(self.0 - rhs)
    }
}

impl Sub<DayNumber> for DayNumber {
    type Output = i64;
    fn sub(self, rhs: DayNumber) -> Self::Output {
        self.0 - rhs.0
    }
}
