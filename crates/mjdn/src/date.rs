//! Civil calendar date pinned to midnight in a fixed-offset location.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

use crate::error::CalendarError;

/// A calendar date at midnight in a fixed-offset location.
///
/// Years are astronomical: year `0` is 1 BC, `-1` is 2 BC and so on. The
/// fields are read as Julian or Gregorian depending on where the date falls
/// relative to the reform date of the [`Converter`](crate::Converter) that
/// interprets it.
///
/// Construction validates month and day ranges but never normalizes: month
/// 13 or day 32 are rejected rather than rolled into the next year or month.
/// The day is checked against the Julian month length, which admits every
/// date of both calendars; use
/// [`Converter::checked_day_number`](crate::Converter::checked_day_number)
/// to also reject dates the calendar in force skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    offset: FixedOffset,
}

impl CalendarDate {
    /// Creates a UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDay`] when a field is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use astrocalc_mjdn::CalendarDate;
    ///
    /// let date = CalendarDate::new(-4712, 1, 2).unwrap();
    /// assert_eq!(date.to_string(), "-4712-01-02");
    /// assert!(CalendarDate::new(2015, 13, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::with_offset(year, month, day, utc())
    }

    /// Creates a date in the given fixed-offset location.
    ///
    /// # Errors
    ///
    /// Same as [`CalendarDate::new`].
    pub fn with_offset(
        year: i32,
        month: u32,
        day: u32,
        offset: FixedOffset,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = max_day_of_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::from_parts(year, month, day, offset))
    }

    /// Builds a date from fields the caller already knows are in range.
    pub(crate) fn from_parts(year: i32, month: u32, day: u32, offset: FixedOffset) -> Self {
        Self {
            year,
            month,
            day,
            offset,
        }
    }

    /// Takes the local date of a chrono datetime, dropping the time of day.
    ///
    /// The datetime's offset becomes the date's location.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let local = dt.naive_local().date();
        Self::from_parts(local.year(), local.month(), local.day(), dt.offset().fix())
    }

    /// Reads a chrono date (proleptic Gregorian fields) as a UTC date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::from_parts(date.year(), date.month(), date.day(), utc())
    }

    /// Returns the astronomical year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the location the date is pinned to.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Returns the same wall-clock date pinned to another location.
    pub fn in_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }

    /// Reads the fields as a chrono proleptic Gregorian date.
    ///
    /// Returns `None` when the fields are outside chrono's year range or
    /// name a day that the Gregorian calendar lacks (e.g. Julian
    /// 1500-02-29).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Seconds from 1970-01-01T00:00 to this date's wall-clock midnight.
    pub(crate) fn midnight_timestamp(&self) -> Option<i64> {
        let midnight = self.to_naive_date()?.and_hms_opt(0, 0, 0)?;
        Some(midnight.and_utc().timestamp())
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.ymd(), self.offset.local_minus_utc())
            .cmp(&(other.ymd(), other.offset.local_minus_utc()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, with an optional leading `-` for years before
    /// year 0. The result is a UTC date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = rest.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };
        if [y, m, d]
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(parse_err());
        }

        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u32 = m.parse().map_err(|_| parse_err())?;
        let day: u32 = d.parse().map_err(|_| parse_err())?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

/// The zero offset.
pub(crate) fn utc() -> FixedOffset {
    Utc.fix()
}

/// Month length under the Julian leap rule (every fourth year).
fn max_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 if year.rem_euclid(4) == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2015, 1, 1).unwrap();
        assert_eq!(date.ymd(), (2015, 1, 1));
        assert_eq!(date.offset(), utc());
    }

    #[test]
    fn new_rejects_month_13() {
        assert_eq!(
            CalendarDate::new(2015, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            CalendarDate::new(2015, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_rejects_day_overflow() {
        assert_eq!(
            CalendarDate::new(2015, 4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30,
            }
        );
        assert!(CalendarDate::new(2015, 1, 0).is_err());
    }

    #[test]
    fn feb_29_uses_julian_rule() {
        // 1900 and 1500 are Julian leap years.
        assert!(CalendarDate::new(1900, 2, 29).is_ok());
        assert!(CalendarDate::new(1500, 2, 29).is_ok());
        assert!(CalendarDate::new(0, 2, 29).is_ok());
        assert!(CalendarDate::new(-4, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(-1, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn from_datetime_truncates_time() {
        let dt = jst().with_ymd_and_hms(1989, 1, 8, 23, 59, 59).unwrap();
        let date = CalendarDate::from_datetime(&dt);
        assert_eq!(date.ymd(), (1989, 1, 8));
        assert_eq!(date.offset(), jst());
    }

    #[test]
    fn from_datetime_utc() {
        let dt = Utc.with_ymd_and_hms(2015, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            CalendarDate::from_datetime(&dt),
            CalendarDate::new(2015, 1, 1).unwrap()
        );
    }

    #[test]
    fn naive_date_round_trip() {
        let nd = NaiveDate::from_ymd_opt(1858, 11, 17).unwrap();
        let date = CalendarDate::from_naive_date(nd);
        assert_eq!(date.to_naive_date(), Some(nd));
    }

    #[test]
    fn julian_only_day_has_no_naive_date() {
        let date = CalendarDate::new(1500, 2, 29).unwrap();
        assert_eq!(date.to_naive_date(), None);
    }

    #[test]
    fn midnight_timestamp_at_epoch() {
        let date = CalendarDate::new(1970, 1, 1).unwrap();
        assert_eq!(date.midnight_timestamp(), Some(0));
        let date = CalendarDate::new(1969, 12, 31).unwrap();
        assert_eq!(date.midnight_timestamp(), Some(-86400));
    }

    #[test]
    fn midnight_timestamp_ignores_offset() {
        let utc_date = CalendarDate::new(2015, 1, 1).unwrap();
        let jst_date = utc_date.in_offset(jst());
        assert_eq!(utc_date.midnight_timestamp(), jst_date.midnight_timestamp());
    }

    #[test]
    fn display_pads_and_signs() {
        assert_eq!(CalendarDate::new(2015, 1, 1).unwrap().to_string(), "2015-01-01");
        assert_eq!(CalendarDate::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
        assert_eq!(CalendarDate::new(0, 12, 31).unwrap().to_string(), "0000-12-31");
        assert_eq!(CalendarDate::new(-1, 1, 1).unwrap().to_string(), "-0001-01-01");
        assert_eq!(
            CalendarDate::new(-4712, 1, 2).unwrap().to_string(),
            "-4712-01-02"
        );
    }

    #[test]
    fn parse_valid() {
        assert_eq!(
            "1989-01-08".parse::<CalendarDate>().unwrap(),
            CalendarDate::new(1989, 1, 8).unwrap()
        );
        assert_eq!(
            "-4712-01-02".parse::<CalendarDate>().unwrap(),
            CalendarDate::new(-4712, 1, 2).unwrap()
        );
        assert_eq!(
            " +0001-1-1 ".parse::<CalendarDate>().unwrap(),
            CalendarDate::new(1, 1, 1).unwrap()
        );
    }

    #[test]
    fn parse_malformed() {
        for input in ["", "2015", "2015-01", "2015-01-01-01", "2015/01/01", "20x5-01-01", "--1-01-01"] {
            assert_eq!(
                input.parse::<CalendarDate>().unwrap_err(),
                CalendarError::Parse {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_out_of_range_field() {
        assert_eq!(
            "2015-13-01".parse::<CalendarDate>().unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn ord_by_fields() {
        let a = CalendarDate::new(-1, 12, 31).unwrap();
        let b = CalendarDate::new(0, 1, 1).unwrap();
        let c = CalendarDate::new(0, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn eq_includes_offset() {
        let a = CalendarDate::new(2015, 1, 1).unwrap();
        assert_ne!(a, a.in_offset(jst()));
        assert_eq!(a.in_offset(jst()).in_offset(utc()), a);
    }

    #[test]
    fn copy_and_hash() {
        fn assert_copy<T: Copy>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<CalendarDate>();
        assert_hash::<CalendarDate>();
    }
}
