//! Date ↔ day-number conversion.
//!
//! Three forward formulas, chosen by the position of the date:
//!
//! | Range                                 | Formula                       |
//! |---------------------------------------|-------------------------------|
//! | on or after 1970-01-01                | UNIX seconds / 86400 + 40587  |
//! | on or after the Gregorian reform date | Fliegel, Gregorian            |
//! | before the reform date                | Fliegel, Julian               |
//!
//! The inverse has two formulas and splits on the reform date's day number.

use chrono::FixedOffset;
use tracing::trace;

use crate::arith::{floor_div, floor_mod};
use crate::date::{CalendarDate, utc};
use crate::day_number::DayNumber;
use crate::error::CalendarError;

const SECONDS_PER_DAY: i64 = 86_400;
const GREGORIAN_OFFSET: i64 = 678_881;
const JULIAN_OFFSET: i64 = 678_883;
const UNIX_EPOCH_YMD: (i32, u32, u32) = (1970, 1, 1);

/// Converts between [`CalendarDate`]s and [`DayNumber`]s.
///
/// Holds the date the Gregorian calendar takes over from the Julian one.
/// The default is 1582-10-15, the historical adoption date.
///
/// # Example
///
/// ```
/// use astrocalc_mjdn::{CalendarDate, Converter, DayNumber};
///
/// let conv = Converter::new();
/// let date = CalendarDate::new(2015, 1, 1).unwrap();
/// assert_eq!(conv.to_day_number(&date), DayNumber::new(57023));
///
/// // Britain switched in 1752.
/// let british = Converter::new()
///     .with_start_gregorian(CalendarDate::new(1752, 9, 14).unwrap())
///     .unwrap();
/// let date = CalendarDate::new(1750, 1, 1).unwrap();
/// assert_eq!(british.to_day_number(&date) - conv.to_day_number(&date), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    start_gregorian: CalendarDate,
    gregorian_start_day: DayNumber,
}

impl Converter {
    /// Creates a converter with the Gregorian reform on 1582-10-15.
    pub fn new() -> Self {
        Self::with_reform(CalendarDate::from_parts(1582, 10, 15, utc()))
    }

    /// Sets the first day of the Gregorian calendar.
    ///
    /// Dates before it are read as Julian. Only the fields matter; the
    /// location of `start` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ReformAfterEpoch`] if `start` is later than
    /// 1970-01-01. Dates from then on always take the UNIX path, so a later
    /// reform could not be inverted.
    pub fn with_start_gregorian(self, start: CalendarDate) -> Result<Self, CalendarError> {
        if start.ymd() > UNIX_EPOCH_YMD {
            return Err(CalendarError::ReformAfterEpoch {
                date: start.to_string(),
            });
        }
        Ok(Self::with_reform(start))
    }

    fn with_reform(start: CalendarDate) -> Self {
        Self {
            start_gregorian: start,
            gregorian_start_day: gregorian_day_number(&start),
        }
    }

    /// Returns the first day of the Gregorian calendar.
    pub fn start_gregorian(&self) -> CalendarDate {
        self.start_gregorian
    }

    /// Returns the day number of the first Gregorian day.
    pub fn gregorian_start_day(&self) -> DayNumber {
        self.gregorian_start_day
    }

    /// Returns the day number of `date`.
    ///
    /// The date's fields are compared against 1970-01-01 and the reform date
    /// as wall-clock values in the date's own location, so the result does
    /// not depend on the offset. Fields naming a day the calendar in force
    /// skips are not rejected; they land on a neighbouring day number (see
    /// [`Converter::checked_day_number`]).
    pub fn to_day_number(&self, date: &CalendarDate) -> DayNumber {
        if date.ymd() >= UNIX_EPOCH_YMD {
            trace!(%date, "day number via unix time");
            unix_day_number(date)
        } else if date.ymd() >= self.start_gregorian.ymd() {
            trace!(%date, "day number via gregorian formula");
            gregorian_day_number(date)
        } else {
            trace!(%date, "day number via julian formula");
            julian_day_number(date)
        }
    }

    /// Returns the day number of `date`, rejecting dates that the calendar
    /// in force does not contain.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NonexistentDate`] for Gregorian February 29
    /// in non-leap centuries (e.g. 1900-02-29) and for the days skipped at
    /// the reform (1582-10-05 through 1582-10-14 by default).
    pub fn checked_day_number(&self, date: &CalendarDate) -> Result<DayNumber, CalendarError> {
        let dn = self.to_day_number(date);
        let back = self.checked_calendar_date(dn, date.offset())?;
        if back.ymd() != date.ymd() {
            return Err(CalendarError::NonexistentDate {
                date: date.to_string(),
                normalized: back.to_string(),
            });
        }
        Ok(dn)
    }

    /// Returns the calendar date of `dn` at midnight in `offset`.
    ///
    /// Day numbers before the reform date yield Julian fields, the rest
    /// Gregorian ones.
    ///
    /// # Panics
    ///
    /// Panics if the year does not fit in an `i32`. Use
    /// [`Converter::checked_calendar_date`] for untrusted day numbers.
    pub fn to_calendar_date(&self, dn: DayNumber, offset: FixedOffset) -> CalendarDate {
        self.checked_calendar_date(dn, offset).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Returns the calendar date of `dn` at midnight in `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year does not fit in
    /// an `i32`.
    pub fn checked_calendar_date(
        &self,
        dn: DayNumber,
        offset: FixedOffset,
    ) -> Result<CalendarDate, CalendarError> {
        let (year, month, day) = if dn < self.gregorian_start_day {
            julian_fields(dn)
        } else {
            gregorian_fields(dn)
        };
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange {
            day_number: dn.get(),
            year,
        })?;
        // Month and day from the inverse are always in range.
        Ok(CalendarDate::from_parts(year, month as u32, day as u32, offset))
    }

    /// Returns the UTC calendar date of `dn`.
    ///
    /// # Panics
    ///
    /// Panics if the year does not fit in an `i32`.
    pub fn to_utc_date(&self, dn: DayNumber) -> CalendarDate {
        self.to_calendar_date(dn, utc())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shifts the year so that it starts in March, putting the leap day last.
///
/// Returns `(year, month index from March = 0, day index from 0)`.
fn march_based(date: &CalendarDate) -> (i64, i64, i64) {
    let mut y = i64::from(date.year());
    let mut m = i64::from(date.month());
    if m < 3 {
        y -= 1;
        m += 9;
    } else {
        m -= 3;
    }
    (y, m, i64::from(date.day()) - 1)
}

fn gregorian_day_number(date: &CalendarDate) -> DayNumber {
    let (y, m, d) = march_based(date);
    DayNumber::new(
        floor_div(1461 * y, 4) + floor_div(y, 400) - floor_div(y, 100)
            + floor_div(153 * m + 2, 5)
            + d
            - GREGORIAN_OFFSET,
    )
}

fn julian_day_number(date: &CalendarDate) -> DayNumber {
    let (y, m, d) = march_based(date);
    DayNumber::new(floor_div(1461 * y, 4) + floor_div(153 * m + 2, 5) + d - JULIAN_OFFSET)
}

/// Whole days since the UNIX epoch plus the epoch's day number.
///
/// Years chrono cannot hold use the Gregorian formula, which gives the same
/// count.
fn unix_day_number(date: &CalendarDate) -> DayNumber {
    match date.midnight_timestamp() {
        Some(secs) => DayNumber::UNIX_EPOCH + floor_div(secs, SECONDS_PER_DAY),
        None => gregorian_day_number(date),
    }
}

fn gregorian_fields(dn: DayNumber) -> (i64, i64, i64) {
    let n = dn.get() + GREGORIAN_OFFSET;
    let nn = floor_div(4 * (n + 1), 146_097);
    let a = 4 * n + 3 + 4 * floor_div(3 * (nn + 1), 4);
    fields_from_quadrennium(a)
}

fn julian_fields(dn: DayNumber) -> (i64, i64, i64) {
    let a = 4 * (dn.get() + JULIAN_OFFSET) + 3;
    fields_from_quadrennium(a)
}

/// Shared tail of both inverse formulas.
fn fields_from_quadrennium(a: i64) -> (i64, i64, i64) {
    let b = 5 * floor_div(floor_mod(a, 1461), 4) + 2;
    let mut y = floor_div(a, 1461);
    let mut m = floor_div(b, 153) + 3;
    if m > 12 {
        y += 1;
        m -= 12;
    }
    let d = floor_div(floor_mod(b, 153), 5);
    (y, m, d + 1)
}

/// Returns the day number of a UTC date using the default converter.
///
/// This is the entry point for callers holding raw year, month and day
/// integers.
///
/// # Errors
///
/// Returns [`CalendarError`] when the fields are out of range or name a day
/// the calendar in force skips.
///
/// # Example
///
/// ```
/// use astrocalc_mjdn::day_number;
///
/// assert_eq!(day_number(2015, 1, 1).unwrap().get(), 57023);
/// assert!(day_number(1582, 10, 10).is_err());
/// ```
pub fn day_number(year: i32, month: u32, day: u32) -> Result<DayNumber, CalendarError> {
    let date = CalendarDate::new(year, month, day)?;
    Converter::new().checked_day_number(&date)
}

/// Returns the UTC calendar date of `dn` using the default converter.
pub fn calendar_date(dn: DayNumber) -> CalendarDate {
    Converter::new().to_utc_date(dn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_formula_at_reform() {
        assert_eq!(gregorian_day_number(&date(1582, 10, 15)).get(), -100_840);
    }

    #[test]
    fn julian_formula_at_reform() {
        assert_eq!(julian_day_number(&date(1582, 10, 4)).get(), -100_841);
    }

    #[test]
    fn julian_formula_negative_year() {
        assert_eq!(julian_day_number(&date(-4712, 1, 2)).get(), -2_400_000);
        assert_eq!(julian_day_number(&date(-1, 1, 1)).get(), -679_308);
    }

    #[test]
    fn unix_and_gregorian_formulas_agree() {
        for (y, m, d) in [(1970, 1, 1), (1999, 12, 31), (2000, 2, 29), (2015, 1, 1)] {
            let dt = date(y, m, d);
            assert_eq!(unix_day_number(&dt), gregorian_day_number(&dt), "{dt}");
        }
    }

    #[test]
    fn unix_formula_beyond_chrono_range() {
        let dt = date(300_000, 3, 1);
        assert_eq!(dt.midnight_timestamp(), None);
        assert_eq!(unix_day_number(&dt), gregorian_day_number(&dt));
    }

    #[test]
    fn gregorian_inverse_at_epoch() {
        assert_eq!(gregorian_fields(DayNumber::UNIX_EPOCH), (1970, 1, 1));
        assert_eq!(gregorian_fields(DayNumber::new(0)), (1858, 11, 17));
    }

    #[test]
    fn julian_inverse_negative_year() {
        assert_eq!(julian_fields(DayNumber::new(-2_400_000)), (-4712, 1, 2));
        assert_eq!(julian_fields(DayNumber::new(-678_578)), (0, 12, 31));
    }

    #[test]
    fn dispatch_picks_julian_before_reform() {
        let conv = Converter::new();
        assert_eq!(conv.to_day_number(&date(1582, 10, 4)).get(), -100_841);
        assert_eq!(conv.to_day_number(&date(1582, 10, 15)).get(), -100_840);
    }

    #[test]
    fn gregorian_start_day_default() {
        assert_eq!(Converter::new().gregorian_start_day().get(), -100_840);
        assert_eq!(Converter::default(), Converter::new());
    }

    #[test]
    fn custom_reform_date_moves_both_directions() {
        let conv = Converter::new()
            .with_start_gregorian(date(1752, 9, 14))
            .unwrap();
        // 1752-09-02 was the last Julian day in Britain.
        let last_julian = conv.to_day_number(&date(1752, 9, 2));
        let first_gregorian = conv.to_day_number(&date(1752, 9, 14));
        assert_eq!(first_gregorian - last_julian, 1);
        assert_eq!(conv.to_utc_date(last_julian), date(1752, 9, 2));
        assert_eq!(conv.to_utc_date(first_gregorian), date(1752, 9, 14));
        // 1700-02-29 exists in Julian reckoning.
        let leap = date(1700, 2, 29);
        assert_eq!(conv.checked_day_number(&leap).unwrap(), conv.to_day_number(&leap));
    }

    #[test]
    fn start_gregorian_ignores_location() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let conv = Converter::new()
            .with_start_gregorian(date(1752, 9, 14).in_offset(jst))
            .unwrap();
        assert_eq!(
            conv.gregorian_start_day(),
            Converter::new().to_day_number(&date(1752, 9, 14))
        );
    }

    #[test]
    fn reform_after_unix_epoch_is_rejected() {
        let err = Converter::new()
            .with_start_gregorian(date(2000, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::ReformAfterEpoch {
                date: "2000-01-01".to_string(),
            }
        );
    }

    #[test]
    fn reform_on_unix_epoch_round_trips() {
        let conv = Converter::new()
            .with_start_gregorian(date(1970, 1, 1))
            .unwrap();
        for (y, m, d) in [(1969, 12, 31), (1970, 1, 1), (1990, 6, 1)] {
            let dt = date(y, m, d);
            assert_eq!(conv.to_utc_date(conv.to_day_number(&dt)), dt, "{dt}");
        }
        // Julian 1969-12-31 and Gregorian 1970-01-01 are adjacent.
        assert_eq!(conv.to_day_number(&date(1969, 12, 31)).get(), 40_586);
    }

    #[test]
    fn checked_calendar_date_rejects_huge_years() {
        let conv = Converter::new();
        let dn = DayNumber::new(1 << 40);
        assert_eq!(
            conv.checked_calendar_date(dn, utc()).unwrap_err(),
            CalendarError::YearOutOfRange {
                day_number: 1 << 40,
                year: 3_010_362_448,
            }
        );
        assert!(conv.checked_calendar_date(DayNumber::new(-(1 << 40)), utc()).is_err());
    }

    #[test]
    fn checked_calendar_date_at_year_limits() {
        let conv = Converter::new();
        let last = date(i32::MAX, 12, 31);
        let dn = conv.to_day_number(&last);
        assert_eq!(conv.checked_calendar_date(dn, utc()).unwrap(), last);
        assert!(conv.checked_calendar_date(dn + 1, utc()).is_err());

        let first = date(i32::MIN, 1, 1);
        let dn = conv.to_day_number(&first);
        assert_eq!(conv.checked_calendar_date(dn, utc()).unwrap(), first);
        assert!(conv.checked_calendar_date(dn - 1, utc()).is_err());
    }

    #[test]
    #[should_panic(expected = "outside the supported range")]
    fn to_calendar_date_panics_on_huge_years() {
        Converter::new().to_utc_date(DayNumber::new(1 << 40));
    }

    #[test]
    fn offset_does_not_change_day_number() {
        let conv = Converter::new();
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        for dt in [date(1989, 1, 8), date(1900, 6, 1), date(1000, 1, 1)] {
            let base = conv.to_day_number(&dt);
            assert_eq!(conv.to_day_number(&dt.in_offset(jst)), base, "{dt}");
            assert_eq!(conv.to_day_number(&dt.in_offset(pst)), base, "{dt}");
        }
    }

    #[test]
    fn inverse_keeps_requested_offset() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let back = Converter::new().to_calendar_date(DayNumber::new(47534), jst);
        assert_eq!(back, date(1989, 1, 8).in_offset(jst));
    }

    #[test]
    fn checked_rejects_reform_gap() {
        let conv = Converter::new();
        for d in 5..=14 {
            let err = conv.checked_day_number(&date(1582, 10, d)).unwrap_err();
            assert!(matches!(err, CalendarError::NonexistentDate { .. }), "day {d}");
        }
    }

    #[test]
    fn checked_rejects_gregorian_century_leap_day() {
        let err = Converter::new()
            .checked_day_number(&date(1900, 2, 29))
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::NonexistentDate {
                date: "1900-02-29".to_string(),
                normalized: "1900-03-01".to_string(),
            }
        );
    }

    #[test]
    fn checked_accepts_julian_century_leap_day() {
        let dn = Converter::new().checked_day_number(&date(1500, 2, 29)).unwrap();
        assert_eq!(dn + 1, Converter::new().to_day_number(&date(1500, 3, 1)));
    }

    #[test]
    fn free_functions_use_default_converter() {
        assert_eq!(day_number(1970, 1, 1).unwrap(), DayNumber::UNIX_EPOCH);
        assert_eq!(calendar_date(DayNumber::new(-678_577)), date(1, 1, 1));
        assert_eq!(
            day_number(2100, 2, 29).unwrap_err(),
            CalendarError::NonexistentDate {
                date: "2100-02-29".to_string(),
                normalized: "2100-03-01".to_string(),
            }
        );
        assert_eq!(
            day_number(2015, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }
}
