//! Era templates.

use std::fmt;

use astrocalc_mjdn::{CalendarDate, Converter, DayNumber};
use tracing::debug;

use crate::error::EraError;
use crate::year::EraYear;

/// Day number of AD 1 January 1 (Julian).
const ANNO_DOMINI_START: DayNumber = DayNumber::new(-678_577);

/// A named epoch that numbers years from its first day.
///
/// An `Era` is a template: it is built once and never changes. Applying it
/// to a date or an era year yields an independent [`EraYear`].
///
/// Era years follow calendar years, not elapsed time. The year containing
/// the first day is year 1 and every January 1 afterwards starts the next
/// year, so a date earlier in that first calendar year is also year 1 and
/// the calendar year before is year 0. Turn on
/// [`with_check_bounds`](Era::with_check_bounds) to reject such dates.
///
/// # Example
///
/// ```
/// use astrocalc_era::Era;
/// use astrocalc_mjdn::{CalendarDate, DayNumber};
///
/// let heisei = Era::new("Heisei", "平成", DayNumber::new(47534)); // 1989-01-08
/// let date = CalendarDate::new(2015, 1, 1).unwrap();
/// let year = heisei.derive_for_date(&date).unwrap();
/// assert_eq!(year.to_string(), "平成 (Heisei) 27");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Era {
    name: String,
    alias: String,
    start: DayNumber,
    check_bounds: bool,
    converter: Converter,
}

impl Era {
    /// Creates an era starting on day `start`.
    ///
    /// `alias` is a display name shown ahead of `name`; pass `""` for none.
    /// Bounds checking is off and the default [`Converter`] is used.
    pub fn new(name: impl Into<String>, alias: impl Into<String>, start: DayNumber) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            start,
            check_bounds: false,
            converter: Converter::new(),
        }
    }

    /// The Christian era, starting on AD 1 January 1.
    pub fn anno_domini() -> Self {
        Self::new("A.D.", "", ANNO_DOMINI_START)
    }

    /// Sets whether dates before the first day are rejected.
    pub fn with_check_bounds(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }

    /// Sets the converter used to read dates.
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    /// Returns the primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display alias, possibly empty.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the first day.
    pub fn start(&self) -> DayNumber {
        self.start
    }

    /// Returns whether dates before the first day are rejected.
    pub fn check_bounds(&self) -> bool {
        self.check_bounds
    }

    /// Returns the converter used to read dates.
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Returns the first day as a UTC date.
    ///
    /// # Panics
    ///
    /// Panics if the first day's year does not fit in an `i32`.
    pub fn start_date(&self) -> CalendarDate {
        self.converter.to_utc_date(self.start)
    }

    /// Returns `true` if `date` is on or after the first day.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.converter.to_day_number(date) >= self.start
    }

    /// Returns `true` if the era accepts `date`.
    ///
    /// Always `true` without bounds checking.
    pub fn check(&self, date: &CalendarDate) -> bool {
        !self.check_bounds || self.contains(date)
    }

    /// Returns the era year containing `date`.
    ///
    /// The year is the difference of calendar years between `date` and the
    /// first day (read in `date`'s location) plus one. The result keeps
    /// `date`, so [`EraYear::to_date`] gives it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::OutOfBounds`] if bounds checking is on and `date`
    /// precedes the first day, and [`EraError::Calendar`] if the first day's
    /// year does not fit in an `i32`.
    #[tracing::instrument(level = "debug", skip_all, fields(era = %self.name, date = %date))]
    pub fn derive_for_date(&self, date: &CalendarDate) -> Result<EraYear, EraError> {
        if !self.check(date) {
            debug!(start = %self.start, "date precedes era start");
            return Err(EraError::OutOfBounds {
                era: self.name.clone(),
                date: *date,
                start: self.start,
            });
        }
        let start = self.converter.checked_calendar_date(self.start, date.offset())?;
        let year = i64::from(date.year()) - i64::from(start.year()) + 1;
        Ok(EraYear::new(self.clone(), year, Some(*date)))
    }

    /// Returns era year `year` without an originating date.
    ///
    /// Bounds checking does not apply; year 0 and below are allowed.
    pub fn derive_for_year(&self, year: i64) -> EraYear {
        EraYear::new(self.clone(), year, None)
    }

    /// Writes `alias (name)`, or just `name` without an alias.
    pub(crate) fn write_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alias.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.alias, self.name)
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_label(f)
    }
}
