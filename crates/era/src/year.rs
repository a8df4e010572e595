//! Era-relative years.

use std::fmt;

use astrocalc_mjdn::CalendarDate;

use crate::era::Era;

/// A year counted within an [`Era`].
///
/// Owns its own copy of the era, so values never share state with the
/// template or with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraYear {
    era: Era,
    year: i64,
    origin: Option<CalendarDate>,
}

impl EraYear {
    pub(crate) fn new(era: Era, year: i64, origin: Option<CalendarDate>) -> Self {
        Self { era, year, origin }
    }

    /// Returns the era this year belongs to.
    pub fn era(&self) -> &Era {
        &self.era
    }

    /// Returns the era's primary name.
    pub fn name(&self) -> &str {
        self.era.name()
    }

    /// Returns the era's display alias, possibly empty.
    pub fn alias(&self) -> &str {
        self.era.alias()
    }

    /// Returns the year within the era, 1 for the first year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the date this value was derived from, if any.
    pub fn origin(&self) -> Option<&CalendarDate> {
        self.origin.as_ref()
    }

    /// Returns a representative date.
    ///
    /// This is the originating date when there is one. Otherwise year 1 maps
    /// to the era's first day and any other year to January 1 of the
    /// matching calendar year, in UTC. Calendar years outside the `i32`
    /// range saturate.
    pub fn to_date(&self) -> CalendarDate {
        if let Some(origin) = self.origin {
            return origin;
        }
        let start = self.era.start_date();
        if self.year == 1 {
            return start;
        }
        let year = i64::from(start.year())
            .saturating_add(self.year)
            .saturating_sub(1)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        CalendarDate::new(year, 1, 1).expect("January 1 is always valid")
    }
}

impl fmt::Display for EraYear {
    /// Formats as `alias (name) year`, or `name year` without an alias.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.era.write_label(f)?;
        write!(f, " {}", self.year)
    }
}
