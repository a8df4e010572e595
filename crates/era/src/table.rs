//! Ordered sets of consecutive eras.

use astrocalc_mjdn::{CalendarDate, DayNumber};
use tracing::debug;

use crate::era::Era;
use crate::error::EraError;
use crate::year::EraYear;

/// Eras ordered by their first day.
///
/// Each era stays in force until the next one starts, so a table answers
/// "which era, and which year of it, does this date fall in".
///
/// # Example
///
/// ```
/// use astrocalc_era::EraTable;
/// use astrocalc_mjdn::CalendarDate;
///
/// let table = EraTable::japanese();
/// let date = CalendarDate::new(2019, 4, 30).unwrap();
/// assert_eq!(table.resolve(&date).unwrap().to_string(), "平成 (Heisei) 31");
/// let date = CalendarDate::new(2019, 5, 1).unwrap();
/// assert_eq!(table.resolve(&date).unwrap().to_string(), "令和 (Reiwa) 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    /// Creates a table from eras in any order.
    ///
    /// Eras sharing a first day keep their relative order; the later one
    /// wins when resolving.
    pub fn new(mut eras: Vec<Era>) -> Self {
        eras.sort_by_key(Era::start);
        Self { eras }
    }

    /// Modern Japanese eras from Meiji onward, all bounds-checked.
    pub fn japanese() -> Self {
        let eras = [
            ("Meiji", "明治", 3_628),    // 1868-10-23
            ("Taisho", "大正", 19_613),  // 1912-07-30
            ("Showa", "昭和", 24_874),   // 1926-12-25
            ("Heisei", "平成", 47_534),  // 1989-01-08
            ("Reiwa", "令和", 58_604),   // 2019-05-01
        ]
        .into_iter()
        .map(|(name, alias, start)| {
            Era::new(name, alias, DayNumber::new(start)).with_check_bounds(true)
        })
        .collect();
        Self::new(eras)
    }

    /// Adds an era, keeping the table ordered.
    pub fn push(&mut self, era: Era) {
        let at = self.eras.partition_point(|e| e.start() <= era.start());
        self.eras.insert(at, era);
    }

    /// Looks up an era by primary name or alias.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::UnknownEra`] if no era matches.
    pub fn find(&self, name: &str) -> Result<&Era, EraError> {
        self.eras
            .iter()
            .find(|e| e.name() == name || (!e.alias().is_empty() && e.alias() == name))
            .ok_or_else(|| EraError::UnknownEra {
                name: name.to_string(),
            })
    }

    /// Returns the year of the era in force on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::NoEraInForce`] if `date` precedes every era.
    #[tracing::instrument(level = "debug", skip_all, fields(date = %date))]
    pub fn resolve(&self, date: &CalendarDate) -> Result<EraYear, EraError> {
        let era = self
            .eras
            .iter()
            .rev()
            .find(|e| e.contains(date))
            .ok_or(EraError::NoEraInForce { date: *date })?;
        debug!(era = era.name(), "era in force");
        era.derive_for_date(date)
    }

    /// Returns the year of the named era containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::UnknownEra`] for an unknown name, or
    /// [`EraError::OutOfBounds`] if the era is bounds-checked and `date`
    /// precedes it.
    pub fn resolve_in(&self, name: &str, date: &CalendarDate) -> Result<EraYear, EraError> {
        self.find(name)?.derive_for_date(date)
    }

    /// Iterates over the eras in order of their first day.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Era> {
        self.eras.iter()
    }

    /// Returns the number of eras.
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    /// Returns `true` if the table holds no eras.
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }
}

impl FromIterator<Era> for EraTable {
    fn from_iter<I: IntoIterator<Item = Era>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
