//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use astrocalc_era::{Era, EraTable};
use astrocalc_mjdn::{CalendarDate, Converter};

use crate::config::{CalendarToml, EraToml, ErasToml};

/// Parses a built-in era table name into its table.
pub fn parse_builtin(s: &str) -> Result<EraTable> {
    match s.to_lowercase().as_str() {
        "japanese" => Ok(EraTable::japanese()),
        "none" => Ok(EraTable::default()),
        other => bail!("unknown built-in era table: {other:?}"),
    }
}

/// Builds a [`Converter`] from the TOML calendar configuration.
pub fn build_converter(calendar: &CalendarToml) -> Result<Converter> {
    let start: CalendarDate = calendar
        .start_gregorian
        .parse()
        .context("invalid [calendar].start_gregorian")?;
    Converter::new()
        .with_start_gregorian(start)
        .context("invalid [calendar].start_gregorian")
}

/// Builds one [`Era`] from its TOML entry.
///
/// The start date is read with `converter` and must exist in the calendar
/// in force.
pub fn build_era(era: &EraToml, converter: &Converter) -> Result<Era> {
    let start: CalendarDate = era
        .start
        .parse()
        .with_context(|| format!("invalid start date for era {:?}", era.name))?;
    let start = converter
        .checked_day_number(&start)
        .with_context(|| format!("invalid start date for era {:?}", era.name))?;
    Ok(Era::new(&era.name, &era.alias, start)
        .with_check_bounds(era.check_bounds)
        .with_converter(*converter))
}

/// Builds the [`EraTable`] from the TOML era configuration.
///
/// Built-in eras are re-bound to `converter` so that every era reads dates
/// the same way.
pub fn build_era_table(eras: &ErasToml, converter: &Converter) -> Result<EraTable> {
    let mut table: EraTable = parse_builtin(&eras.builtin)?
        .iter()
        .cloned()
        .map(|e| e.with_converter(*converter))
        .collect();
    for era in &eras.custom {
        table.push(build_era(era, converter)?);
    }
    Ok(table)
}
