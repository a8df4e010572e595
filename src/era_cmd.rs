use anyhow::{Context, Result};
use astrocalc_era::EraTable;
use astrocalc_mjdn::CalendarDate;
use chrono::{Offset, Utc};
use tracing::info;

use crate::cli::EraArgs;

/// Run the `era` subcommand.
pub fn run(args: &EraArgs, table: &EraTable) -> Result<()> {
    println!("{}", render(args, table)?);
    Ok(())
}

/// Returns the era year of the date, e.g. `平成 (Heisei) 27`.
fn render(args: &EraArgs, table: &EraTable) -> Result<String> {
    let offset = args.offset.unwrap_or_else(|| Utc.fix());
    let date = CalendarDate::with_offset(args.year, args.month, args.day, offset)
        .context("invalid date")?;
    let year = match args.era.as_deref() {
        Some(name) => table.resolve_in(name, &date)?,
        None => table.resolve(&date)?,
    };
    info!(%date, era = year.name(), year = year.year(), "resolved era");
    Ok(year.to_string())
}
