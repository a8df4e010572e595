use anyhow::{Context, Result};
use astrocalc_mjdn::{CalendarDate, Converter};
use chrono::{FixedOffset, Offset, Utc};
use tracing::info;

use crate::cli::MjdnArgs;

/// Run the `mjdn` subcommand.
pub fn run(args: &MjdnArgs, converter: &Converter) -> Result<()> {
    println!("{}", render(args, converter)?);
    Ok(())
}

/// Returns the day number followed by its UTC date, e.g. `57023 (2015-01-01)`.
fn render(args: &MjdnArgs, converter: &Converter) -> Result<String> {
    let offset: FixedOffset = args.offset.unwrap_or_else(|| Utc.fix());
    let date = CalendarDate::with_offset(args.year, args.month, args.day, offset)
        .context("invalid date")?;
    let dn = converter.checked_day_number(&date)?;
    info!(%date, %offset, mjdn = %dn, "converted date");
    Ok(dn.describe(converter))
}
