use anyhow::Result;
use astrocalc_mjdn::{Converter, DayNumber};
use chrono::{Offset, Utc};
use tracing::info;

use crate::cli::DateArgs;

/// Run the `date` subcommand.
pub fn run(args: &DateArgs, converter: &Converter) -> Result<()> {
    println!("{}", render(args, converter)?);
    Ok(())
}

/// Returns the calendar date of the day number as `YYYY-MM-DD`.
fn render(args: &DateArgs, converter: &Converter) -> Result<String> {
    let offset = args.offset.unwrap_or_else(|| Utc.fix());
    let dn = DayNumber::new(args.mjdn);
    let date = converter.checked_calendar_date(dn, offset)?;
    info!(mjdn = %dn, %date, %offset, "converted day number");
    Ok(date.to_string())
}
