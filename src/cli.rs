use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use clap::{Parser, Subcommand};

/// Astronomical calendar calculator.
#[derive(Parser)]
#[command(
    name = "astrocalc",
    version,
    about = "Modified Julian Day Numbers and era years"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the Modified Julian Day Number of a date.
    Mjdn(MjdnArgs),
    /// Print the calendar date of a Modified Julian Day Number.
    Date(DateArgs),
    /// Print the era and era year of a date.
    Era(EraArgs),
}

/// Arguments for the `mjdn` subcommand.
#[derive(clap::Args)]
pub struct MjdnArgs {
    /// Astronomical year (1 BC is 0, 2 BC is -1).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month (1-12).
    pub month: u32,

    /// Day of the month.
    pub day: u32,

    /// UTC offset the date is given in, e.g. +09:00.
    #[arg(long, value_parser = parse_offset)]
    pub offset: Option<FixedOffset>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Modified Julian Day Number.
    #[arg(allow_negative_numbers = true)]
    pub mjdn: i64,

    /// UTC offset to express the date in, e.g. +09:00.
    #[arg(long, value_parser = parse_offset)]
    pub offset: Option<FixedOffset>,
}

/// Arguments for the `era` subcommand.
#[derive(clap::Args)]
pub struct EraArgs {
    /// Astronomical year (1 BC is 0, 2 BC is -1).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month (1-12).
    pub month: u32,

    /// Day of the month.
    pub day: u32,

    /// Count years in this era (name or alias) instead of the one in force.
    #[arg(short, long)]
    pub era: Option<String>,

    /// UTC offset the date is given in, e.g. +09:00.
    #[arg(long, value_parser = parse_offset)]
    pub offset: Option<FixedOffset>,
}

/// Parses a UTC offset such as `+09:00`, `-0330` or `Z`.
fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    if s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|e| format!("invalid UTC offset {s:?}: {e}"))
}
