mod cli;
mod config;
mod convert;
mod date_cmd;
mod era_cmd;
mod logging;
mod mjdn_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let converter = convert::build_converter(&config.calendar)?;

    match cli.command {
        Command::Mjdn(args) => mjdn_cmd::run(&args, &converter),
        Command::Date(args) => date_cmd::run(&args, &converter),
        Command::Era(args) => {
            let table = convert::build_era_table(&config.eras, &converter)?;
            era_cmd::run(&args, &table)
        }
    }
}
