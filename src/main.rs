mod arith_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod lookup_cmd;
mod table_cmd;

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
    let system = convert::resolve_system(cli.system.as_deref(), &config)?;
    match cli.command {
        Command::FromDate(args) => lookup_cmd::from_date(args, system),
        Command::ToDate(args) => lookup_cmd::to_date(args, system),
        Command::Weeks(args) => lookup_cmd::weeks(args, system),
        Command::Dates(args) => lookup_cmd::dates(args, system),
        Command::Diff(args) => arith_cmd::diff(args, system),
        Command::Shift(args) => arith_cmd::shift(args, system),
        Command::Table(args) => table_cmd::run(args, &config, system),
    }
}
