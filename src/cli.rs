use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Epidemiological week calculator.
#[derive(Parser)]
#[command(
    name = "epiweek",
    version,
    about = "Convert between calendar dates and MMWR / ISO epidemiological weeks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./epiweek.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Week numbering system: mmwr (alias cdc) or iso. Overrides the config file.
    #[arg(short, long, global = true)]
    pub system: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Find the epiweek containing a date.
    FromDate(FromDateArgs),
    /// Convert a yyyyww epiweek to a calendar date.
    ToDate(ToDateArgs),
    /// Print the number of weeks in an epi-year.
    Weeks(WeeksArgs),
    /// List the seven dates of an epiweek.
    Dates(DatesArgs),
    /// Signed number of weeks between two epiweeks (first minus second).
    Diff(DiffArgs),
    /// Move an epiweek forward or backward by whole weeks.
    Shift(ShiftArgs),
    /// Write a JSON reference table of conversions for a range of years.
    Table(TableArgs),
}

/// Arguments for the `from-date` subcommand.
#[derive(clap::Args)]
pub struct FromDateArgs {
    /// Date as YYYY-MM-DD (default: today).
    pub date: Option<String>,
}

/// Arguments for the `to-date` subcommand.
#[derive(clap::Args)]
pub struct ToDateArgs {
    /// Epiweek as yyyyww.
    pub week: String,

    /// Day of week (1..=7 in the chosen system).
    #[arg(short, long, default_value_t = 1)]
    pub day: u8,
}

/// Arguments for the `weeks` subcommand.
#[derive(clap::Args)]
pub struct WeeksArgs {
    /// Epi-year.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args)]
pub struct DatesArgs {
    /// Epiweek as yyyyww.
    pub week: String,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Epiweek as yyyyww.
    pub first: String,

    /// Epiweek as yyyyww.
    pub second: String,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Epiweek as yyyyww.
    pub week: String,

    /// Number of weeks to move (negative moves back).
    #[arg(allow_hyphen_values = true)]
    pub delta: i32,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// First epi-year (overrides [table].start_year).
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last epi-year, inclusive (overrides [table].end_year).
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Output JSON path (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
