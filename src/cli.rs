use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gregorian to Jalali date conversion.
#[derive(Parser)]
#[command(
    name = "jalali-now",
    version,
    about = "Print dates in the Jalali (Solar Hijri) calendar"
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
    /// Print today's date in the Jalali calendar.
    Now(NowArgs),
    /// Convert a single Gregorian date.
    Convert(ConvertArgs),
    /// Print every day of a Gregorian year next to its Jalali date.
    Year(YearArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Also print the time of day.
    #[arg(short, long)]
    pub time: bool,

    /// Use UTC instead of the local time zone.
    #[arg(long)]
    pub utc: bool,

    /// Override the date separator from config.
    #[arg(short, long)]
    pub separator: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date as YYYY-MM-DD.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Accept out-of-range months and days instead of rejecting them.
    #[arg(long)]
    pub lenient: bool,

    /// Override the date separator from config.
    #[arg(short, long)]
    pub separator: Option<String>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Gregorian year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Override the date separator from config.
    #[arg(short, long)]
    pub separator: Option<String>,
}
