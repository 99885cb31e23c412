//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "weekgrid",
    version,
    about = "DST-aware week-by-hour timestamp grids"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the full week schedule as JSON
    Calc(CalcArgs),
    /// Resolve only the bordering weeks as JSON
    Borders(BordersArgs),
}

#[derive(Args)]
pub struct CalcArgs {
    /// ISO year (defaults to the current ISO year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// ISO week number, 1-53 (defaults to the current ISO week)
    #[arg(short, long)]
    pub week: Option<u32>,

    /// IANA timezone identifier (defaults to the host's ambient zone)
    #[arg(short, long)]
    pub timezone: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args)]
pub struct BordersArgs {
    /// ISO year
    #[arg(short, long)]
    pub year: i32,

    /// ISO week number, 1-53
    #[arg(short, long)]
    pub week: u32,
}
