//! `weekgrid` CLI — inspect DST-aware week schedules from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Current week in the host's ambient timezone
//! weekgrid calc
//!
//! # A specific week in a specific zone
//! weekgrid calc --year 2024 --week 43 --timezone Europe/Berlin
//!
//! # Compact JSON for piping
//! weekgrid calc -y 2024 -w 1 -t UTC --compact
//!
//! # Only the bordering weeks
//! weekgrid borders --year 2024 --week 1
//! ```

mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{BordersArgs, CalcArgs, Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calc(args) => calc(args),
        Command::Borders(args) => borders(args),
    }
}

fn calc(args: CalcArgs) -> Result<()> {
    let schedule = weekgrid_core::calculate(args.year, args.week, args.timezone.as_deref())
        .context("Failed to compute week schedule")?;

    let json = if args.compact {
        serde_json::to_string(&schedule)?
    } else {
        serde_json::to_string_pretty(&schedule)?
    };
    println!("{json}");
    Ok(())
}

fn borders(args: BordersArgs) -> Result<()> {
    let b = weekgrid_core::resolve_borders(args.year, args.week)
        .context("Failed to resolve border weeks")?;

    let out = serde_json::json!({
        "year": args.year,
        "week": args.week,
        "year_prev": b.year_prev,
        "week_prev": b.week_prev,
        "year_next": b.year_next,
        "week_next": b.week_next,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
