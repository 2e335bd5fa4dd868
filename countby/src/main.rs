//! # countby
//!
//! A CLI tool that aggregates a CSV dataset's 国 column into country-wise and
//! region-wise frequency reports, aligned for mixed CJK/ASCII labels.
//!
//! ## Usage
//!
//! ```bash
//! # Aggregate a dataset
//! countby data.csv
//!
//! # Use a custom country/region master file (columns 国 and 地域)
//! countby data.csv --regions regions.csv
//!
//! # Output the raw tables as JSON
//! countby data.csv --output json
//! ```
//!
//! Region classification falls back to the built-in map when `--regions` is
//! omitted or its file cannot be used; dataset problems (missing file, no 国
//! column, malformed CSV) print a single error line and exit non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use console::style;
use countbylib::{
    count_dataset, default_region_map, load_dataset, load_region_map, render_summary, RegionMap,
};

/// How the aggregated tables are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned text report
    Text,
    /// Both frequency tables as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "countby",
    version,
    about = "Country/region frequency reports over CSV datasets"
)]
struct Cli {
    /// CSV file to aggregate (must carry a 国 column)
    path: PathBuf,

    /// Country/region master CSV with 国 and 地域 columns
    /// (the built-in map is used when omitted or unreadable)
    #[arg(long, value_name = "FILE")]
    regions: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// Pick the region map: a loadable `--regions` master wins, anything else
/// falls back to the built-in map with a warning.
fn resolve_region_map(cli: &Cli) -> RegionMap {
    let Some(path) = &cli.regions else {
        return default_region_map().clone();
    };
    match load_region_map(path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!(
                "{} {e}; falling back to the built-in region map",
                style("warning:").yellow().bold()
            );
            default_region_map().clone()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let regions = resolve_region_map(cli);
    let dataset = load_dataset(&cli.path)?;
    let summary = count_dataset(&dataset, &regions)?;

    match cli.output {
        OutputFormat::Text => print!("{}", render_summary(&summary)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
