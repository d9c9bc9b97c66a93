//! Hobart CLI binary.
//!
//! Provides the command-line interface for the Fama-French 5-factor beta
//! dashboard: a cross-section view, a rolling time-series view, and the
//! reference company directory.

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use hobart::universe::{TickerDirectory, Universe};
use hobart_data::PanelCache;
use hobart_output::{ExportFormat, Exporter, TextTable};
use hobart_query::{QueryError, TimeWindow, ValidatedTickers, cross_section, time_series, validate};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: Fama-French 5-factor beta dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-section of betas at the latest panel date
    CrossSection {
        /// Panel source file (two-header-row CSV)
        #[arg(long)]
        panel: PathBuf,

        /// Comma-separated tickers (up to 10 used)
        tickers: String,

        /// Output format (text, markdown, csv, or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Rolling beta trends over a trailing calendar window
    TimeSeries {
        /// Panel source file (two-header-row CSV)
        #[arg(long)]
        panel: PathBuf,

        /// Comma-separated tickers (up to 10 used)
        tickers: String,

        /// Window length in calendar years
        #[arg(long, default_value_t = TimeWindow::DEFAULT_YEARS)]
        years: u32,

        /// Window end date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Output format (text, markdown, csv, or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the reference company directory
    Universe {
        /// Case-insensitive substring filter on company name or symbol
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CrossSection {
            panel,
            tickers,
            format,
            output,
        } => {
            let mut cache = PanelCache::new();
            let panel = cache.load(&panel)?;
            let Some(tickers) = validated_or_guidance(&tickers, &panel)? else {
                return Ok(());
            };

            let snapshot = cross_section(&panel, &tickers)?;
            let content = render(&snapshot, &format)?;
            emit(&content, output.as_deref())?;
        }
        Commands::TimeSeries {
            panel,
            tickers,
            years,
            as_of,
            format,
            output,
        } => {
            let mut cache = PanelCache::new();
            let panel = cache.load(&panel)?;
            let Some(tickers) = validated_or_guidance(&tickers, &panel)? else {
                return Ok(());
            };

            let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
            let window = TimeWindow::new(years, as_of);
            let trend = time_series(&panel, &tickers, window);
            let content = render(&trend, &format)?;
            emit(&content, output.as_deref())?;
        }
        Commands::Universe { search } => {
            list_universe(search.as_deref());
        }
    }

    Ok(())
}

/// Validate the ticker string, turning the recoverable no-match case into
/// empty-state guidance instead of an error exit.
fn validated_or_guidance(
    raw: &str,
    panel: &hobart_data::BetaPanel,
) -> Result<Option<ValidatedTickers>, Box<dyn std::error::Error>> {
    match validate(raw, panel) {
        Ok(tickers) => Ok(Some(tickers)),
        Err(QueryError::NoValidTickers) => {
            println!("No valid tickers found.");
            println!(
                "None of the requested symbols appear in the panel. Check the spelling \
                 against `hobart universe`; up to 10 comma-separated tickers are used."
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn render<T: TextTable + Exporter>(
    result: &T,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        "text" => Ok(result.to_ascii_table()),
        "markdown" => Ok(result.to_markdown()),
        "csv" => Ok(result.export_to_string(ExportFormat::Csv)?),
        "json" => Ok(result.export_to_string(ExportFormat::PrettyJson)?),
        _ => Err(format!("Unknown format: {} (expected text, markdown, csv, or json)", format).into()),
    }
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn list_universe(search: Option<&str>) {
    let directory = TickerDirectory::sp500();

    println!("S&P 500 Company Directory");
    println!("=========================\n");

    let needle = search.map(str::to_lowercase);
    let mut shown = 0usize;

    for company in directory.companies() {
        if let Some(needle) = &needle {
            let matches = company.name.to_lowercase().contains(needle)
                || company.symbol.to_lowercase().contains(needle);
            if !matches {
                continue;
            }
        }
        println!("  {:<36} {}", company.name, company.symbol);
        shown += 1;
    }

    if shown == 0 {
        println!("  (no matches)");
    }
    println!("\n{} of {} companies shown", shown, directory.size());
}
