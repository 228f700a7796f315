//! Angelscan CLI — scan a universe, diagnose one symbol, manage universes.
//!
//! Commands:
//! - `scan` — run the VCP / Fallen-Angel screen over a universe and export
//!   CSV/JSON/watchlist results
//! - `diagnose` — per-gate pass/fail breakdown for a single symbol
//! - `universe init` / `universe show` — manage the sector TOML file

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use angelscan_core::data::{CircuitBreaker, ListingClient, Universe, YahooProvider};
use angelscan_runner::{
    diagnose_symbol, scan_universe, write_rows_csv, write_rows_json, write_tradingview_txt,
    ScanConfig, StdoutProgress,
};

#[derive(Parser)]
#[command(
    name = "angelscan",
    about = "Angelscan CLI — VCP / Fallen-Angel market screener"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the screen over a universe and export results.
    Scan {
        /// Target date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Path to a TOML scan config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to a universe TOML file. Defaults to the built-in list.
        #[arg(long)]
        universe: Option<PathBuf>,

        /// Scan the full NASDAQ + NYSE market instead of a universe file.
        #[arg(long, default_value_t = false)]
        full_market: bool,

        /// Output directory for result files.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
    /// Per-gate pass/fail breakdown for one symbol.
    Diagnose {
        /// Symbol to diagnose (e.g., NVDA).
        symbol: String,

        /// Target date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Path to a TOML scan config.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Universe file management.
    Universe {
        #[command(subcommand)]
        action: UniverseAction,
    },
}

#[derive(Subcommand)]
enum UniverseAction {
    /// Write the built-in default universe to a TOML file.
    Init {
        /// Destination path.
        #[arg(long, default_value = "universe.toml")]
        path: PathBuf,
    },
    /// Print sector and ticker counts for a universe file.
    Show {
        /// Universe file. Defaults to the built-in list.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            date,
            config,
            universe,
            full_market,
            output_dir,
        } => run_scan(date, config, universe, full_market, output_dir),
        Commands::Diagnose {
            symbol,
            date,
            config,
        } => run_diagnose(&symbol, date, config),
        Commands::Universe { action } => match action {
            UniverseAction::Init { path } => universe_init(&path),
            UniverseAction::Show { path } => universe_show(path.as_deref()),
        },
    }
}

fn parse_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ScanConfig> {
    match path {
        Some(path) => ScanConfig::from_file(&path)
            .with_context(|| format!("load scan config {}", path.display())),
        None => Ok(ScanConfig::default()),
    }
}

fn run_scan(
    date: Option<String>,
    config: Option<PathBuf>,
    universe: Option<PathBuf>,
    full_market: bool,
    output_dir: PathBuf,
) -> Result<()> {
    let target_date = parse_date(date)?;
    let config = load_config(config)?;

    if full_market && universe.is_some() {
        bail!("--full-market and --universe are mutually exclusive");
    }

    let tickers: Vec<String> = if full_market {
        println!("Fetching exchange symbol directories...");
        ListingClient::new().fetch_all()
    } else if let Some(path) = universe {
        Universe::from_file(&path)
            .map_err(anyhow::Error::msg)?
            .all_tickers()
    } else {
        Universe::default_us().all_tickers()
    };
    println!(
        "Scanning {} symbols as of {target_date} (config {})",
        tickers.len(),
        &config.scan_id()[..12]
    );

    let breaker = Arc::new(CircuitBreaker::default_provider());
    let provider = YahooProvider::new(breaker);

    let report = scan_universe(&provider, &tickers, target_date, &config, &StdoutProgress)?;

    let run_dir = output_dir.join(report.target_date.to_string());
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("create output dir {}", run_dir.display()))?;

    write_rows_csv(&run_dir.join("scan.csv"), &report.rows)?;
    write_rows_json(&run_dir.join("scan.json"), &report.rows)?;
    write_tradingview_txt(
        &run_dir.join("watchlist.txt"),
        &report.rows,
        &config.tradingview_prefix,
        &config.tradingview_separator,
    )?;

    println!(
        "\n{} matches ({} evaluated, {} skipped) → {}",
        report.rows.len(),
        report.evaluated,
        report.skipped.len(),
        run_dir.display()
    );
    for row in &report.rows {
        println!("  {}", row.symbol);
    }

    Ok(())
}

fn run_diagnose(symbol: &str, date: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let target_date = parse_date(date)?;
    let config = load_config(config)?;
    let symbol = symbol.trim().to_uppercase().replace('.', "-");

    let breaker = Arc::new(CircuitBreaker::default_provider());
    let provider = YahooProvider::new(breaker);

    let diagnosis = diagnose_symbol(&provider, &symbol, target_date, &config)?;
    print!("{}", diagnosis.render_text());

    Ok(())
}

fn universe_init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let toml = Universe::default_us().to_toml().map_err(anyhow::Error::msg)?;
    std::fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote default universe to {}", path.display());
    Ok(())
}

fn universe_show(path: Option<&Path>) -> Result<()> {
    let universe = match path {
        Some(path) => Universe::from_file(path).map_err(anyhow::Error::msg)?,
        None => Universe::default_us(),
    };
    for sector in universe.sector_names() {
        let count = universe.sector_tickers(sector).map_or(0, |t| t.len());
        println!("{sector:<14} {count} tickers");
    }
    println!("total          {} tickers", universe.ticker_count());
    Ok(())
}
