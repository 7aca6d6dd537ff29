//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::web::{build_router, AppState};
use crate::adapters::yahoo_adapter::YahooAdapter;
use crate::domain::catalog::{default_selection, resolve_selection, Selection, INSTRUMENTS};
use crate::domain::dashboard::{load_dashboard, SummaryRow};
use crate::domain::error::OreboardError;
use crate::domain::period::Period;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "oreboard", about = "ASX mining sector stock dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the dashboard web server
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the summary table for selected stocks
    Summary {
        #[arg(long)]
        stocks: Option<String>,
        #[arg(long)]
        period: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the instruments in the catalog
    ListInstruments,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { config } => run_serve(config.as_ref()),
        Command::Summary {
            stocks,
            period,
            config,
        } => run_summary(stocks.as_deref(), period.as_deref(), config.as_ref()),
        Command::ListInstruments => run_list_instruments(),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = OreboardError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Builds the data port named by `[data] source` (default `yahoo`).
pub fn build_data_port(
    config: &dyn ConfigPort,
) -> Result<Arc<dyn DataPort + Send + Sync>, OreboardError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "yahoo".to_string());

    match source.as_str() {
        "yahoo" => Ok(Arc::new(YahooAdapter::from_config(config)?)),
        "csv" => {
            let dir = config.get_string("data", "csv_dir").ok_or_else(|| {
                OreboardError::ConfigMissing {
                    section: "data".into(),
                    key: "csv_dir".into(),
                }
            })?;
            Ok(Arc::new(CsvAdapter::new(PathBuf::from(dir))))
        }
        other => Err(OreboardError::ConfigInvalid {
            section: "data".into(),
            key: "source".into(),
            reason: format!("unknown source '{}' (expected yahoo or csv)", other),
        }),
    }
}

fn run_serve(config_path: Option<&PathBuf>) -> ExitCode {
    // Stage 1: Load config (absent file means built-in defaults)
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(c) => c,
                Err(code) => return code,
            }
        }
        None => FileConfigAdapter::empty(),
    };

    // Stage 2: Build the data port
    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Bind and serve
    let addr: SocketAddr = config
        .get_string("web", "listen")
        .unwrap_or_else(|| "127.0.0.1:3000".to_string())
        .parse()
        .unwrap_or_else(|_| "127.0.0.1:3000".parse().unwrap());

    eprintln!("Starting web server on {}", addr);
    log::info!("dashboard listening on {}", addr);

    let state = AppState { data_port };
    let router = build_router(state);

    tokio::runtime::Runtime::new()
        .unwrap()
        .block_on(async {
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, router).await.unwrap();
        });

    ExitCode::SUCCESS
}

pub fn run_summary(
    stocks: Option<&str>,
    period: Option<&str>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load config
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(c) => c,
                Err(code) => return code,
            }
        }
        None => FileConfigAdapter::empty(),
    };

    // Stage 2: Resolve period and stock selection
    let period = match period {
        Some(raw) => match raw.parse::<Period>() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
        None => Period::default(),
    };

    let selection = match stocks {
        Some(list) => resolve_selection(list.split(',')),
        None => Selection {
            instruments: default_selection(),
            unknown: Vec::new(),
        },
    };

    for ticker in &selection.unknown {
        eprintln!("warning: unknown ticker {}", ticker);
    }
    if selection.instruments.is_empty() {
        eprintln!("error: no known tickers selected");
        return ExitCode::from(2);
    }

    // Stage 3: Build the data port and fetch
    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data = tokio::runtime::Runtime::new()
        .unwrap()
        .block_on(load_dashboard(
            data_port.as_ref(),
            &selection.instruments,
            period,
        ));

    // Stage 4: Report
    for skip in &data.skipped {
        eprintln!("warning: {}", skip.message());
    }

    if data.all_unavailable() {
        eprintln!("error: no data available for the selected stocks and period");
        return ExitCode::from(5);
    }

    print_summary_table(&data.summary_rows());
    ExitCode::SUCCESS
}

fn print_summary_table(rows: &[SummaryRow]) {
    println!(
        "{:<20} {:<8} {:>14} {:>15} {:>12} {:>10} {:>10}",
        "Company", "Ticker", "Current Price", "Daily Change %", "Volume", "Year High", "Year Low",
    );
    for row in rows {
        println!(
            "{:<20} {:<8} {:>14} {:>15} {:>12} {:>10} {:>10}",
            row.company,
            row.ticker,
            row.current_price,
            row.daily_change,
            row.volume,
            row.year_high,
            row.year_low,
        );
    }
}

pub fn run_list_instruments() -> ExitCode {
    for instrument in &INSTRUMENTS {
        println!("{}\t{}", instrument.name, instrument.ticker);
    }
    ExitCode::SUCCESS
}
