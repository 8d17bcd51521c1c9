mod cli;
mod error;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quotedeck_client::config::ClientConfig;
use quotedeck_client::poller::QuotePoller;
use quotedeck_client::{candles, fanout};
use quotedeck_core::{
    parse_symbol_list, sector_for, FinnhubClient, ReqwestHttpClient, StockQuote, Symbol,
};

use crate::cli::{ChartArgs, Cli, Command, QuotesArgs, WatchArgs};
use crate::error::CliError;

const UNAVAILABLE_MESSAGE: &str =
    "Stock data unavailable (API rate limit or network error). Retry shortly.";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(2)
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    let client = FinnhubClient::new(
        config.base_url.clone(),
        config.token.clone(),
        Arc::new(ReqwestHttpClient::new()),
    );

    match cli.command {
        Command::Quotes(args) => run_quotes(&client, &config, args).await,
        Command::Chart(args) => run_chart(&client, args).await,
        Command::Watch(args) => run_watch(client, &config, args).await,
    }
}

fn resolve_watchlist(
    config: &ClientConfig,
    symbols: Option<&str>,
) -> Result<Vec<Symbol>, CliError> {
    match symbols {
        Some(raw) => Ok(parse_symbol_list(raw)?),
        None => Ok(config.watchlist.clone()),
    }
}

async fn run_quotes(
    client: &FinnhubClient,
    config: &ClientConfig,
    args: QuotesArgs,
) -> Result<ExitCode, CliError> {
    let watchlist = resolve_watchlist(config, args.symbols.as_deref())?;
    let rows = fanout::fetch_quotes(client, &watchlist).await;

    // The fetcher never errors; an empty batch is the outage signal.
    if rows.is_empty() {
        eprintln!("{UNAVAILABLE_MESSAGE}");
        return Ok(ExitCode::FAILURE);
    }

    print_table(&rows);
    Ok(ExitCode::SUCCESS)
}

async fn run_chart(client: &FinnhubClient, args: ChartArgs) -> Result<ExitCode, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let points = candles::fetch_chart(client, &symbol).await;

    if points.is_empty() {
        println!("no chart data for {symbol}");
        return Ok(ExitCode::SUCCESS);
    }

    for point in &points {
        println!("{:>8}  {:.2}", point.time, point.close);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_watch(
    client: FinnhubClient,
    config: &ClientConfig,
    args: WatchArgs,
) -> Result<ExitCode, CliError> {
    let watchlist = resolve_watchlist(config, args.symbols.as_deref())?;
    let period = Duration::from_secs(args.interval.max(1));

    let poller = QuotePoller::new(client, watchlist, period);
    let (mut updates, handle) = poller.spawn();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let rows = updates.borrow_and_update().clone();
                if rows.is_empty() {
                    eprintln!("{UNAVAILABLE_MESSAGE}");
                } else {
                    print_table(&rows);
                    println!();
                }
            }
            _ = tokio::signal::ctrl_c() => {
                handle.abort();
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_table(rows: &[StockQuote]) {
    println!("{:<8} {:>12} {:>9}  {}", "SYMBOL", "PRICE", "CHANGE", "SECTOR");
    for row in rows {
        println!(
            "{:<8} {:>12.2} {:>9}  {}",
            row.symbol.as_str(),
            row.price,
            format_change(row.percent_change),
            sector_for(&row.symbol)
        );
    }
}

fn format_change(percent_change: f64) -> String {
    if percent_change.is_nan() {
        String::from("-")
    } else {
        format!("{percent_change:+.2}%")
    }
}
