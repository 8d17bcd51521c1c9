//! CLI argument definitions.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quotes` | Fetch the watchlist once and print a quote table |
//! | `chart` | Print chart points for one symbol |
//! | `watch` | Poll the watchlist on an interval and print each update |

use clap::{Args, Parser, Subcommand};

/// Quotedeck — equity dashboard feed over the Finnhub API.
///
/// Reads the API key from `QUOTEDECK_FINNHUB_API_KEY`; the watchlist can be
/// overridden with `QUOTEDECK_WATCHLIST` or per-invocation with `--symbols`.
#[derive(Debug, Parser)]
#[command(name = "quotedeck", version, about = "Equity dashboard feed over the Finnhub API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the watchlist once and print a quote table.
    Quotes(QuotesArgs),
    /// Print chart points for one symbol, falling back to coarser
    /// resolutions when fine-grained data is thin.
    Chart(ChartArgs),
    /// Poll the watchlist on an interval and print each update.
    Watch(WatchArgs),
}

#[derive(Debug, Args)]
pub struct QuotesArgs {
    /// Comma-separated symbols; defaults to the configured watchlist.
    #[arg(long)]
    pub symbols: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Ticker to chart.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Comma-separated symbols; defaults to the configured watchlist.
    #[arg(long)]
    pub symbols: Option<String>,

    /// Seconds between refreshes.
    #[arg(long, default_value_t = 30)]
    pub interval: u64,
}
