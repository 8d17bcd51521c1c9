use std::env;
use std::time::Duration;

use quotedeck_core::{parse_symbol_list, ApiToken, ConfigError, Symbol, DEFAULT_BASE_URL};

/// Default watchlist shown by the dashboard commands.
pub const DEFAULT_WATCHLIST: [&str; 8] = [
    "AAPL", "MSFT", "NVDA", "AMZN", "GOOGL", "META", "TSLA", "JPM",
];

/// Client configuration. The credential check is fail-fast: `from_env`
/// refuses to produce a config — and therefore any client — without a token.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: ApiToken,
    pub base_url: String,
    pub watchlist: Vec<Symbol>,
    pub poll_period: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let watchlist = match env::var("QUOTEDECK_WATCHLIST") {
            Ok(raw) => parse_symbol_list(&raw)?,
            Err(_) => default_watchlist(),
        };

        Ok(Self {
            token: ApiToken::from_env()?,
            base_url: env::var("QUOTEDECK_FINNHUB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            watchlist,
            poll_period: Duration::from_secs(30),
        })
    }
}

pub fn default_watchlist() -> Vec<Symbol> {
    DEFAULT_WATCHLIST
        .iter()
        .map(|raw| Symbol::parse(raw).expect("default watchlist symbols are valid"))
        .collect()
}
