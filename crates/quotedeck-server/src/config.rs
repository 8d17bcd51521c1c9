use std::env;
use std::time::Duration;

use quotedeck_core::{ApiToken, ConfigError, Symbol, DEFAULT_BASE_URL};

use crate::universe;

/// Proxy configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub token: ApiToken,
    pub base_url: String,
    /// Fixed, ordered symbol universe; duplicates are fetched twice.
    pub universe: Vec<Symbol>,
    /// Minimum spacing between upstream quote calls. The upstream free tier
    /// enforces roughly one request per 1.1 s; this is its constraint, not a
    /// local tuning choice.
    pub quote_spacing: Duration,
    /// Staleness budget for the cached result set.
    pub max_age: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let universe = match env::var("QUOTEDECK_SYMBOLS") {
            Ok(raw) => universe::parse_universe(&raw)?,
            Err(_) => universe::default_universe(),
        };

        Ok(Self {
            bind: env_str("QUOTEDECK_BIND", "127.0.0.1"),
            port: env_u16("QUOTEDECK_PORT", 3001),
            token: ApiToken::from_env()?,
            base_url: env_str("QUOTEDECK_FINNHUB_BASE_URL", DEFAULT_BASE_URL),
            universe,
            quote_spacing: Duration::from_millis(env_u64("QUOTEDECK_QUOTE_SPACING_MS", 1_100)),
            max_age: Duration::from_millis(env_u64("QUOTEDECK_CACHE_MAX_AGE_MS", 60_000)),
        })
    }
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
