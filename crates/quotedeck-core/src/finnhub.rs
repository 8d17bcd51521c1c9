//! Finnhub API client.
//!
//! Two endpoints are consumed:
//!
//! - `GET {base}/quote?symbol={SYM}&token={KEY}` — current price (`c`) and
//!   percent change (`dp`). Finnhub reports `c: 0` for unknown or
//!   rate-limited symbols rather than an error status.
//! - `GET {base}/stock/candle?symbol={SYM}&resolution={R}&from={s}&to={s}&token={KEY}`
//!   — a status sentinel (`s`) plus parallel close (`c`) and timestamp (`t`)
//!   arrays. Any status other than `"ok"` yields an empty point sequence.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::{ConfigError, SourceError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::{CandlePoint, Symbol};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Environment variable holding the Finnhub API key.
pub const TOKEN_ENV: &str = "QUOTEDECK_FINNHUB_API_KEY";

/// Upstream API credential.
///
/// Absence is a fail-fast configuration error: without a token no client can
/// be constructed and no request is ever issued. `Debug` redacts the key so
/// it cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingCredential { var: TOKEN_ENV });
        }
        Ok(Self(token))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TOKEN_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Err(ConfigError::MissingCredential { var: TOKEN_ENV }),
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// Candle resolutions used by the chart fallback ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleResolution {
    FiveMinute,
    FifteenMinute,
    Daily,
}

impl CandleResolution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinute => "5",
            Self::FifteenMinute => "15",
            Self::Daily => "D",
        }
    }

    /// Chart axis label for one point: `M/D` for daily bars, `H:MM` (UTC)
    /// for intraday bars.
    fn label(self, unix_seconds: i64) -> String {
        let dt = OffsetDateTime::from_unix_timestamp(unix_seconds)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        match self {
            Self::Daily => format!("{}/{}", u8::from(dt.month()), dt.day()),
            Self::FiveMinute | Self::FifteenMinute => {
                format!("{}:{:02}", dt.hour(), dt.minute())
            }
        }
    }
}

/// Decoded quote payload. Both fields are optional on the wire; the
/// per-variant inclusion rules decide what counts as a usable quote.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuotePayload {
    #[serde(rename = "c", default)]
    pub current: Option<f64>,
    #[serde(rename = "dp", default)]
    pub percent_change: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct CandleResponse {
    #[serde(rename = "s", default)]
    status: Option<String>,
    #[serde(rename = "c", default)]
    closes: Vec<f64>,
    #[serde(rename = "t", default)]
    timestamps: Vec<i64>,
}

/// Finnhub API client, shared by the batch refresher and the fan-out
/// fetcher. Cloning is cheap; the transport is reference-counted.
#[derive(Clone)]
pub struct FinnhubClient {
    base_url: String,
    token: ApiToken,
    http: Arc<dyn HttpClient>,
}

impl Debug for FinnhubClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinnhubClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl FinnhubClient {
    pub fn new(base_url: impl Into<String>, token: ApiToken, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            http,
        }
    }

    /// Fetches the current quote for one symbol.
    pub async fn quote(&self, symbol: &Symbol) -> Result<QuotePayload, SourceError> {
        let url = format!(
            "{}/quote?symbol={}&token={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            self.token.expose()
        );

        let response = self
            .http
            .execute(HttpRequest::get(url))
            .await
            .map_err(|error| {
                SourceError::transport(format!("finnhub quote transport error: {}", error.message()))
            })?;

        if !response.is_success() {
            return Err(SourceError::status(response.status));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| SourceError::decode(format!("failed to decode finnhub quote: {error}")))
    }

    /// Fetches candle points for one symbol over `[from, to]` unix seconds.
    ///
    /// A non-`"ok"` status or missing arrays decode to an empty sequence
    /// rather than an error; the chart fallback ladder treats both the same.
    pub async fn candles(
        &self,
        symbol: &Symbol,
        resolution: CandleResolution,
        from: i64,
        to: i64,
    ) -> Result<Vec<CandlePoint>, SourceError> {
        let url = format!(
            "{}/stock/candle?symbol={}&resolution={}&from={from}&to={to}&token={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            resolution.as_str(),
            self.token.expose()
        );

        let response = self
            .http
            .execute(HttpRequest::get(url))
            .await
            .map_err(|error| {
                SourceError::transport(format!(
                    "finnhub candle transport error: {}",
                    error.message()
                ))
            })?;

        if !response.is_success() {
            return Err(SourceError::status(response.status));
        }

        let decoded: CandleResponse = serde_json::from_str(&response.body).map_err(|error| {
            SourceError::decode(format!("failed to decode finnhub candles: {error}"))
        })?;

        if decoded.status.as_deref() != Some("ok") {
            return Ok(Vec::new());
        }

        Ok(decoded
            .timestamps
            .iter()
            .zip(decoded.closes.iter())
            .map(|(&ts, &close)| CandlePoint {
                time: resolution.label(ts),
                close,
            })
            .collect())
    }
}
