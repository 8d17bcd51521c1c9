use serde::{Deserialize, Serialize};

use crate::Symbol;

/// One dashboard table row. Immutable once constructed; a new fetch cycle
/// produces entirely new rows.
///
/// Serialized with the field names the dashboard expects
/// (`{symbol, price, percentChange}`). `percent_change` is passed through
/// from upstream unvalidated; when upstream omits it the field is `NaN`,
/// which serde_json renders as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: Symbol,
    pub price: f64,
    pub percent_change: f64,
}

impl StockQuote {
    /// Inclusion rule used by the server-side batch refresher: any non-zero
    /// price passes. Upstream reports `0` for unknown or rate-limited
    /// symbols, so zero means "no quote available"; negative prices are NOT
    /// rejected here. The asymmetry with [`StockQuote::from_strict`] is
    /// observed upstream-handling behavior and the two rules are kept
    /// separate on purpose.
    pub fn from_lenient(
        symbol: Symbol,
        price: Option<f64>,
        percent_change: Option<f64>,
    ) -> Option<Self> {
        let price = price.filter(|value| *value != 0.0)?;
        Some(Self {
            symbol,
            price,
            percent_change: percent_change.unwrap_or(f64::NAN),
        })
    }

    /// Inclusion rule used by the direct client fetcher: the price must be a
    /// finite number strictly greater than zero.
    pub fn from_strict(
        symbol: Symbol,
        price: Option<f64>,
        percent_change: Option<f64>,
    ) -> Option<Self> {
        let price = price.filter(|value| value.is_finite() && *value > 0.0)?;
        Some(Self {
            symbol,
            price,
            percent_change: percent_change.unwrap_or(f64::NAN),
        })
    }
}

/// One chart point: a display label plus the closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub time: String,
    pub close: f64,
}
