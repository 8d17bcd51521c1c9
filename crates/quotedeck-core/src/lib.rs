//! # Quotedeck Core
//!
//! Domain types and the Finnhub upstream client shared by the quotedeck
//! server proxy and the direct dashboard client.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (Symbol, StockQuote, CandlePoint) |
//! | [`error`] | Validation, configuration, and upstream error types |
//! | [`finnhub`] | Finnhub API client (quote and candle endpoints) |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`pacing`] | Minimum-spacing rate limiting for upstream calls |
//! | [`sectors`] | Static sector classification table |
//!
//! ## Security
//!
//! The API credential is read from the environment only and is never logged;
//! [`ApiToken`]'s `Debug` implementation redacts the key.

pub mod domain;
pub mod error;
pub mod finnhub;
pub mod http_client;
pub mod pacing;
pub mod sectors;

// Re-export commonly used types at crate root for convenience

pub use domain::{parse_symbol_list, CandlePoint, StockQuote, Symbol};
pub use error::{ConfigError, SourceError, SourceErrorKind, ValidationError};
pub use finnhub::{
    ApiToken, CandleResolution, FinnhubClient, QuotePayload, DEFAULT_BASE_URL, TOKEN_ENV,
};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use pacing::RequestPacer;
pub use sectors::sector_for;
