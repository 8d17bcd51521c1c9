//! Quotedeck direct client.
//!
//! Fetches quotes for a curated watchlist straight from the upstream API with
//! a concurrent fan-out (no proxy, no throttling), chart candles with a
//! graduated resolution fallback, and a serialized polling loop for periodic
//! refresh. Suitable when the caller accepts the upstream rate-limit risk in
//! exchange for latency.

pub mod candles;
pub mod config;
pub mod fanout;
pub mod history;
pub mod poller;

pub use candles::fetch_chart;
pub use config::ClientConfig;
pub use fanout::fetch_quotes;
pub use poller::QuotePoller;
