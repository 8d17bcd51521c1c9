use std::sync::Arc;

use quotedeck_core::{FinnhubClient, HttpClient, RequestPacer};

use crate::config::ServerConfig;
use crate::refresh::QuoteRefresher;

/// Shared application state, passed to route handlers via
/// `axum::extract::State`.
pub struct AppState {
    pub refresher: QuoteRefresher,
}

impl AppState {
    /// Builds the state from configuration plus an injected transport, so
    /// tests can run the full request path against a scripted client.
    pub fn new(config: ServerConfig, http: Arc<dyn HttpClient>) -> Arc<Self> {
        let client = FinnhubClient::new(config.base_url, config.token, http);
        let pacer = RequestPacer::new(config.quote_spacing);
        let refresher = QuoteRefresher::new(client, config.universe, pacer, config.max_age);

        Arc::new(Self { refresher })
    }
}
