use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use quotedeck_core::{FinnhubClient, RequestPacer, StockQuote, Symbol};

use crate::cache::QuoteCache;

/// Walks the symbol universe sequentially under the upstream rate ceiling
/// and swaps the shared cache when a cycle completes.
///
/// Concurrency contract: at most one refresh cycle is in flight at any time.
/// Triggers that observe a stale cache while a cycle is running coalesce onto
/// it — they wait on the gate, find the cache fresh, and serve it — rather
/// than walking the universe again and multiplying upstream load.
pub struct QuoteRefresher {
    client: FinnhubClient,
    universe: Vec<Symbol>,
    pacer: RequestPacer,
    cache: QuoteCache,
    max_age: Duration,
    refresh_gate: Mutex<()>,
}

impl QuoteRefresher {
    pub fn new(
        client: FinnhubClient,
        universe: Vec<Symbol>,
        pacer: RequestPacer,
        max_age: Duration,
    ) -> Self {
        Self {
            client,
            universe,
            pacer,
            cache: QuoteCache::new(),
            max_age,
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// Staleness policy for the HTTP boundary: refreshes synchronously when
    /// the cache is stale (never filled, older than the budget, or empty),
    /// otherwise returns the snapshot as-is.
    pub async fn ensure_fresh(&self) -> Arc<Vec<StockQuote>> {
        if self.cache.is_stale(self.max_age).await {
            let _gate = self.refresh_gate.lock().await;
            // a coalesced cycle may have completed while this trigger waited
            if self.cache.is_stale(self.max_age).await {
                self.run_cycle().await;
            }
        }
        self.cache.results().await
    }

    /// One full sequential pass over the universe, one upstream call per
    /// entry, each awaiting the pacer first. Failed or empty symbols degrade
    /// coverage but never abort the cycle, and nothing is retried in-cycle.
    pub async fn run_cycle(&self) {
        let mut results = Vec::with_capacity(self.universe.len());

        for symbol in &self.universe {
            self.pacer.wait().await;
            match self.client.quote(symbol).await {
                Ok(payload) => {
                    match StockQuote::from_lenient(
                        symbol.clone(),
                        payload.current,
                        payload.percent_change,
                    ) {
                        Some(row) => results.push(row),
                        None => {
                            tracing::debug!(%symbol, "upstream returned an empty quote, skipping")
                        }
                    }
                }
                Err(error) => {
                    tracing::debug!(%symbol, %error, "quote fetch failed, skipping")
                }
            }
        }

        tracing::info!(
            universe = self.universe.len(),
            rows = results.len(),
            "refresh cycle complete"
        );
        self.cache.replace(results).await;
    }
}
