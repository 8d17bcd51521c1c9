use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use quotedeck_core::StockQuote;

#[derive(Debug)]
struct CacheInner {
    results: Arc<Vec<StockQuote>>,
    fetched_at: Option<Instant>,
}

/// Process-wide quote snapshot.
///
/// The refresh cycle is the sole writer; request handlers are concurrent
/// readers. Writes replace the whole snapshot, never merge into it, so a
/// reader can never observe a partially written result set. `fetched_at` of
/// `None` marks a cache that has never been filled.
#[derive(Debug, Clone)]
pub struct QuoteCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                results: Arc::new(Vec::new()),
                fetched_at: None,
            })),
        }
    }

    pub async fn results(&self) -> Arc<Vec<StockQuote>> {
        self.inner.read().await.results.clone()
    }

    /// Replaces the snapshot wholesale and stamps the fetch time. Staleness
    /// is therefore measured from the END of a refresh cycle.
    pub async fn replace(&self, results: Vec<StockQuote>) {
        let mut inner = self.inner.write().await;
        inner.results = Arc::new(results);
        inner.fetched_at = Some(Instant::now());
    }

    /// A snapshot is stale when it has never been filled, is older than
    /// `max_age`, or holds no rows (an empty cache always warrants a refetch).
    pub async fn is_stale(&self, max_age: Duration) -> bool {
        let inner = self.inner.read().await;
        match inner.fetched_at {
            None => true,
            Some(fetched_at) => fetched_at.elapsed() > max_age || inner.results.is_empty(),
        }
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}
