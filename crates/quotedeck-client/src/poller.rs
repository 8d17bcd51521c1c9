use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use quotedeck_core::{FinnhubClient, StockQuote, Symbol};

use crate::fanout;

/// Re-fetches the watchlist on a fixed cadence.
///
/// Batches run strictly one at a time: the loop awaits each fan-out before
/// taking the next tick, and ticks that land while a batch is outstanding
/// are skipped — never queued — so a slow upstream cannot stack concurrent
/// batches.
pub struct QuotePoller {
    client: FinnhubClient,
    symbols: Vec<Symbol>,
    period: Duration,
}

impl QuotePoller {
    pub fn new(client: FinnhubClient, symbols: Vec<Symbol>, period: Duration) -> Self {
        Self {
            client,
            symbols,
            period,
        }
    }

    /// Spawns the polling loop. Every completed batch — including an empty
    /// one, which consumers surface as "data unavailable" — is published to
    /// the returned channel. The first batch runs immediately; the loop ends
    /// when every receiver is dropped.
    pub fn spawn(self) -> (watch::Receiver<Vec<StockQuote>>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(Vec::new());

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(self.period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;
                let rows = fanout::fetch_quotes(&self.client, &self.symbols).await;
                if tx.send(rows).is_err() {
                    tracing::debug!("all poll receivers dropped, stopping");
                    return;
                }
            }
        });

        (rx, handle)
    }
}
