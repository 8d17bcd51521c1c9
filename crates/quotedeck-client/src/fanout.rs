use quotedeck_core::{FinnhubClient, StockQuote, Symbol};

/// Fetches quotes for every symbol concurrently and joins the results back
/// in input order.
///
/// One task is spawned per symbol with no artificial delay between launches;
/// the join walks the handles in input order, so the output preserves the
/// watchlist order restricted to successes regardless of completion order.
/// A symbol that fails transport, decoding, or the positive-price check
/// contributes nothing, and the batch itself never fails — an empty return
/// is the caller's signal that the upstream is down or rate-limiting.
pub async fn fetch_quotes(client: &FinnhubClient, symbols: &[Symbol]) -> Vec<StockQuote> {
    let handles: Vec<_> = symbols
        .iter()
        .map(|symbol| {
            let client = client.clone();
            let symbol = symbol.clone();
            tokio::spawn(async move { fetch_one(&client, symbol).await })
        })
        .collect();

    let mut rows = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {}
            Err(error) => tracing::debug!(%error, "quote task failed, dropping its slot"),
        }
    }
    rows
}

async fn fetch_one(client: &FinnhubClient, symbol: Symbol) -> Option<StockQuote> {
    match client.quote(&symbol).await {
        Ok(payload) => StockQuote::from_strict(symbol, payload.current, payload.percent_change),
        Err(error) => {
            tracing::debug!(%symbol, %error, "quote fetch failed, dropping symbol");
            None
        }
    }
}
