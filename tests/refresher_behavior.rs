//! Behavior tests for the server-side batch quote refresher: sequential
//! pacing, lenient per-symbol inclusion, staleness triggering, and the
//! single-flight refresh contract.

use std::sync::Arc;
use std::time::{Duration, Instant};

use quotedeck_core::RequestPacer;
use quotedeck_server::QuoteRefresher;
use quotedeck_tests::support::{self, ScriptedHttpClient};

fn refresher(
    http: Arc<ScriptedHttpClient>,
    raw_symbols: &[&str],
    spacing: Duration,
    max_age: Duration,
) -> QuoteRefresher {
    QuoteRefresher::new(
        support::client(http),
        support::symbols(raw_symbols),
        RequestPacer::new(spacing),
        max_age,
    )
}

#[tokio::test]
async fn when_every_symbol_succeeds_the_cycle_covers_the_universe_in_order() {
    // Given: a three-symbol universe where every upstream call succeeds
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(20.0, -2.0))
            .ok("symbol=CCC&", &support::quote_body(30.0, 0.0)),
    );
    let spacing = Duration::from_millis(30);
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB", "CCC"],
        spacing,
        Duration::from_secs(60),
    );

    // When: one refresh cycle runs
    let start = Instant::now();
    refresher.run_cycle().await;
    let elapsed = start.elapsed();

    // Then: exactly one sequential upstream call per universe entry
    assert_eq!(http.request_count(), 3);
    assert_eq!(http.peak_in_flight(), 1, "refresh calls must be sequential");
    assert!(
        elapsed >= spacing * 2,
        "three calls imply two inter-call delays, got {elapsed:?}"
    );

    let results = refresher.cache().results().await;
    let kept: Vec<&str> = results.iter().map(|row| row.symbol.as_str()).collect();
    assert_eq!(kept, vec!["AAA", "BBB", "CCC"]);
    assert_eq!(results[0].price, 10.0);
    assert_eq!(results[1].percent_change, -2.0);
}

#[tokio::test]
async fn when_symbols_return_unusable_prices_only_they_are_dropped() {
    // Given: one good quote, one zero price, one missing price field, and
    // one negative price (which the lenient server rule keeps)
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(0.0, 0.0))
            .ok("symbol=CCC&", "{}")
            .ok("symbol=DDD&", &support::quote_body(-4.2, 0.3)),
    );
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB", "CCC", "DDD"],
        Duration::from_millis(1),
        Duration::from_secs(60),
    );

    // When
    refresher.run_cycle().await;

    // Then: N - K records, matching the usable symbols exactly
    let results = refresher.cache().results().await;
    let kept: Vec<&str> = results.iter().map(|row| row.symbol.as_str()).collect();
    assert_eq!(kept, vec!["AAA", "DDD"]);
    assert_eq!(results[1].price, -4.2);
    assert_eq!(http.request_count(), 4, "failed symbols are still attempted");
}

#[tokio::test]
async fn when_a_symbol_errors_the_cycle_continues_and_still_paces() {
    // Given: price 10.0 for AAA, an empty quote for BBB, a transport
    // failure for CCC
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(0.0, 0.0))
            .fail("symbol=CCC&"),
    );
    let spacing = Duration::from_millis(30);
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB", "CCC"],
        spacing,
        Duration::from_secs(60),
    );

    // When
    let start = Instant::now();
    refresher.run_cycle().await;
    let elapsed = start.elapsed();

    // Then: only the good row survives, and all three attempts were paced
    let results = refresher.cache().results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol.as_str(), "AAA");
    assert_eq!(results[0].price, 10.0);
    assert_eq!(results[0].percent_change, 1.0);
    assert_eq!(http.request_count(), 3);
    assert!(elapsed >= spacing * 2, "two inter-call delays expected");
}

#[tokio::test]
async fn when_the_cache_is_fresh_requests_are_served_without_upstream_calls() {
    // Given: a two-symbol universe and a generous staleness budget
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(20.0, 2.0)),
    );
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB"],
        Duration::from_millis(1),
        Duration::from_secs(60),
    );

    // When: two triggers arrive well inside the budget
    let first = refresher.ensure_fresh().await;
    let second = refresher.ensure_fresh().await;

    // Then: exactly one cycle ran
    assert_eq!(http.request_count(), 2);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn when_the_staleness_budget_expires_one_new_cycle_runs() {
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(20.0, 2.0)),
    );
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB"],
        Duration::from_millis(1),
        Duration::from_millis(20),
    );

    refresher.ensure_fresh().await;
    assert_eq!(http.request_count(), 2);

    // When: the budget lapses
    tokio::time::sleep(Duration::from_millis(40)).await;
    refresher.ensure_fresh().await;

    // Then: exactly one more full cycle
    assert_eq!(http.request_count(), 4);
}

#[tokio::test]
async fn when_concurrent_triggers_observe_a_stale_cache_they_coalesce() {
    // Given: a slow upstream, so the first cycle is still running when the
    // second trigger arrives
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .ok("symbol=BBB&", &support::quote_body(20.0, 2.0))
            .with_latency(Duration::from_millis(25)),
    );
    let refresher = Arc::new(refresher(
        http.clone(),
        &["AAA", "BBB"],
        Duration::from_millis(1),
        Duration::from_secs(60),
    ));

    // When: two triggers race
    let (first, second) = tokio::join!(refresher.ensure_fresh(), refresher.ensure_fresh());

    // Then: one cycle served both; upstream load was not multiplied
    assert_eq!(http.request_count(), 2, "at most one refresh cycle in flight");
    assert_eq!(http.peak_in_flight(), 1);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn each_cycle_replaces_the_result_set_wholesale() {
    // Given: BBB succeeds on the first cycle and goes dark on the second
    let http = Arc::new(
        ScriptedHttpClient::new()
            .ok("symbol=AAA&", &support::quote_body(10.0, 1.0))
            .on(
                "symbol=BBB&",
                vec![
                    Ok(quotedeck_core::HttpResponse::ok_json(support::quote_body(20.0, 2.0))),
                    Ok(quotedeck_core::HttpResponse::ok_json(support::quote_body(0.0, 0.0))),
                ],
            ),
    );
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB"],
        Duration::from_millis(1),
        Duration::ZERO,
    );

    refresher.run_cycle().await;
    assert_eq!(refresher.cache().results().await.len(), 2);

    // When: the next cycle sees BBB with no usable price
    refresher.run_cycle().await;

    // Then: the snapshot shrinks; nothing from the old cycle is merged in
    let results = refresher.cache().results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol.as_str(), "AAA");
}

#[tokio::test]
async fn duplicate_universe_entries_are_fetched_twice() {
    let http = Arc::new(
        ScriptedHttpClient::new().ok("symbol=AAA&", &support::quote_body(10.0, 1.0)),
    );
    let refresher = refresher(
        http.clone(),
        &["AAA", "AAA"],
        Duration::from_millis(1),
        Duration::from_secs(60),
    );

    refresher.run_cycle().await;

    assert_eq!(http.request_count(), 2);
    assert_eq!(refresher.cache().results().await.len(), 2);
}

#[tokio::test]
async fn a_total_outage_yields_an_empty_result_set_not_an_error() {
    let http = Arc::new(ScriptedHttpClient::new().status("quote", 502));
    let refresher = refresher(
        http.clone(),
        &["AAA", "BBB", "CCC"],
        Duration::from_millis(1),
        Duration::from_secs(60),
    );

    let results = refresher.ensure_fresh().await;

    assert!(results.is_empty());
    assert_eq!(http.request_count(), 3, "every symbol was still attempted");
}
