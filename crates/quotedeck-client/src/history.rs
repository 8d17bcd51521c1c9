//! Synthetic price history for charts with no candle data.

use time::OffsetDateTime;

/// Synthesizes a closing-price series of `days + 1` points ending at the
/// most recent value, drifting up to ±2% per step from `current_price`.
/// Purely cosmetic filler, rounded to cents.
pub fn generate_history(current_price: f64, days: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(days + 1);
    let mut price = current_price;

    for _ in 0..=days {
        let drift = (fastrand::f64() - 0.5) * 0.04;
        price *= 1.0 + drift;
        series.push((price * 100.0).round() / 100.0);
    }

    // generated newest-first; charts want oldest-first
    series.reverse();
    series
}

/// Date labels matching [`generate_history`]: one per day, oldest first,
/// ending today (UTC).
pub fn history_dates(days: usize) -> Vec<String> {
    let today = OffsetDateTime::now_utc().date();

    (0..=days)
        .rev()
        .map(|offset| {
            let date = today - time::Duration::days(offset as i64);
            format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
        })
        .collect()
}
