use time::OffsetDateTime;

use quotedeck_core::{CandlePoint, CandleResolution, FinnhubClient, Symbol};

/// A tier is good enough once it yields this many points.
const MIN_CHART_POINTS: usize = 5;

const DAY_SECONDS: i64 = 60 * 60 * 24;

/// Fallback ladder: prefer fine-grained intraday data, degrade to daily bars.
const TIERS: [(CandleResolution, i64); 3] = [
    (CandleResolution::FiveMinute, DAY_SECONDS),
    (CandleResolution::FifteenMinute, 2 * DAY_SECONDS),
    (CandleResolution::Daily, 35 * DAY_SECONDS),
];

/// Fetches chart points for one symbol, trying progressively coarser
/// resolution/lookback tiers in strict order and returning the first that
/// yields at least [`MIN_CHART_POINTS`].
///
/// A tier's transport or decode failure counts as zero points and fallback
/// continues. When every tier falls short, the last tier's output is
/// returned as-is, even when empty — insufficient data is degradation, not
/// an error.
pub async fn fetch_chart(client: &FinnhubClient, symbol: &Symbol) -> Vec<CandlePoint> {
    let to = OffsetDateTime::now_utc().unix_timestamp();

    let mut points = Vec::new();
    for (resolution, lookback) in TIERS {
        points = match client.candles(symbol, resolution, to - lookback, to).await {
            Ok(points) => points,
            Err(error) => {
                tracing::debug!(
                    %symbol,
                    resolution = resolution.as_str(),
                    %error,
                    "candle tier failed, falling back"
                );
                Vec::new()
            }
        };
        if points.len() >= MIN_CHART_POINTS {
            return points;
        }
    }
    points
}
