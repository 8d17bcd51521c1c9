//! Static sector classification for dashboard grouping.

use crate::Symbol;

const SECTOR_TABLE: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["AAPL", "MSFT", "GOOGL", "META", "NVDA", "AMD", "INTC", "ADBE", "CRM", "ORCL"],
    ),
    (
        "Financial",
        &["JPM", "BAC", "WFC", "C", "GS", "MS", "V", "MA", "AXP", "BLK"],
    ),
    (
        "Healthcare",
        &["JNJ", "UNH", "PFE", "ABBV", "TMO", "ABT", "MRK", "LLY", "BMY", "AMGN"],
    ),
    (
        "Consumer",
        &["AMZN", "TSLA", "WMT", "TGT", "COST", "HD", "NKE", "SBUX", "MCD", "CMG"],
    ),
    (
        "Energy",
        &["XOM", "CVX", "COP", "SLB", "EOG", "PSX", "VLO", "MPC", "OXY", "HAL"],
    ),
    (
        "Industrials",
        &["BA", "CAT", "GE", "MMM", "HON", "UPS", "FDX", "LMT", "RTX", "NOC"],
    ),
    (
        "Communication",
        &["DIS", "NFLX", "CMCSA", "T", "VZ", "TMUS", "CHTR", "PARA"],
    ),
    (
        "Materials",
        &["LIN", "APD", "ECL", "SHW", "DD", "NEM", "FCX", "GOLD", "NUE"],
    ),
    (
        "Real Estate",
        &["AMT", "PLD", "CCI", "EQIX", "PSA", "SPG", "O", "WELL", "DLR"],
    ),
    (
        "Utilities",
        &["NEE", "DUK", "SO", "D", "AEP", "EXC", "XEL", "ES", "ED"],
    ),
];

/// Looks up the sector for a symbol; unclassified symbols map to `"Other"`.
pub fn sector_for(symbol: &Symbol) -> &'static str {
    SECTOR_TABLE
        .iter()
        .find(|(_, members)| members.contains(&symbol.as_str()))
        .map(|(sector, _)| *sector)
        .unwrap_or("Other")
}
