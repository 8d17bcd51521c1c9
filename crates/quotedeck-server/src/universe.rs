use quotedeck_core::{parse_symbol_list, Symbol, ValidationError};

/// Default symbol universe served by the proxy: ten symbols from each of the
/// four sectors the dashboard shows by default.
pub const DEFAULT_SYMBOLS: [&str; 40] = [
    "AAPL", "MSFT", "GOOGL", "META", "NVDA", "AMD", "INTC", "ADBE", "CRM", "ORCL",
    "JPM", "BAC", "WFC", "C", "GS", "MS", "V", "MA", "AXP", "BLK",
    "JNJ", "UNH", "PFE", "ABBV", "TMO", "ABT", "MRK", "LLY", "BMY", "AMGN",
    "AMZN", "TSLA", "WMT", "TGT", "COST", "HD", "NKE", "SBUX", "MCD", "CMG",
];

pub fn default_universe() -> Vec<Symbol> {
    DEFAULT_SYMBOLS
        .iter()
        .map(|raw| Symbol::parse(raw).expect("default universe symbols are valid"))
        .collect()
}

/// Parses a configured universe override. Order is preserved and duplicates
/// are tolerated; an empty list is a configuration error.
pub fn parse_universe(raw: &str) -> Result<Vec<Symbol>, ValidationError> {
    parse_symbol_list(raw)
}
