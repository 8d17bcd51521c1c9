mod models;
mod symbol;

pub use models::{CandlePoint, StockQuote};
pub use symbol::{parse_symbol_list, Symbol};
