//! Ticker symbol validation.
//!
//! Exchange-listed tickers follow the B3 convention: 4-6 letters, 1-2
//! digits, and an optional trailing letter (PETR4, MXRF11, BBAS3F).
//! This is a pre-filter applied before any provider lookup - a symbol that
//! fails it is never sent over the wire.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SYMBOL_PATTERN: Regex =
        Regex::new(r"^[A-Z]{4,6}[0-9]{1,2}[A-Z]?$").expect("symbol pattern is valid");
}

/// Normalizes user input into lookup form: trimmed and uppercased.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Returns whether a ticker has a valid exchange shape after normalization.
pub fn is_valid_symbol(raw: &str) -> bool {
    SYMBOL_PATTERN.is_match(&normalize_symbol(raw))
}
