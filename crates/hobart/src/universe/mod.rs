//! Reference ticker universe for the beta dashboard.
//!
//! This module provides the directory of known companies used to help users
//! pick tickers: display names paired with the market identifiers the panel
//! source quotes them under.

pub mod directory;

pub use directory::{Company, TickerDirectory, correct_symbol};

/// Trait for ticker universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().contains(&symbol.to_string())
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for TickerDirectory {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_trait() {
        let directory = TickerDirectory::sp500();

        assert!(directory.contains("AAPL"));
        assert!(!directory.contains("NOTREAL"));
        assert!(directory.size() >= 100);
    }
}
