//! Ticker validation against a loaded panel.

use crate::error::{QueryError, Result};
use hobart_data::BetaPanel;

/// Maximum number of tickers taken from one input string.
pub const MAX_TICKERS: usize = 10;

/// Ordered working set of validated tickers.
///
/// Every element is guaranteed to be present as a column group on the
/// panel the set was validated against. Order follows the user's input;
/// repeated input symbols are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTickers(Vec<String>);

impl ValidatedTickers {
    /// The validated symbols, in input order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the validated symbols.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of validated symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty. Never true for a set produced by
    /// [`validate`]; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ValidatedTickers {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turn a free-text comma-separated ticker string into a validated set.
///
/// Tokens are trimmed and upper-cased; only the first [`MAX_TICKERS`] comma
/// tokens are considered, extras are silently dropped. Truncation happens
/// BEFORE the existence filter, so unknown symbols inside the first ten
/// consume slots. The surviving tokens are filtered to those present on
/// `panel`'s ticker axis, preserving relative order and any repetition the
/// input contains.
///
/// # Errors
///
/// [`QueryError::NoValidTickers`] when nothing survives the filter.
pub fn validate(raw_input: &str, panel: &BetaPanel) -> Result<ValidatedTickers> {
    let tickers: Vec<String> = raw_input
        .split(',')
        .take(MAX_TICKERS)
        .map(|token| token.trim().to_uppercase())
        .filter(|token| panel.contains_ticker(token))
        .collect();

    if tickers.is_empty() {
        return Err(QueryError::NoValidTickers);
    }
    Ok(ValidatedTickers(tickers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn panel_with(tickers: &[&str]) -> BetaPanel {
        let ticker_row: Vec<String> = tickers.iter().map(|t| t.to_string()).collect();
        let factor_row: Vec<&str> = tickers.iter().map(|_| "Mkt-RF").collect();
        let values: Vec<&str> = tickers.iter().map(|_| "1.0").collect();
        let source = format!(
            ",{}\n,{}\n2024-06-30,{}\n",
            ticker_row.join(","),
            factor_row.join(","),
            values.join(",")
        );
        BetaPanel::from_reader(Cursor::new(source)).unwrap()
    }

    #[rstest]
    #[case("aapl, msft", &["AAPL", "MSFT"])]
    #[case(" AAPL ,ZZZZ, msft ", &["AAPL", "MSFT"])]
    #[case("msft,aapl", &["MSFT", "AAPL"])]
    #[case("aapl,aapl", &["AAPL", "AAPL"])]
    fn test_normalization_order_and_repeats(#[case] input: &str, #[case] expected: &[&str]) {
        let panel = panel_with(&["AAPL", "MSFT"]);
        let validated = validate(input, &panel).unwrap();
        assert_eq!(validated.as_slice(), expected);
    }

    #[test]
    fn test_truncation_happens_before_existence_filter() {
        // Twelve tokens; only "A" exists. Tokens K and L fall outside the
        // first ten and never get a chance to match.
        let panel = panel_with(&["A", "K", "L"]);
        let validated = validate("A,B,C,D,E,F,G,H,I,J,K,L", &panel).unwrap();
        assert_eq!(validated.as_slice(), ["A"]);
    }

    #[test]
    fn test_at_most_ten_tickers() {
        let symbols = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        let panel = panel_with(&symbols);
        let validated = validate(&symbols.join(","), &panel).unwrap();
        assert_eq!(validated.len(), MAX_TICKERS);
        assert_eq!(validated.as_slice()[9], "J");
    }

    #[test]
    fn test_every_result_is_on_the_panel() {
        let panel = panel_with(&["AAPL", "MSFT"]);
        let validated = validate("aapl,GOOG,msft,TSLA", &panel).unwrap();
        for ticker in &validated {
            assert!(panel.contains_ticker(ticker));
        }
    }

    #[test]
    fn test_no_valid_tickers_is_an_error_not_an_empty_set() {
        let panel = panel_with(&["AAPL"]);
        let result = validate("ZZZ,YYY", &panel);
        assert!(matches!(result, Err(QueryError::NoValidTickers)));
    }

    #[test]
    fn test_empty_input() {
        let panel = panel_with(&["AAPL"]);
        assert!(matches!(
            validate("", &panel),
            Err(QueryError::NoValidTickers)
        ));
    }

    #[test]
    fn test_empty_tokens_consume_slots() {
        // Nine empty tokens push MSFT past the truncation window.
        let panel = panel_with(&["AAPL", "MSFT"]);
        let validated = validate("aapl,,,,,,,,,,MSFT", &panel).unwrap();
        assert_eq!(validated.as_slice(), ["AAPL"]);
    }
}
