//! The immutable beta panel.
//!
//! A [`BetaPanel`] is conceptually a three-dimensional table: one row per
//! observation date, with a two-level column axis of (ticker, factor). It is
//! built once from a tabular source and exposes read-only access for the
//! lifetime of the session; there is no mutation API.

mod loader;

use crate::error::{DataError, Result};
use crate::factor::Factor;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Immutable panel of factor betas indexed by date, ticker, and factor.
///
/// Internally each present (ticker, factor) pair owns one column vector
/// aligned with the date axis; an absent cell is `None`. Tickers keep the
/// first-appearance order of the source columns, dates are unique and
/// strictly increasing.
///
/// Equality is value equality, so two loads of identical sources compare
/// equal even though they are distinct allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaPanel {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    columns: HashMap<String, HashMap<Factor, Vec<Option<f64>>>>,
}

impl BetaPanel {
    /// Observation dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Tickers present in the panel, in first-appearance order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Whether a ticker appears as a column group.
    pub fn contains_ticker(&self, ticker: &str) -> bool {
        self.columns.contains_key(ticker)
    }

    /// The most recent observation date.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyPanel`] if the panel has zero dated rows.
    pub fn latest_date(&self) -> Result<NaiveDate> {
        self.dates.last().copied().ok_or(DataError::EmptyPanel)
    }

    /// The beta at (date, ticker, factor), or `None` if no observation
    /// exists for that combination.
    ///
    /// Unknown dates, tickers, and factors are not errors; they are simply
    /// missing.
    pub fn value_at(&self, date: NaiveDate, ticker: &str, factor: Factor) -> Option<f64> {
        let row = self.dates.binary_search(&date).ok()?;
        self.columns.get(ticker)?.get(&factor)?[row]
    }

    /// Whether the (ticker, factor) column exists in the panel.
    pub fn has_series(&self, ticker: &str, factor: Factor) -> bool {
        self.columns
            .get(ticker)
            .is_some_and(|factors| factors.contains_key(&factor))
    }

    /// Date-ascending present observations for one (ticker, factor) column.
    ///
    /// Returns `None` if the column does not exist; missing cells within an
    /// existing column are skipped.
    pub fn series<'a>(
        &'a self,
        ticker: &str,
        factor: Factor,
    ) -> Option<impl Iterator<Item = (NaiveDate, f64)> + 'a> {
        let column = self.columns.get(ticker)?.get(&factor)?;
        Some(
            self.dates
                .iter()
                .zip(column.iter())
                .filter_map(|(date, value)| value.map(|beta| (*date, beta))),
        )
    }
}
