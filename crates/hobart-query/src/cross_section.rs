//! Cross-sectional snapshot at the latest panel date.

use crate::error::Result;
use crate::validate::ValidatedTickers;
use chrono::NaiveDate;
use hobart_data::{BetaPanel, Factor};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One (ticker, factor) cell of a cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaRecord {
    /// Ticker symbol.
    pub ticker: String,

    /// Factor the beta is measured against.
    pub factor: Factor,

    /// Beta value; `None` when the panel has no observation for the cell.
    /// Missing cells are omitted downstream, never plotted as zero.
    pub beta: Option<f64>,
}

/// Cross-section of betas for a validated ticker set at a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// The snapshot date: the panel's latest observation date.
    pub as_of: NaiveDate,

    /// Ticker-major records: for each ticker, all five factors in
    /// canonical order. Always exactly `tickers × 5` entries.
    pub records: Vec<BetaRecord>,
}

impl CrossSection {
    /// Records regrouped factor-major for per-factor charting.
    ///
    /// Factor order is the canonical fixed order; ticker order within each
    /// group preserves the validated input order.
    pub fn by_factor(&self) -> Vec<(Factor, Vec<&BetaRecord>)> {
        Factor::ALL
            .iter()
            .map(|&factor| {
                let group = self
                    .records
                    .iter()
                    .filter(|record| record.factor == factor)
                    .collect();
                (factor, group)
            })
            .collect()
    }

    /// Long-form frame with `ticker`, `factor`, and `beta` columns, for
    /// downstream tabular display. Missing betas are null.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let tickers: Vec<&str> = self.records.iter().map(|r| r.ticker.as_str()).collect();
        let factors: Vec<&str> = self.records.iter().map(|r| r.factor.label()).collect();
        let betas: Vec<Option<f64>> = self.records.iter().map(|r| r.beta).collect();

        let df = DataFrame::new(vec![
            Series::new("ticker".into(), tickers).into(),
            Series::new("factor".into(), factors).into(),
            Series::new("beta".into(), betas).into(),
        ])?;
        Ok(df)
    }
}

/// Snapshot betas for every (ticker, factor) pair at the panel's latest
/// observation date.
///
/// Emits one record per ticker per factor, ticker-major in validated order.
/// A missing cell yields a record with `beta: None` rather than an error.
///
/// # Errors
///
/// Propagates [`hobart_data::DataError::EmptyPanel`] when the panel has no
/// dated rows.
pub fn cross_section(panel: &BetaPanel, tickers: &ValidatedTickers) -> Result<CrossSection> {
    let as_of = panel.latest_date()?;

    let mut records = Vec::with_capacity(tickers.len() * Factor::ALL.len());
    for ticker in tickers {
        for factor in Factor::ALL {
            records.push(BetaRecord {
                ticker: ticker.clone(),
                factor,
                beta: panel.value_at(as_of, ticker, factor),
            });
        }
    }

    Ok(CrossSection { as_of, records })
}
