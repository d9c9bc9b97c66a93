//! Parsing of the tabular beta source.
//!
//! The expected shape is the spreadsheet export the panel is distributed as:
//! two header rows (ticker level above factor level) and a leading column of
//! date row labels. Anything else fails fast with [`DataError::Format`]; no
//! partial panel is ever returned.

use super::BetaPanel;
use crate::error::{DataError, Result};
use crate::factor::Factor;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

impl BetaPanel {
    /// Load a panel from a CSV file on local storage.
    ///
    /// # Errors
    ///
    /// [`DataError::Io`] if the file cannot be opened, otherwise as
    /// [`from_reader`](Self::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a panel from any reader producing the two-header-row CSV shape.
    ///
    /// Rows are sorted ascending by date after parsing; blank ticker header
    /// cells inherit the ticker to their left (merged-cell convention);
    /// blank, `NaN`, and `null` value cells become missing observations.
    ///
    /// # Errors
    ///
    /// [`DataError::Format`] on any shape violation: a missing header row,
    /// ragged rows, a blank leading ticker, a factor label outside the fixed
    /// five, duplicate (ticker, factor) columns, duplicate dates, or cells
    /// that parse as neither a date nor a number where one is required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = csv_reader.records();

        let ticker_row = records
            .next()
            .ok_or_else(|| DataError::Format("missing ticker header row".to_string()))??;
        let factor_row = records
            .next()
            .ok_or_else(|| DataError::Format("missing factor header row".to_string()))??;

        if factor_row.len() != ticker_row.len() {
            return Err(DataError::Format(format!(
                "header rows disagree on width: {} ticker cells vs {} factor cells",
                ticker_row.len(),
                factor_row.len()
            )));
        }
        if ticker_row.len() < 2 {
            return Err(DataError::Format(
                "source has no (ticker, factor) columns".to_string(),
            ));
        }

        // Resolve the column axis. The first cell of both header rows is the
        // row-index label and is ignored.
        let mut keys: Vec<(String, Factor)> = Vec::new();
        let mut tickers: Vec<String> = Vec::new();
        let mut seen: HashSet<(String, Factor)> = HashSet::new();
        let mut current_ticker: Option<String> = None;

        for col in 1..ticker_row.len() {
            let label = ticker_row[col].trim();
            let ticker = if label.is_empty() {
                current_ticker.clone().ok_or_else(|| {
                    DataError::Format("blank ticker label in first data column".to_string())
                })?
            } else {
                label.to_string()
            };
            current_ticker = Some(ticker.clone());

            if !tickers.contains(&ticker) {
                tickers.push(ticker.clone());
            }

            let factor_label = factor_row[col].trim();
            let factor = Factor::from_label(factor_label).ok_or_else(|| {
                DataError::Format(format!(
                    "unknown factor label '{factor_label}' in column {col}"
                ))
            })?;

            if !seen.insert((ticker.clone(), factor)) {
                return Err(DataError::Format(format!(
                    "duplicate column ({ticker}, {factor})"
                )));
            }
            keys.push((ticker, factor));
        }

        // Parse the dated rows.
        let mut rows: Vec<(NaiveDate, Vec<Option<f64>>)> = Vec::new();
        for (row_idx, record) in records.enumerate() {
            let record = record?;
            if record.len() != ticker_row.len() {
                return Err(DataError::Format(format!(
                    "row {} has {} cells, expected {}",
                    row_idx + 3,
                    record.len(),
                    ticker_row.len()
                )));
            }

            let date = parse_date(record[0].trim())?;
            let mut values = Vec::with_capacity(keys.len());
            for cell in record.iter().skip(1) {
                values.push(parse_beta(cell)?);
            }
            rows.push((date, values));
        }

        rows.sort_by_key(|(date, _)| *date);
        for pair in rows.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(DataError::Format(format!(
                    "duplicate observation date {}",
                    pair[0].0
                )));
            }
        }

        // Transpose row-major values into per-column vectors.
        let dates: Vec<NaiveDate> = rows.iter().map(|(date, _)| *date).collect();
        let mut columns: HashMap<String, HashMap<Factor, Vec<Option<f64>>>> = HashMap::new();
        for (idx, (ticker, factor)) in keys.iter().enumerate() {
            let column: Vec<Option<f64>> = rows.iter().map(|(_, values)| values[idx]).collect();
            columns
                .entry(ticker.clone())
                .or_default()
                .insert(*factor, column);
        }

        Ok(Self {
            dates,
            tickers,
            columns,
        })
    }
}

fn parse_date(cell: &str) -> Result<NaiveDate> {
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return Ok(date);
        }
    }
    // Spreadsheet exports often carry a midnight timestamp on the index.
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(cell, format) {
            return Ok(datetime.date());
        }
    }
    Err(DataError::Format(format!(
        "cannot parse row label '{cell}' as a date"
    )))
}

fn parse_beta(cell: &str) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") || cell.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        DataError::Format(format!("cannot parse cell '{cell}' as a beta value"))
    })
}
