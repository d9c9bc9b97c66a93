//! Export of query results to CSV and JSON.

use chrono::NaiveDate;
use hobart_query::{CrossSection, TimeSeries};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting query results in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Flattened cross-section cell for CSV export.
#[derive(Debug, Serialize)]
struct CrossSectionRow<'a> {
    date: NaiveDate,
    ticker: &'a str,
    factor: &'a str,
    beta: Option<f64>,
}

impl Exporter for CrossSection {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for record in &self.records {
                    wtr.serialize(CrossSectionRow {
                        date: self.as_of,
                        ticker: &record.ticker,
                        factor: record.factor.label(),
                        beta: record.beta,
                    })?;
                }
                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Flattened time-series observation for CSV export.
#[derive(Debug, Serialize)]
struct TimeSeriesRow<'a> {
    factor: &'a str,
    ticker: &'a str,
    date: NaiveDate,
    beta: f64,
}

impl Exporter for TimeSeries {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for group in &self.groups {
                    for series in &group.series {
                        for point in &series.points {
                            wtr.serialize(TimeSeriesRow {
                                factor: group.factor.label(),
                                ticker: &series.ticker,
                                date: point.date,
                                beta: point.beta,
                            })?;
                        }
                    }
                }
                let data =
                    String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?).unwrap();
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::BetaPanel;
    use hobart_query::{TimeWindow, cross_section, time_series, validate};
    use rstest::rstest;
    use std::io::Cursor;

    const SOURCE: &str = "\
,AAPL,AAPL,MSFT
,Mkt-RF,SMB,Mkt-RF
2024-05-31,1.08,-0.24,0.94
2024-06-30,1.10,,0.95
";

    fn sample_cross_section() -> CrossSection {
        let panel = BetaPanel::from_reader(Cursor::new(SOURCE)).unwrap();
        let tickers = validate("AAPL,MSFT", &panel).unwrap();
        cross_section(&panel, &tickers).unwrap()
    }

    fn sample_time_series() -> TimeSeries {
        let panel = BetaPanel::from_reader(Cursor::new(SOURCE)).unwrap();
        let tickers = validate("AAPL,MSFT", &panel).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        time_series(&panel, &tickers, TimeWindow::new(5, as_of))
    }

    #[test]
    fn test_cross_section_csv() {
        let csv_data = sample_cross_section()
            .export_to_string(ExportFormat::Csv)
            .unwrap();

        let lines: Vec<&str> = csv_data.trim_end().lines().collect();
        // Header plus 2 tickers x 5 factors.
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "date,ticker,factor,beta");
        assert_eq!(lines[1], "2024-06-30,AAPL,Mkt-RF,1.1");
        // Missing beta exports as an empty field, not a zero.
        assert_eq!(lines[2], "2024-06-30,AAPL,SMB,");
    }

    #[test]
    fn test_cross_section_json_round_trip() {
        let snapshot = sample_cross_section();
        let json = snapshot.export_to_string(ExportFormat::Json).unwrap();
        let back: CrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert!(json.contains("\"Mkt-RF\""));
        assert!(json.contains("null"));
    }

    #[test]
    fn test_time_series_csv() {
        let csv_data = sample_time_series()
            .export_to_string(ExportFormat::Csv)
            .unwrap();

        let lines: Vec<&str> = csv_data.trim_end().lines().collect();
        assert_eq!(lines[0], "factor,ticker,date,beta");
        // AAPL Mkt-RF 2, AAPL SMB 1 (one missing cell), MSFT Mkt-RF 2.
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().skip(1).all(|line| !line.ends_with(',')));
    }

    #[test]
    fn test_pretty_json_is_json() {
        let trend = sample_time_series();
        let pretty = trend.export_to_string(ExportFormat::PrettyJson).unwrap();
        let back: TimeSeries = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, trend);
    }

    #[rstest]
    #[case(ExportFormat::Csv, "csv")]
    #[case(ExportFormat::Json, "json")]
    #[case(ExportFormat::PrettyJson, "json")]
    fn test_extension(#[case] format: ExportFormat, #[case] expected: &str) {
        assert_eq!(format.extension(), expected);
    }
}
