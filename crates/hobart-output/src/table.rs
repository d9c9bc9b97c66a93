//! Terminal and Markdown rendering of query results.
//!
//! Missing cells render as `-`, never as a zero.

use hobart_data::Factor;
use hobart_query::{CrossSection, TimeSeries};

/// Text rendering of a query result.
pub trait TextTable {
    /// Format as ASCII table for terminal display.
    fn to_ascii_table(&self) -> String;

    /// Format as Markdown for documentation.
    fn to_markdown(&self) -> String;
}

fn format_beta(beta: Option<f64>) -> String {
    beta.map_or_else(|| "-".to_string(), |value| format!("{value:.3}"))
}

/// Unique tickers of a cross-section in record order.
fn ticker_order(snapshot: &CrossSection) -> Vec<&str> {
    let mut tickers: Vec<&str> = Vec::new();
    for record in &snapshot.records {
        if !tickers.contains(&record.ticker.as_str()) {
            tickers.push(record.ticker.as_str());
        }
    }
    tickers
}

impl TextTable for CrossSection {
    fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nCross-Section Betas at {}\n", self.as_of));
        output.push_str(&"=".repeat(68));
        output.push('\n');

        output.push_str(&format!("{:<10}", "Ticker"));
        for factor in Factor::ALL {
            output.push_str(&format!("{:>11}", factor.label()));
        }
        output.push('\n');
        output.push_str(&"-".repeat(68));
        output.push('\n');

        for ticker in ticker_order(self) {
            output.push_str(&format!("{ticker:<10}"));
            for factor in Factor::ALL {
                let beta = self
                    .records
                    .iter()
                    .find(|record| record.ticker == ticker && record.factor == factor)
                    .and_then(|record| record.beta);
                output.push_str(&format!("{:>11}", format_beta(beta)));
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(68));
        output.push('\n');

        output
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Cross-Section Betas at {}\n\n", self.as_of));
        output.push_str("| Ticker | Mkt-RF | SMB | HML | CMA | RMW |\n");
        output.push_str("|--------|--------|-----|-----|-----|-----|\n");

        for ticker in ticker_order(self) {
            output.push_str(&format!("| {ticker} |"));
            for factor in Factor::ALL {
                let beta = self
                    .records
                    .iter()
                    .find(|record| record.ticker == ticker && record.factor == factor)
                    .and_then(|record| record.beta);
                output.push_str(&format!(" {} |", format_beta(beta)));
            }
            output.push('\n');
        }

        output
    }
}

impl TextTable for TimeSeries {
    fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}-Year Rolling Betas: {} to {}\n",
            self.window.years,
            self.window.start(),
            self.window.as_of
        ));
        output.push_str(&"=".repeat(68));
        output.push('\n');

        for group in &self.groups {
            output.push_str(&format!("\n{}\n", group.factor));
            output.push_str(&"-".repeat(68));
            output.push('\n');

            if group.series.is_empty() {
                output.push_str("  (no series in panel)\n");
                continue;
            }

            for series in &group.series {
                match (series.points.first(), series.points.last()) {
                    (Some(first), Some(last)) => {
                        output.push_str(&format!(
                            "  {:<8} {:>4} obs   {} to {}   last {:>8}\n",
                            series.ticker,
                            series.points.len(),
                            first.date,
                            last.date,
                            format_beta(Some(last.beta)),
                        ));
                    }
                    _ => {
                        output.push_str(&format!(
                            "  {:<8}    0 obs   (no observations in window)\n",
                            series.ticker
                        ));
                    }
                }
            }
        }

        output.push('\n');
        output.push_str(&"=".repeat(68));
        output.push('\n');

        output
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# {}-Year Rolling Betas: {} to {}\n\n",
            self.window.years,
            self.window.start(),
            self.window.as_of
        ));

        for group in &self.groups {
            output.push_str(&format!("## {}\n\n", group.factor));

            if group.series.is_empty() {
                output.push_str("No series in panel.\n\n");
                continue;
            }

            output.push_str("| Ticker | Observations | First | Last | Last Beta |\n");
            output.push_str("|--------|--------------|-------|------|-----------|\n");
            for series in &group.series {
                match (series.points.first(), series.points.last()) {
                    (Some(first), Some(last)) => {
                        output.push_str(&format!(
                            "| {} | {} | {} | {} | {} |\n",
                            series.ticker,
                            series.points.len(),
                            first.date,
                            last.date,
                            format_beta(Some(last.beta)),
                        ));
                    }
                    _ => {
                        output.push_str(&format!("| {} | 0 | - | - | - |\n", series.ticker));
                    }
                }
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hobart_data::BetaPanel;
    use hobart_query::{TimeWindow, cross_section, time_series, validate};
    use std::io::Cursor;

    const SOURCE: &str = "\
,AAPL,AAPL,MSFT
,Mkt-RF,SMB,Mkt-RF
2024-05-31,1.08,-0.24,0.94
2024-06-30,1.10,,0.95
";

    fn panel() -> BetaPanel {
        BetaPanel::from_reader(Cursor::new(SOURCE)).unwrap()
    }

    #[test]
    fn test_cross_section_ascii_table() {
        let panel = panel();
        let tickers = validate("AAPL,MSFT", &panel).unwrap();
        let table = cross_section(&panel, &tickers).unwrap().to_ascii_table();

        assert!(table.contains("Cross-Section Betas at 2024-06-30"));
        assert!(table.contains("AAPL"));
        assert!(table.contains("MSFT"));
        assert!(table.contains("1.100"));
        // AAPL SMB is missing at the latest date: a dash, not 0.000.
        assert!(!table.contains("0.000"));
    }

    #[test]
    fn test_cross_section_markdown() {
        let panel = panel();
        let tickers = validate("MSFT,AAPL", &panel).unwrap();
        let md = cross_section(&panel, &tickers).unwrap().to_markdown();

        assert!(md.contains("# Cross-Section Betas"));
        // Ticker order follows validated input order.
        let msft_pos = md.find("| MSFT |").unwrap();
        let aapl_pos = md.find("| AAPL |").unwrap();
        assert!(msft_pos < aapl_pos);
    }

    #[test]
    fn test_time_series_ascii_table() {
        let panel = panel();
        let tickers = validate("AAPL,MSFT", &panel).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let table = time_series(&panel, &tickers, TimeWindow::new(5, as_of)).to_ascii_table();

        assert!(table.contains("5-Year Rolling Betas"));
        assert!(table.contains("Mkt-RF"));
        // HML group exists for neither ticker.
        assert!(table.contains("(no series in panel)"));
        assert!(table.contains("2 obs"));
    }

    #[test]
    fn test_time_series_markdown() {
        let panel = panel();
        let tickers = validate("AAPL", &panel).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let md = time_series(&panel, &tickers, TimeWindow::new(5, as_of)).to_markdown();

        assert!(md.contains("## Mkt-RF"));
        assert!(md.contains("| AAPL | 2 |"));
        assert!(md.contains("No series in panel."));
    }
}
