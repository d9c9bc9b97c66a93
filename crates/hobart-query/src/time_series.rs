//! Trailing-window beta trends.

use crate::error::Result;
use crate::validate::ValidatedTickers;
use chrono::{Months, NaiveDate};
use hobart_data::{BetaPanel, Factor};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Trailing calendar window ending at a reference date.
///
/// The length is a calendar-year offset, not a fixed day count: subtracting
/// five years from 2024-06-01 gives 2019-06-01, and subtracting from a leap
/// day clamps to Feb 28 per standard calendar arithmetic. Both endpoints
/// are inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window length in calendar years.
    pub years: u32,

    /// Reference date the window ends at (inclusive).
    pub as_of: NaiveDate,
}

impl TimeWindow {
    /// Default window length for the rolling trend view.
    pub const DEFAULT_YEARS: u32 = 5;

    /// A window of `years` calendar years ending at `as_of`.
    pub const fn new(years: u32, as_of: NaiveDate) -> Self {
        Self { years, as_of }
    }

    /// First date inside the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.as_of - Months::new(self.years * 12)
    }

    /// Whether a date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.as_of
    }
}

/// A dated beta observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,

    /// Beta value.
    pub beta: f64,
}

/// Windowed observations for one ticker, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSeries {
    /// Ticker symbol.
    pub ticker: String,

    /// Present observations inside the window. Missing panel cells are
    /// excluded, so the series may be shorter than the window's row count.
    pub points: Vec<Observation>,
}

/// All windowed series for one factor, in validated-ticker order.
///
/// Tickers whose (ticker, factor) column is absent from the panel are
/// skipped entirely and do not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSeries {
    /// The factor.
    pub factor: Factor,

    /// Per-ticker series.
    pub series: Vec<TickerSeries>,
}

/// Rolling beta trends grouped by factor in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// The window every series is restricted to.
    pub window: TimeWindow,

    /// One group per factor, in canonical factor order.
    pub groups: Vec<FactorSeries>,
}

impl TimeSeries {
    /// Long-form frame with `date`, `ticker`, `factor`, and `beta` columns.
    ///
    /// # Errors
    ///
    /// Propagates frame-construction errors.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        let mut tickers: Vec<&str> = Vec::new();
        let mut factors: Vec<&str> = Vec::new();
        let mut betas: Vec<f64> = Vec::new();

        for group in &self.groups {
            for series in &group.series {
                for point in &series.points {
                    dates.push(point.date);
                    tickers.push(series.ticker.as_str());
                    factors.push(group.factor.label());
                    betas.push(point.beta);
                }
            }
        }

        let date_column = DateChunked::from_naive_date("date".into(), dates).into_series();
        let df = DataFrame::new(vec![
            date_column.into(),
            Series::new("ticker".into(), tickers).into(),
            Series::new("factor".into(), factors).into(),
            Series::new("beta".into(), betas).into(),
        ])?;
        Ok(df)
    }
}

/// Collect the rolling beta trend for each (factor, ticker) pair inside a
/// trailing window.
///
/// For each factor in canonical order and each validated ticker in input
/// order, the result holds the date-ascending observations with
/// `window.start() <= date <= window.as_of`. Pairs with no column in the
/// panel are silently skipped; missing cells inside an existing column are
/// excluded. Pure: no side effects, deterministic given its inputs.
pub fn time_series(
    panel: &BetaPanel,
    tickers: &ValidatedTickers,
    window: TimeWindow,
) -> TimeSeries {
    let groups = Factor::ALL
        .iter()
        .map(|&factor| {
            let series = tickers
                .iter()
                .filter_map(|ticker| {
                    let observations = panel.series(ticker, factor)?;
                    let points: Vec<Observation> = observations
                        .filter(|(date, _)| window.contains(*date))
                        .map(|(date, beta)| Observation { date, beta })
                        .collect();
                    Some(TickerSeries {
                        ticker: ticker.clone(),
                        points,
                    })
                })
                .collect();
            FactorSeries { factor, series }
        })
        .collect();

    TimeSeries { window, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use rstest::rstest;
    use std::io::Cursor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(2024, 6, 1, 2019, 6, 1)]
    #[case(2024, 2, 29, 2019, 2, 28)] // leap day clamps
    #[case(2020, 1, 1, 2015, 1, 1)]
    fn test_window_start(
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
        #[case] ey: i32,
        #[case] em: u32,
        #[case] ed: u32,
    ) {
        let window = TimeWindow::new(5, date(y, m, d));
        assert_eq!(window.start(), date(ey, em, ed));
    }

    #[test]
    fn test_window_endpoints_inclusive() {
        let window = TimeWindow::new(5, date(2024, 6, 1));
        assert!(window.contains(date(2019, 6, 1)));
        assert!(window.contains(date(2024, 6, 1)));
        assert!(!window.contains(date(2019, 5, 31)));
        assert!(!window.contains(date(2024, 6, 2)));
    }

    const SOURCE: &str = "\
,AAPL,AAPL,MSFT
,Mkt-RF,SMB,Mkt-RF
2018-12-31,1.00,-0.30,0.90
2019-06-30,1.02,-0.28,0.91
2021-06-30,1.05,,0.93
2024-05-31,1.10,-0.25,0.95
";

    fn sample() -> (BetaPanel, ValidatedTickers) {
        let panel = BetaPanel::from_reader(Cursor::new(SOURCE)).unwrap();
        let tickers = validate("AAPL,MSFT", &panel).unwrap();
        (panel, tickers)
    }

    #[test]
    fn test_window_filtering() {
        let (panel, tickers) = sample();
        let window = TimeWindow::new(5, date(2024, 6, 1));
        let trend = time_series(&panel, &tickers, window);

        let mkt = &trend.groups[0];
        assert_eq!(mkt.factor, Factor::MktRf);
        let aapl = &mkt.series[0];
        let dates: Vec<NaiveDate> = aapl.points.iter().map(|p| p.date).collect();
        // 2018-12-31 is outside the window.
        assert_eq!(
            dates,
            vec![date(2019, 6, 30), date(2021, 6, 30), date(2024, 5, 31)]
        );
    }

    #[test]
    fn test_absent_pairs_skipped_missing_cells_excluded() {
        let (panel, tickers) = sample();
        let window = TimeWindow::new(5, date(2024, 6, 1));
        let trend = time_series(&panel, &tickers, window);

        // MSFT has no SMB column: skipped, not empty.
        let smb = &trend.groups[1];
        assert_eq!(smb.factor, Factor::Smb);
        let names: Vec<&str> = smb.series.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(names, ["AAPL"]);

        // AAPL SMB has a missing cell at 2021-06-30: excluded from points.
        let aapl_smb = &smb.series[0];
        assert!(aapl_smb.points.iter().all(|p| p.date != date(2021, 6, 30)));

        // HML/CMA/RMW columns exist for neither ticker.
        assert!(trend.groups[2].series.is_empty());
        assert!(trend.groups[3].series.is_empty());
        assert!(trend.groups[4].series.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let (panel, tickers) = sample();
        let window = TimeWindow::new(5, date(2024, 6, 1));
        let a = time_series(&panel, &tickers, window);
        let b = time_series(&panel, &tickers, window);
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_frame_long_shape() {
        let (panel, tickers) = sample();
        let window = TimeWindow::new(10, date(2024, 6, 1));
        let frame = time_series(&panel, &tickers, window).to_frame().unwrap();

        assert_eq!(
            frame.get_column_names(),
            vec!["date", "ticker", "factor", "beta"]
        );
        // AAPL Mkt-RF: 4, AAPL SMB: 3 (one missing cell), MSFT Mkt-RF: 4.
        assert_eq!(frame.height(), 11);
    }
}
