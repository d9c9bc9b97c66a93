#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cross_section;
pub mod error;
pub mod time_series;
pub mod validate;

pub use cross_section::{BetaRecord, CrossSection, cross_section};
pub use error::{QueryError, Result};
pub use time_series::{FactorSeries, Observation, TickerSeries, TimeSeries, TimeWindow, time_series};
pub use validate::{MAX_TICKERS, ValidatedTickers, validate};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
