#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod factor;
pub mod panel;

pub use cache::PanelCache;
pub use error::{DataError, Result};
pub use factor::Factor;
pub use panel::BetaPanel;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
