//! Fama-French 5-factor definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Fama-French factors.
///
/// The variant order is the canonical display order used throughout the
/// panel, the queries, and the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    /// Market excess return
    #[serde(rename = "Mkt-RF")]
    MktRf,

    /// Small-minus-big (size)
    #[serde(rename = "SMB")]
    Smb,

    /// High-minus-low (value)
    #[serde(rename = "HML")]
    Hml,

    /// Conservative-minus-aggressive (investment)
    #[serde(rename = "CMA")]
    Cma,

    /// Robust-minus-weak (profitability)
    #[serde(rename = "RMW")]
    Rmw,
}

impl Factor {
    /// All five factors in canonical order.
    pub const ALL: [Self; 5] = [Self::MktRf, Self::Smb, Self::Hml, Self::Cma, Self::Rmw];

    /// Returns the column label used by the panel source.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MktRf => "Mkt-RF",
            Self::Smb => "SMB",
            Self::Hml => "HML",
            Self::Cma => "CMA",
            Self::Rmw => "RMW",
        }
    }

    /// Parse a factor from its column label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Mkt-RF" => Some(Self::MktRf),
            "SMB" => Some(Self::Smb),
            "HML" => Some(Self::Hml),
            "CMA" => Some(Self::Cma),
            "RMW" => Some(Self::Rmw),
            _ => None,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
