//! The closed set of tracked ARK funds and the fund-scoped query filter.

use crate::domain::error::ArkflowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six tracked ARK ETFs. The set is closed: disclosure data for
/// any other ticker is rejected at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fund {
    Arkk,
    Arkw,
    Arkg,
    Arkq,
    Arkf,
    Arkx,
}

impl Fund {
    pub const ALL: [Fund; 6] = [
        Fund::Arkk,
        Fund::Arkw,
        Fund::Arkg,
        Fund::Arkq,
        Fund::Arkf,
        Fund::Arkx,
    ];

    pub fn ticker(&self) -> &'static str {
        match self {
            Fund::Arkk => "ARKK",
            Fund::Arkw => "ARKW",
            Fund::Arkg => "ARKG",
            Fund::Arkq => "ARKQ",
            Fund::Arkf => "ARKF",
            Fund::Arkx => "ARKX",
        }
    }

    /// Official ETF display name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Fund::Arkk => "ARK Innovation ETF",
            Fund::Arkw => "ARK Next Generation Internet ETF",
            Fund::Arkg => "ARK Genomic Revolution ETF",
            Fund::Arkq => "ARK Autonomous Technology & Robotics ETF",
            Fund::Arkf => "ARK Fintech Innovation ETF",
            Fund::Arkx => "ARK Space Exploration & Innovation ETF",
        }
    }
}

impl fmt::Display for Fund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Fund {
    type Err = ArkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARKK" => Ok(Fund::Arkk),
            "ARKW" => Ok(Fund::Arkw),
            "ARKG" => Ok(Fund::Arkg),
            "ARKQ" => Ok(Fund::Arkq),
            "ARKF" => Ok(Fund::Arkf),
            "ARKX" => Ok(Fund::Arkx),
            other => Err(ArkflowError::UnknownFund(other.to_string())),
        }
    }
}

/// Fund scope for a query: a single fund or the union of all six.
///
/// The "all funds" case is a distinct variant rather than a magic ticker, so
/// an unknown identifier can never be confused with a valid empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundFilter {
    Fund(Fund),
    All,
}

impl FundFilter {
    pub fn matches(&self, fund: Fund) -> bool {
        match self {
            FundFilter::Fund(f) => *f == fund,
            FundFilter::All => true,
        }
    }
}

impl fmt::Display for FundFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundFilter::Fund(fund) => fund.fmt(f),
            FundFilter::All => f.write_str("ALL"),
        }
    }
}

impl FromStr for FundFilter {
    type Err = ArkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" | "COMBINED" => Ok(FundFilter::All),
            other => Ok(FundFilter::Fund(other.parse()?)),
        }
    }
}
