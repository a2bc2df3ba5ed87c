//! Disclosed trade representation.

use crate::domain::error::ArkflowError;
use crate::domain::fund::Fund;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade side. Market values are unsigned; direction alone carries sign
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => f.write_str("BUY"),
            Direction::Sell => f.write_str("SELL"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Direction::Buy),
            "SELL" => Ok(Direction::Sell),
            other => Err(format!("direction must be BUY or SELL, got {other:?}")),
        }
    }
}

/// A single disclosed transaction. Immutable once built; the aggregator only
/// reads trades and derives new records from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub company_name: String,
    pub direction: Direction,
    pub market_value: f64,
    pub date: NaiveDate,
    pub fund: Fund,
}

impl Trade {
    /// Check record-level invariants: non-empty symbol, finite non-negative
    /// market value. Direction and fund are enums and cannot be malformed
    /// once a `Trade` exists.
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err("empty symbol".to_string());
        }
        if !self.market_value.is_finite() {
            return Err(format!(
                "market value for {} is not a finite number",
                self.symbol
            ));
        }
        if self.market_value < 0.0 {
            return Err(format!(
                "negative market value {} for {}",
                self.market_value, self.symbol
            ));
        }
        Ok(())
    }
}

/// Validate every record, failing on the first malformed one with its index.
/// Callers can then distinguish an empty portfolio from corrupt input.
pub fn validate_trades(trades: &[Trade]) -> Result<(), ArkflowError> {
    for (index, trade) in trades.iter().enumerate() {
        trade
            .validate()
            .map_err(|reason| ArkflowError::InvalidTrade { index, reason })?;
    }
    Ok(())
}
