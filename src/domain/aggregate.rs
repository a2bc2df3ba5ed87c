//! The trade aggregation engine.
//!
//! Stateless, synchronous pure transforms over an in-memory trade list:
//! per-symbol grouping with running totals, fund-level summaries, and ranked
//! top-N views. Every call recomputes from scratch; inputs are never mutated
//! or retained.

use crate::domain::error::ArkflowError;
use crate::domain::fund::FundFilter;
use crate::domain::trade::{validate_trades, Direction, Trade};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Number of trades in a summary's top-N view.
pub const TOP_TRADES_LEN: usize = 10;

/// All trades sharing one ticker symbol, with buy/sell totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTrade {
    pub symbol: String,
    pub company_name: String,
    /// Constituent trades, most recent first.
    pub trades: Vec<Trade>,
    pub total_buy_value: f64,
    pub total_sell_value: f64,
    /// Buy total minus sell total. Positive means net accumulation.
    pub net_value: f64,
    pub latest_trade_date: NaiveDate,
}

/// Aggregate view over one fund's trades (or the union of all funds).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundSummary {
    pub total_buy_value: f64,
    pub total_sell_value: f64,
    /// Buy total minus sell total, signed.
    pub net_flow: f64,
    /// All input trades, largest market value first.
    pub trades: Vec<Trade>,
    /// Per-symbol groups, largest `|net_value|` first.
    pub grouped_trades: Vec<GroupedTrade>,
    /// The first `min(10, len)` of `trades`.
    pub top_trades: Vec<Trade>,
}

/// Partition `trades` by symbol and accumulate buy/sell totals per group.
///
/// Group order is by `|net_value|` descending; ties keep first-encounter
/// order, so identical input always yields identical output. Each group's
/// trades are sorted date-descending. Empty input yields an empty vec.
pub fn group_by_symbol(trades: &[Trade]) -> Result<Vec<GroupedTrade>, ArkflowError> {
    validate_trades(trades)?;

    let mut groups: Vec<GroupedTrade> = Vec::new();
    let mut index_by_symbol: HashMap<String, usize> = HashMap::new();

    for trade in trades {
        let idx = match index_by_symbol.get(&trade.symbol) {
            Some(&idx) => idx,
            None => {
                index_by_symbol.insert(trade.symbol.clone(), groups.len());
                groups.push(GroupedTrade {
                    symbol: trade.symbol.clone(),
                    company_name: trade.company_name.clone(),
                    trades: Vec::new(),
                    total_buy_value: 0.0,
                    total_sell_value: 0.0,
                    net_value: 0.0,
                    latest_trade_date: trade.date,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        group.trades.push(trade.clone());
        match trade.direction {
            Direction::Buy => group.total_buy_value += trade.market_value,
            Direction::Sell => group.total_sell_value += trade.market_value,
        }
        group.net_value = group.total_buy_value - group.total_sell_value;
        if trade.date > group.latest_trade_date {
            group.latest_trade_date = trade.date;
        }
    }

    for group in &mut groups {
        group.trades.sort_by(|a, b| b.date.cmp(&a.date));
    }
    groups.sort_by(|a, b| b.net_value.abs().total_cmp(&a.net_value.abs()));

    Ok(groups)
}

/// Compute the full summary for a trade list: direction totals, net flow,
/// value-ranked trades, top-N, and the per-symbol grouping.
pub fn summarize(trades: &[Trade]) -> Result<FundSummary, ArkflowError> {
    validate_trades(trades)?;

    let mut total_buy_value = 0.0;
    let mut total_sell_value = 0.0;
    for trade in trades {
        match trade.direction {
            Direction::Buy => total_buy_value += trade.market_value,
            Direction::Sell => total_sell_value += trade.market_value,
        }
    }

    let mut sorted = trades.to_vec();
    sorted.sort_by(|a, b| b.market_value.total_cmp(&a.market_value));
    let top_trades = sorted[..sorted.len().min(TOP_TRADES_LEN)].to_vec();

    let grouped_trades = group_by_symbol(trades)?;

    Ok(FundSummary {
        total_buy_value,
        total_sell_value,
        net_flow: total_buy_value - total_sell_value,
        trades: sorted,
        grouped_trades,
        top_trades,
    })
}

/// Keep the trades whose fund matches `filter`, preserving input order.
/// `FundFilter::All` returns the whole list. Unknown fund identifiers are
/// rejected earlier, when parsing the filter.
pub fn filter_by_fund(trades: &[Trade], filter: FundFilter) -> Vec<Trade> {
    trades
        .iter()
        .filter(|t| filter.matches(t.fund))
        .cloned()
        .collect()
}
