//! Synthetic per-fund demo data shim.
//!
//! Disclosure feeds often cover only ARKK. This adapter wraps a base source
//! and fabricates plausible trade lists for the other five funds by
//! truncating and rescaling the ARKK data. It exists purely as a stand-in
//! for missing per-fund data and is opt-in from the CLI; the aggregation
//! core never depends on it.
//!
//! Fabrication is fully deterministic: fixed per-fund scale factors pick how
//! much of the base list each fund gets, and a fixed multiplier cycle varies
//! the market values. Same input, same output, every run.

use crate::domain::error::ArkflowError;
use crate::domain::fund::Fund;
use crate::domain::trade::Trade;
use crate::ports::trade_port::TradePort;

/// Fraction of the base trade list fabricated for each non-base fund.
const FUND_SCALE: [(Fund, f64); 5] = [
    (Fund::Arkw, 0.7),
    (Fund::Arkg, 0.5),
    (Fund::Arkq, 0.6),
    (Fund::Arkf, 0.4),
    (Fund::Arkx, 0.3),
];

/// Market-value multipliers cycled by trade index, spanning [0.8, 1.2].
const VALUE_CYCLE: [f64; 6] = [0.85, 1.1, 0.95, 1.2, 0.8, 1.05];

pub struct SyntheticTradeAdapter<P> {
    base: P,
}

impl<P: TradePort> SyntheticTradeAdapter<P> {
    pub fn new(base: P) -> Self {
        Self { base }
    }
}

impl<P: TradePort> TradePort for SyntheticTradeAdapter<P> {
    fn fetch_trades(&self) -> Result<Vec<Trade>, ArkflowError> {
        let base_trades = self.base.fetch_trades()?;
        let mut trades = base_trades.clone();

        for (fund, scale) in FUND_SCALE {
            let take = (base_trades.len() as f64 * scale).floor() as usize;
            for (i, base) in base_trades[..take].iter().enumerate() {
                let multiplier = VALUE_CYCLE[i % VALUE_CYCLE.len()];
                trades.push(Trade {
                    fund,
                    market_value: (base.market_value * multiplier).floor(),
                    ..base.clone()
                });
            }
        }

        Ok(trades)
    }
}
