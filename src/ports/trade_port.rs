//! Trade source port trait.
//!
//! The aggregation engine never fetches data itself; callers pull a trade
//! list through this port and pass it in explicitly.

use crate::domain::error::ArkflowError;
use crate::domain::fund::Fund;
use crate::domain::trade::Trade;

pub trait TradePort {
    /// All disclosed trades, in source order.
    fn fetch_trades(&self) -> Result<Vec<Trade>, ArkflowError>;

    /// Distinct funds present in the source, sorted by ticker.
    fn list_funds(&self) -> Result<Vec<Fund>, ArkflowError> {
        let trades = self.fetch_trades()?;
        let mut funds: Vec<Fund> = trades.iter().map(|t| t.fund).collect();
        funds.sort_by_key(|f| f.ticker());
        funds.dedup();
        Ok(funds)
    }
}
