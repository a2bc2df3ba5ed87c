#![allow(dead_code)]

use arkflow::domain::error::ArkflowError;
use arkflow::domain::fund::Fund;
pub use arkflow::domain::trade::{Direction, Trade};
use arkflow::ports::trade_port::TradePort;
use chrono::NaiveDate;

pub struct MockTradePort {
    pub trades: Vec<Trade>,
    pub error: Option<String>,
}

impl MockTradePort {
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            error: None,
        }
    }

    pub fn with_trades(mut self, trades: Vec<Trade>) -> Self {
        self.trades = trades;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradePort for MockTradePort {
    fn fetch_trades(&self) -> Result<Vec<Trade>, ArkflowError> {
        if let Some(reason) = &self.error {
            return Err(ArkflowError::DataSource {
                reason: reason.clone(),
            });
        }
        Ok(self.trades.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_trade(
    symbol: &str,
    direction: Direction,
    market_value: f64,
    day: &str,
    fund: Fund,
) -> Trade {
    Trade {
        symbol: symbol.to_string(),
        company_name: format!("{symbol} Inc"),
        direction,
        market_value,
        date: day.parse().unwrap(),
        fund,
    }
}

pub fn arkk_buy(symbol: &str, value: f64, day: &str) -> Trade {
    make_trade(symbol, Direction::Buy, value, day, Fund::Arkk)
}

pub fn arkk_sell(symbol: &str, value: f64, day: &str) -> Trade {
    make_trade(symbol, Direction::Sell, value, day, Fund::Arkk)
}
