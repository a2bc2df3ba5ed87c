//! CSV disclosure file adapter.
//!
//! Reads trade disclosures from a CSV with the header
//! `symbol,company_name,direction,market_value,date,fund`. Rows are returned
//! in file order; any malformed row aborts the read with a descriptive error
//! rather than being coerced or skipped.

use crate::domain::error::ArkflowError;
use crate::domain::fund::Fund;
use crate::domain::trade::{Direction, Trade};
use crate::ports::trade_port::TradePort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvTradeAdapter {
    path: PathBuf,
}

impl CsvTradeAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
    row: usize,
) -> Result<&'a str, ArkflowError> {
    record.get(index).ok_or_else(|| ArkflowError::DataSource {
        reason: format!("row {row}: missing {name} column"),
    })
}

impl TradePort for CsvTradeAdapter {
    fn fetch_trades(&self) -> Result<Vec<Trade>, ArkflowError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ArkflowError::DataSource {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut trades = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            // Header is row 1; first record is row 2.
            let row = i + 2;
            let record = result.map_err(|e| ArkflowError::DataSource {
                reason: format!("row {row}: CSV parse error: {e}"),
            })?;

            let symbol = field(&record, 0, "symbol", row)?.trim().to_string();
            if symbol.is_empty() {
                return Err(ArkflowError::DataSource {
                    reason: format!("row {row}: empty symbol"),
                });
            }

            let company_name = field(&record, 1, "company_name", row)?.trim().to_string();

            let direction: Direction = field(&record, 2, "direction", row)?
                .parse()
                .map_err(|e| ArkflowError::DataSource {
                    reason: format!("row {row}: {e}"),
                })?;

            let market_value: f64 = field(&record, 3, "market_value", row)?
                .trim()
                .parse()
                .map_err(|e| ArkflowError::DataSource {
                    reason: format!("row {row}: invalid market value: {e}"),
                })?;
            if !market_value.is_finite() || market_value < 0.0 {
                return Err(ArkflowError::DataSource {
                    reason: format!("row {row}: market value must be non-negative"),
                });
            }

            let date = NaiveDate::parse_from_str(field(&record, 4, "date", row)?.trim(), "%Y-%m-%d")
                .map_err(|e| ArkflowError::DataSource {
                    reason: format!("row {row}: invalid date (expected YYYY-MM-DD): {e}"),
                })?;

            let fund: Fund =
                field(&record, 5, "fund", row)?
                    .parse()
                    .map_err(|e| ArkflowError::DataSource {
                        reason: format!("row {row}: {e}"),
                    })?;

            trades.push(Trade {
                symbol,
                company_name,
                direction,
                market_value,
                date,
                fund,
            });
        }

        Ok(trades)
    }
}
