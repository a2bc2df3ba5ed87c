//! Plain-text table report adapter.
//!
//! Renders summaries and per-symbol groupings as fixed-width tables with
//! market values shown in millions, matching the dashboard convention
//! (`$12.5M`, net flows signed).

use crate::domain::aggregate::{FundSummary, GroupedTrade};
use crate::domain::error::ArkflowError;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

/// `$12.5M` — value in millions, one decimal.
pub fn millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// Like [`millions`] but with an explicit sign, for net flows.
fn millions_signed(value: f64) -> String {
    if value < 0.0 {
        format!("-{}", millions(-value))
    } else {
        format!("+{}", millions(value))
    }
}

impl ReportPort for TextReportAdapter {
    fn render_summary(&self, summary: &FundSummary, label: &str) -> Result<String, ArkflowError> {
        let mut out = String::new();
        out.push_str(&format!("{label} trade summary\n"));
        out.push_str(&format!("  bought:   {}\n", millions(summary.total_buy_value)));
        out.push_str(&format!("  sold:     {}\n", millions(summary.total_sell_value)));
        out.push_str(&format!("  net flow: {}\n", millions_signed(summary.net_flow)));
        out.push_str(&format!("  trades:   {}\n", summary.trades.len()));

        if !summary.top_trades.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "  {:<8} {:<30} {:<4} {:>10} {:>12}\n",
                "SYMBOL", "COMPANY", "SIDE", "VALUE", "DATE"
            ));
            for trade in &summary.top_trades {
                out.push_str(&format!(
                    "  {:<8} {:<30} {:<4} {:>10} {:>12}\n",
                    trade.symbol,
                    trade.company_name,
                    trade.direction.to_string(),
                    millions(trade.market_value),
                    trade.date.to_string()
                ));
            }
        }

        Ok(out)
    }

    fn render_grouped(
        &self,
        groups: &[GroupedTrade],
        label: &str,
    ) -> Result<String, ArkflowError> {
        let mut out = String::new();
        out.push_str(&format!("{label} positions by net value\n"));
        out.push_str(&format!(
            "  {:<8} {:<30} {:>10} {:>10} {:>10} {:>7} {:>12}\n",
            "SYMBOL", "COMPANY", "BOUGHT", "SOLD", "NET", "TRADES", "LATEST"
        ));
        for group in groups {
            out.push_str(&format!(
                "  {:<8} {:<30} {:>10} {:>10} {:>10} {:>7} {:>12}\n",
                group.symbol,
                group.company_name,
                millions(group.total_buy_value),
                millions(group.total_sell_value),
                millions_signed(group.net_value),
                group.trades.len(),
                group.latest_trade_date.to_string()
            ));
        }
        Ok(out)
    }
}
