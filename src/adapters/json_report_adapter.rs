//! JSON report adapter for machine consumption.

use crate::domain::aggregate::{FundSummary, GroupedTrade};
use crate::domain::error::ArkflowError;
use crate::ports::report_port::ReportPort;
use serde::Serialize;

pub struct JsonReportAdapter;

#[derive(Serialize)]
struct SummaryReport<'a> {
    fund: &'a str,
    #[serde(flatten)]
    summary: &'a FundSummary,
}

#[derive(Serialize)]
struct GroupedReport<'a> {
    fund: &'a str,
    grouped_trades: &'a [GroupedTrade],
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ArkflowError> {
    serde_json::to_string_pretty(value).map_err(|e| ArkflowError::Report {
        reason: e.to_string(),
    })
}

impl ReportPort for JsonReportAdapter {
    fn render_summary(&self, summary: &FundSummary, label: &str) -> Result<String, ArkflowError> {
        to_json(&SummaryReport {
            fund: label,
            summary,
        })
    }

    fn render_grouped(
        &self,
        groups: &[GroupedTrade],
        label: &str,
    ) -> Result<String, ArkflowError> {
        to_json(&GroupedReport {
            fund: label,
            grouped_trades: groups,
        })
    }
}
