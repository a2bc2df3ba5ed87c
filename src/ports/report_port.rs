//! Report rendering port trait.

use crate::domain::aggregate::{FundSummary, GroupedTrade};
use crate::domain::error::ArkflowError;

/// Port for rendering aggregation results. Implementations consume the
/// aggregate structures read-only and produce a printable string.
pub trait ReportPort {
    fn render_summary(&self, summary: &FundSummary, label: &str) -> Result<String, ArkflowError>;

    fn render_grouped(
        &self,
        groups: &[GroupedTrade],
        label: &str,
    ) -> Result<String, ArkflowError>;
}
