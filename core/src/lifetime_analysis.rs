//! Lifetime contribution vs withdrawal per individual, with derived net savings.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    render::{format_amount, titled_table},
    section::{ReportSection, SectionOutput},
    stats::Aggregate,
    table::{DataTable, GroupKey},
    types::columns::{CONTRIBUTION, INDIVIDUAL_ID, WITHDRAWAL},
};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq)]
pub struct LifetimeTotals {
    pub individual_id: GroupKey,
    pub contribution: f64,
    pub withdrawal: f64,
    /// `contribution - withdrawal`.
    pub net_savings: f64,
}

pub fn lifetime_contribution_vs_withdrawal(table: &DataTable) -> ReportResult<Vec<LifetimeTotals>> {
    let grouping = table.group_by(INDIVIDUAL_ID)?;
    let contributions = grouping.reduce(&table.numeric_column(CONTRIBUTION)?, Aggregate::Sum);
    let withdrawals = grouping.reduce(&table.numeric_column(WITHDRAWAL)?, Aggregate::Sum);

    Ok(grouping
        .keys()
        .zip(contributions.into_iter().zip(withdrawals))
        .map(|(id, (contribution, withdrawal))| LifetimeTotals {
            individual_id: id.clone(),
            contribution,
            withdrawal,
            net_savings: contribution - withdrawal,
        })
        .collect())
}

#[derive(Tabled)]
struct LifetimeRow {
    #[tabled(rename = "Individual_ID")]
    individual_id: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
    #[tabled(rename = "Withdrawal")]
    withdrawal: String,
    #[tabled(rename = "Net_Savings")]
    net_savings: String,
}

pub struct LifetimeSection;

impl ReportSection for LifetimeSection {
    fn name(&self) -> &'static str {
        "lifetime_contribution_vs_withdrawal"
    }

    fn render(&self, table: &DataTable, _config: &ReportConfig) -> ReportResult<SectionOutput> {
        let totals = lifetime_contribution_vs_withdrawal(table)?;
        log::debug!("{}: {} individuals", self.name(), totals.len());

        let rows: Vec<LifetimeRow> = totals
            .into_iter()
            .map(|t| LifetimeRow {
                individual_id: t.individual_id.to_string(),
                contribution: format_amount(t.contribution),
                withdrawal: format_amount(t.withdrawal),
                net_savings: format_amount(t.net_savings),
            })
            .collect();
        Ok(SectionOutput::Text(titled_table(
            "Lifetime Contribution vs. Withdrawal",
            &rows,
        )))
    }
}
