//! Retirement readiness: participants at the retirement age whose balance
//! meets the target.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    render::{format_amount, titled_table},
    section::{ReportSection, SectionOutput},
    table::DataTable,
    types::{
        columns::{AGE, BALANCE, INDIVIDUAL_ID},
        RowIndex,
    },
};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq)]
pub struct RetirementCandidate {
    pub row: RowIndex,
    pub individual_id: String,
    pub balance: f64,
}

/// Rows with `Age == retirement_age` and `Balance >= target_balance`, in
/// dataset order. An empty result is valid.
pub fn retirement_readiness(
    table: &DataTable,
    retirement_age: f64,
    target_balance: f64,
) -> ReportResult<Vec<RetirementCandidate>> {
    let ages = table.numeric_column(AGE)?;
    let balances = table.numeric_column(BALANCE)?;
    let ids = table.text_column(INDIVIDUAL_ID)?;

    Ok(ages
        .iter()
        .zip(&balances)
        .enumerate()
        .filter_map(|(row, (age, balance))| match (age, balance) {
            (Some(age), Some(balance)) if *age == retirement_age && *balance >= target_balance => {
                Some(RetirementCandidate {
                    row,
                    individual_id: ids[row].to_string(),
                    balance: *balance,
                })
            }
            _ => None,
        })
        .collect())
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Row")]
    row: RowIndex,
    #[tabled(rename = "Individual_ID")]
    individual_id: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

pub struct RetirementReadinessSection;

impl ReportSection for RetirementReadinessSection {
    fn name(&self) -> &'static str {
        "retirement_readiness"
    }

    fn render(&self, table: &DataTable, config: &ReportConfig) -> ReportResult<SectionOutput> {
        let candidates = retirement_readiness(
            table,
            f64::from(config.retirement_age),
            config.target_balance,
        )?;
        log::debug!(
            "{} participants aged {} with balance >= {:.2}",
            candidates.len(),
            config.retirement_age,
            config.target_balance
        );

        let rows: Vec<CandidateRow> = candidates
            .into_iter()
            .map(|c| CandidateRow {
                row: c.row,
                individual_id: c.individual_id,
                balance: format_amount(c.balance),
            })
            .collect();
        Ok(SectionOutput::Text(titled_table(
            "Individuals Ready for Retirement",
            &rows,
        )))
    }
}
