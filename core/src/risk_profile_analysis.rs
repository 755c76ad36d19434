//! Risk profile performance: mean balance and mean annual return per profile.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    render::{format_amount, format_rate, titled_table},
    section::{ReportSection, SectionOutput},
    stats::Aggregate,
    table::{DataTable, GroupKey},
    types::columns::{ANNUAL_RETURN_RATE, BALANCE, RISK_PROFILE},
};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskProfilePerformance {
    pub risk_profile: GroupKey,
    pub mean_balance: f64,
    pub mean_annual_return_rate: f64,
}

pub fn risk_profile_performance(table: &DataTable) -> ReportResult<Vec<RiskProfilePerformance>> {
    let grouping = table.group_by(RISK_PROFILE)?;
    let balances = grouping.reduce(&table.numeric_column(BALANCE)?, Aggregate::Mean);
    let returns = grouping.reduce(&table.numeric_column(ANNUAL_RETURN_RATE)?, Aggregate::Mean);

    Ok(grouping
        .keys()
        .zip(balances.into_iter().zip(returns))
        .map(|(key, (mean_balance, mean_annual_return_rate))| RiskProfilePerformance {
            risk_profile: key.clone(),
            mean_balance,
            mean_annual_return_rate,
        })
        .collect())
}

#[derive(Tabled)]
struct PerformanceRow {
    #[tabled(rename = "Risk_Profile")]
    risk_profile: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Annual_Return_Rate")]
    annual_return_rate: String,
}

pub struct RiskProfileSection;

impl ReportSection for RiskProfileSection {
    fn name(&self) -> &'static str {
        "risk_profile_performance"
    }

    fn render(&self, table: &DataTable, _config: &ReportConfig) -> ReportResult<SectionOutput> {
        let rows: Vec<PerformanceRow> = risk_profile_performance(table)?
            .into_iter()
            .map(|p| PerformanceRow {
                risk_profile: p.risk_profile.to_string(),
                balance: format_amount(p.mean_balance),
                annual_return_rate: format_rate(p.mean_annual_return_rate),
            })
            .collect();
        Ok(SectionOutput::Text(titled_table(
            "Risk Profile Performance",
            &rows,
        )))
    }
}
