//! Healthcare cost in retirement: total Health_Expense per retiree over the
//! final years before their life expectancy.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    render::{format_amount, titled_table},
    section::{ReportSection, SectionOutput},
    stats::Aggregate,
    table::{DataTable, GroupKey},
    types::{
        columns::{AGE, EMPLOYMENT_STATUS, HEALTH_EXPENSE, INDIVIDUAL_ID, LIFE_EXPECTANCY},
        RowIndex,
    },
};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthcareCost {
    pub individual_id: GroupKey,
    pub total_health_expense: f64,
}

/// Rows with `Age >= Life_Expectancy - window_years` and
/// `Employment_Status == retired_status`.
pub fn end_of_life_retiree_rows(
    table: &DataTable,
    window_years: f64,
    retired_status: &str,
) -> ReportResult<Vec<RowIndex>> {
    let ages = table.numeric_column(AGE)?;
    let life_expectancy = table.numeric_column(LIFE_EXPECTANCY)?;
    let status = table.text_column(EMPLOYMENT_STATUS)?;

    Ok((0..table.len())
        .filter(|&row| match (ages[row], life_expectancy[row]) {
            (Some(age), Some(life)) => age >= life - window_years && status[row] == retired_status,
            _ => false,
        })
        .collect())
}

/// Health_Expense summed per individual over the filtered rows. An empty
/// result is valid.
pub fn healthcare_costs_in_retirement(
    table: &DataTable,
    window_years: f64,
    retired_status: &str,
) -> ReportResult<Vec<HealthcareCost>> {
    let rows = end_of_life_retiree_rows(table, window_years, retired_status)?;
    let grouping = table.group_rows_by(INDIVIDUAL_ID, &rows)?;
    let totals = grouping.reduce(&table.numeric_column(HEALTH_EXPENSE)?, Aggregate::Sum);

    Ok(grouping
        .keys()
        .zip(totals)
        .map(|(id, total_health_expense)| HealthcareCost {
            individual_id: id.clone(),
            total_health_expense,
        })
        .collect())
}

#[derive(Tabled)]
struct CostRow {
    #[tabled(rename = "Individual_ID")]
    individual_id: String,
    #[tabled(rename = "Health_Expense")]
    health_expense: String,
}

pub struct HealthcareSection;

impl ReportSection for HealthcareSection {
    fn name(&self) -> &'static str {
        "healthcare_costs_in_retirement"
    }

    fn render(&self, table: &DataTable, config: &ReportConfig) -> ReportResult<SectionOutput> {
        let costs = healthcare_costs_in_retirement(
            table,
            config.end_of_life_window_years,
            &config.retired_status,
        )?;
        let rows: Vec<CostRow> = costs
            .into_iter()
            .map(|c| CostRow {
                individual_id: c.individual_id.to_string(),
                health_expense: format_amount(c.total_health_expense),
            })
            .collect();

        let title = format!(
            "Total Healthcare Expense in Last {} Years",
            config.end_of_life_window_years
        );
        Ok(SectionOutput::Text(titled_table(&title, &rows)))
    }
}
