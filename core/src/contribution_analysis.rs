//! Contribution patterns by occupation and income level, as tables and as
//! a bar chart over occupations.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    plots::{create_bar_chart, ChartSpec},
    render::{format_amount, titled_table},
    section::{ReportSection, SectionOutput},
    stats::Aggregate,
    table::{DataTable, GroupKey},
    types::columns::{CONTRIBUTION, INCOME_LEVEL, OCCUPATION},
};
use tabled::Tabled;

pub const CHART_FILE: &str = "average_contribution_by_occupation.png";
const CHART_TITLE: &str = "Average Contribution by Occupation";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    pub category: GroupKey,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributionBreakdown {
    pub by_occupation: Vec<CategoryMean>,
    pub by_income_level: Vec<CategoryMean>,
}

/// Mean Contribution per value of `key`, in ascending key order.
pub fn mean_contribution_by(table: &DataTable, key: &str) -> ReportResult<Vec<CategoryMean>> {
    let grouping = table.group_by(key)?;
    let contributions = table.numeric_column(CONTRIBUTION)?;
    let means = grouping.reduce(&contributions, Aggregate::Mean);
    Ok(grouping
        .keys()
        .cloned()
        .zip(means)
        .map(|(category, mean)| CategoryMean { category, mean })
        .collect())
}

pub fn contribution_by_occupation_and_income(
    table: &DataTable,
) -> ReportResult<ContributionBreakdown> {
    Ok(ContributionBreakdown {
        by_occupation: mean_contribution_by(table, OCCUPATION)?,
        by_income_level: mean_contribution_by(table, INCOME_LEVEL)?,
    })
}

#[derive(Tabled)]
struct MeanRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

fn mean_rows(means: &[CategoryMean]) -> Vec<MeanRow> {
    means
        .iter()
        .map(|m| MeanRow {
            group: m.category.to_string(),
            contribution: format_amount(m.mean),
        })
        .collect()
}

pub struct ContributionBreakdownSection;

impl ReportSection for ContributionBreakdownSection {
    fn name(&self) -> &'static str {
        "contribution_by_occupation_and_income"
    }

    fn render(&self, table: &DataTable, _config: &ReportConfig) -> ReportResult<SectionOutput> {
        let breakdown = contribution_by_occupation_and_income(table)?;
        Ok(SectionOutput::Text(format!(
            "{}\n\n{}",
            titled_table(
                "Average Contribution by Occupation",
                &mean_rows(&breakdown.by_occupation)
            ),
            titled_table(
                "Average Contribution by Income Level",
                &mean_rows(&breakdown.by_income_level)
            ),
        )))
    }
}

pub struct ContributionChartSection;

impl ReportSection for ContributionChartSection {
    fn name(&self) -> &'static str {
        "contribution_by_occupation_chart"
    }

    fn render(&self, table: &DataTable, config: &ReportConfig) -> ReportResult<SectionOutput> {
        let bars: Vec<(String, f64)> = mean_contribution_by(table, OCCUPATION)?
            .into_iter()
            .filter(|m| !m.mean.is_nan())
            .map(|m| (m.category.to_string(), m.mean))
            .collect();

        let path = config.chart_path(CHART_FILE)?;
        let spec = ChartSpec {
            title: CHART_TITLE,
            x_label: "Occupation",
            y_label: "Average Contribution",
            size: config.chart_size(),
        };
        create_bar_chart(&bars, &spec, &path)?;
        log::info!("wrote {} ({} occupations)", path.display(), bars.len());

        Ok(SectionOutput::Chart {
            title: CHART_TITLE.to_string(),
            path,
        })
    }
}
