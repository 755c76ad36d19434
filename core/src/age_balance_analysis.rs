//! Average balance progression by age, rendered as a line chart.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    plots::{create_line_chart, ChartSpec},
    section::{ReportSection, SectionOutput},
    stats::Aggregate,
    table::{DataTable, GroupKey},
    types::columns::{AGE, BALANCE},
};

pub const CHART_FILE: &str = "average_balance_by_age.png";
const CHART_TITLE: &str = "Average Balance by Age";

#[derive(Debug, Clone, PartialEq)]
pub struct AgeBalance {
    pub age: GroupKey,
    pub mean_balance: f64,
}

/// Mean Balance per distinct Age, in ascending age order.
pub fn average_balance_by_age(table: &DataTable) -> ReportResult<Vec<AgeBalance>> {
    // Ages must be numeric to sit on an x axis.
    table.numeric_column(AGE)?;
    let grouping = table.group_by(AGE)?;
    let balances = table.numeric_column(BALANCE)?;
    let means = grouping.reduce(&balances, Aggregate::Mean);

    Ok(grouping
        .keys()
        .cloned()
        .zip(means)
        .map(|(age, mean_balance)| AgeBalance { age, mean_balance })
        .collect())
}

pub struct AgeBalanceChartSection;

impl ReportSection for AgeBalanceChartSection {
    fn name(&self) -> &'static str {
        "average_balance_by_age"
    }

    fn render(&self, table: &DataTable, config: &ReportConfig) -> ReportResult<SectionOutput> {
        let averages = average_balance_by_age(table)?;
        let points: Vec<(f64, f64)> = averages
            .iter()
            .filter(|a| !a.mean_balance.is_nan())
            .filter_map(|a| a.age.as_number().map(|age| (age, a.mean_balance)))
            .collect();
        if points.len() < averages.len() {
            log::debug!(
                "{}: {} ages without any balance skipped",
                self.name(),
                averages.len() - points.len()
            );
        }

        let path = config.chart_path(CHART_FILE)?;
        let spec = ChartSpec {
            title: CHART_TITLE,
            x_label: "Age",
            y_label: "Average Balance",
            size: config.chart_size(),
        };
        create_line_chart(&points, &spec, &path)?;
        log::info!("wrote {} ({} ages)", path.display(), points.len());

        Ok(SectionOutput::Chart {
            title: CHART_TITLE.to_string(),
            path,
        })
    }
}
