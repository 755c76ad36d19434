//! Summary statistics: describe Balance, Contribution and Withdrawal,
//! plus total assets under management.

use crate::{
    config::ReportConfig,
    error::ReportResult,
    render::{format_amount, titled_matrix},
    section::{ReportSection, SectionOutput},
    stats::{Aggregate, Describe, DESCRIBE_LABELS},
    table::DataTable,
    types::columns::{BALANCE, CONTRIBUTION, WITHDRAWAL},
};

pub const DESCRIBED_COLUMNS: [&str; 3] = [BALANCE, CONTRIBUTION, WITHDRAWAL];

#[derive(Debug, Clone)]
pub struct SummaryStatistics {
    /// One entry per described column, in `DESCRIBED_COLUMNS` order.
    pub columns: Vec<(&'static str, Describe)>,
    /// Sum of Balance over every row.
    pub total_assets: f64,
}

pub fn summary_statistics(table: &DataTable) -> ReportResult<SummaryStatistics> {
    let mut columns = Vec::with_capacity(DESCRIBED_COLUMNS.len());
    let mut total_assets = 0.0;
    for name in DESCRIBED_COLUMNS {
        let values = table.numeric_column(name)?;
        if name == BALANCE {
            total_assets = Aggregate::Sum.apply(values.iter().copied());
        }
        columns.push((name, Describe::of(&values)));
    }
    Ok(SummaryStatistics {
        columns,
        total_assets,
    })
}

impl SummaryStatistics {
    pub fn to_text(&self) -> String {
        let mut header = vec![String::new()];
        header.extend(self.columns.iter().map(|(name, _)| name.to_string()));

        let records = DESCRIBE_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut record = vec![label.to_string()];
                record.extend(self.columns.iter().map(|(_, d)| match i {
                    0 => d.count.to_string(),
                    _ => format_amount(d.values()[i]),
                }));
                record
            })
            .collect();

        format!(
            "{}\nTotal Assets Under Management: {}",
            titled_matrix("Summary Statistics", header, records),
            format_amount(self.total_assets)
        )
    }
}

pub struct SummarySection;

impl ReportSection for SummarySection {
    fn name(&self) -> &'static str {
        "summary_statistics"
    }

    fn render(&self, table: &DataTable, _config: &ReportConfig) -> ReportResult<SectionOutput> {
        let summary = summary_statistics(table)?;
        log::debug!("total assets under management: {:.2}", summary.total_assets);
        Ok(SectionOutput::Text(summary.to_text()))
    }
}
