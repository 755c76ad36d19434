//! The report engine. Runs every registered section against one loaded table.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Summary statistics
//!   2. Average balance by age          (line chart)
//!   3. Retirement readiness
//!   4. Contribution by occupation and income level
//!   5. Risk profile performance
//!   6. Lifetime contribution vs withdrawal
//!   7. Healthcare cost in retirement
//!   8. Average contribution by occupation (bar chart)
//!
//! RULES:
//!   - Sections execute in registration order, once per run.
//!   - Each section reads the shared table; none mutates it.
//!   - The first failing section aborts the run. No partial-result fallback.

use crate::{
    age_balance_analysis::AgeBalanceChartSection,
    config::ReportConfig,
    contribution_analysis::{ContributionBreakdownSection, ContributionChartSection},
    error::ReportResult,
    healthcare_analysis::HealthcareSection,
    lifetime_analysis::LifetimeSection,
    retirement_analysis::RetirementReadinessSection,
    risk_profile_analysis::RiskProfileSection,
    section::{ReportSection, SectionOutput},
    summary_analysis::SummarySection,
    table::DataTable,
};
use std::{io::Write, path::PathBuf};

pub struct ReportEngine {
    config: ReportConfig,
    sections: Vec<Box<dyn ReportSection>>,
}

/// What a completed run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub sections_run: Vec<&'static str>,
    pub charts: Vec<PathBuf>,
}

impl ReportEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
        }
    }

    /// Build an engine with every section registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(config: ReportConfig) -> Self {
        let mut engine = ReportEngine::new(config);

        // EXECUTION ORDER: fixed, documented, never reordered.
        engine.register(Box::new(SummarySection));
        engine.register(Box::new(AgeBalanceChartSection));
        engine.register(Box::new(RetirementReadinessSection));
        engine.register(Box::new(ContributionBreakdownSection));
        engine.register(Box::new(RiskProfileSection));
        engine.register(Box::new(LifetimeSection));
        engine.register(Box::new(HealthcareSection));
        engine.register(Box::new(ContributionChartSection));
        engine
    }

    /// Register a section. Call in the documented execution order.
    pub fn register(&mut self, section: Box<dyn ReportSection>) {
        self.sections.push(section);
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    /// Run every section in order, writing text output to `out`.
    pub fn run<W: Write>(&self, table: &DataTable, out: &mut W) -> ReportResult<RunSummary> {
        let mut summary = RunSummary::default();

        for section in &self.sections {
            log::info!("section={} running", section.name());
            match section.render(table, &self.config)? {
                SectionOutput::Text(text) => {
                    writeln!(out, "{text}")?;
                }
                SectionOutput::Chart { title, path } => {
                    writeln!(out, "{title}: chart written to {}", path.display())?;
                    summary.charts.push(path);
                }
            }
            writeln!(out)?;
            summary.sections_run.push(section.name());
        }

        out.flush()?;
        Ok(summary)
    }
}
