//! Report section trait.
//!
//! RULE: Every analysis implements ReportSection.
//! The engine calls render() on each registered section
//! in registration order, exactly once per run.
//! Execution order is fixed and documented in engine.rs.

use crate::{config::ReportConfig, error::ReportResult, table::DataTable};
use std::path::PathBuf;

/// What a section produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutput {
    /// Printable text, usually one or more titled tables.
    Text(String),
    /// A chart written to disk.
    Chart { title: String, path: PathBuf },
}

/// The contract every report section must fulfill.
pub trait ReportSection {
    /// Unique stable name for this section.
    fn name(&self) -> &'static str;

    /// Run the analysis against the loaded table.
    ///
    /// The table is shared read-only across all sections.
    fn render(&self, table: &DataTable, config: &ReportConfig) -> ReportResult<SectionOutput>;
}
