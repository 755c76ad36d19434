use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "realistic_pension_simulation.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Participant CSV to analyse.
    pub input_path: PathBuf,
    /// Directory charts are written into. Created on first chart.
    pub output_dir: PathBuf,
    /// Age at which readiness is assessed.
    pub retirement_age: u32,
    /// Balance at or above which a participant counts as ready.
    pub target_balance: f64,
    /// Healthcare window: years before life expectancy.
    pub end_of_life_window_years: f64,
    /// Employment_Status value that marks a retiree.
    pub retired_status: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from("charts"),
            retirement_age: 65,
            target_balance: 500_000.0,
            end_of_life_window_years: 5.0,
            retired_status: "Retired".into(),
            chart_width: 1200,
            chart_height: 800,
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file. Absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| ReportError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("loaded report config from {}", path.display());
        Ok(config)
    }

    /// Path for a chart file inside `output_dir`, creating the directory.
    pub fn chart_path(&self, file_name: &str) -> ReportResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_dir.join(file_name))
    }

    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}
