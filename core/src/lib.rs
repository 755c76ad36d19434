//! Pension fund reporting: descriptive statistics and aggregate breakdowns
//! over a participant dataset, printed as tables and rendered as charts.

pub mod age_balance_analysis;
pub mod config;
pub mod contribution_analysis;
pub mod engine;
pub mod error;
pub mod generator;
pub mod healthcare_analysis;
pub mod lifetime_analysis;
pub mod plots;
pub mod render;
pub mod retirement_analysis;
pub mod rng;
pub mod risk_profile_analysis;
pub mod section;
pub mod stats;
pub mod summary_analysis;
pub mod table;
pub mod types;
