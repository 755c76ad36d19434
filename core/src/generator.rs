//! Synthetic participant dataset generator.
//!
//! Produces one row per individual per year of age, from a random start age
//! up to the individual's life expectancy. Output is fully determined by the
//! seed: the same config always yields a byte-identical CSV.
//!
//! Per-year model:
//!   1. Working years: salary grows, a fixed share is contributed,
//!      with an occasional unemployed year that contributes nothing.
//!   2. From the retirement age: "Retired", no contribution, a fixed share
//!      of the balance is withdrawn.
//!   3. balance = balance * (1 + return) + contribution - withdrawal, floored at 0.
//!   4. Health expense grows with age and jumps in retirement.

use crate::{
    error::ReportResult,
    rng::{StreamRng, StreamSlot},
};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

/// One output row. Field order is the canonical column order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParticipantRow {
    #[serde(rename = "Individual_ID")]
    pub individual_id: u32,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "Contribution")]
    pub contribution: f64,
    #[serde(rename = "Withdrawal")]
    pub withdrawal: f64,
    #[serde(rename = "Occupation")]
    pub occupation: &'static str,
    #[serde(rename = "Income_Level")]
    pub income_level: &'static str,
    #[serde(rename = "Risk_Profile")]
    pub risk_profile: &'static str,
    #[serde(rename = "Annual_Return_Rate")]
    pub annual_return_rate: f64,
    #[serde(rename = "Employment_Status")]
    pub employment_status: &'static str,
    #[serde(rename = "Life_Expectancy")]
    pub life_expectancy: u32,
    #[serde(rename = "Health_Expense")]
    pub health_expense: f64,
}

pub const EMPLOYED: &str = "Employed";
pub const UNEMPLOYED: &str = "Unemployed";
pub const RETIRED: &str = "Retired";

struct Occupation {
    name: &'static str,
    income_level: &'static str,
    salary_range: (f64, f64),
    weight: f64,
}

static OCCUPATIONS: [Occupation; 8] = [
    Occupation { name: "Teacher",       income_level: "Medium", salary_range: (40_000.0, 70_000.0),   weight: 0.15 },
    Occupation { name: "Engineer",      income_level: "High",   salary_range: (80_000.0, 140_000.0),  weight: 0.12 },
    Occupation { name: "Nurse",         income_level: "Medium", salary_range: (50_000.0, 85_000.0),   weight: 0.14 },
    Occupation { name: "Retail Worker", income_level: "Low",    salary_range: (22_000.0, 35_000.0),   weight: 0.18 },
    Occupation { name: "Manager",       income_level: "High",   salary_range: (90_000.0, 160_000.0),  weight: 0.10 },
    Occupation { name: "Clerk",         income_level: "Low",    salary_range: (28_000.0, 42_000.0),   weight: 0.14 },
    Occupation { name: "Technician",    income_level: "Medium", salary_range: (45_000.0, 75_000.0),   weight: 0.12 },
    Occupation { name: "Doctor",        income_level: "High",   salary_range: (150_000.0, 260_000.0), weight: 0.05 },
];

struct RiskProfile {
    name: &'static str,
    mean_return: f64,
    volatility: f64,
}

static RISK_PROFILES: [RiskProfile; 3] = [
    RiskProfile { name: "Conservative", mean_return: 0.03, volatility: 0.02 },
    RiskProfile { name: "Moderate",     mean_return: 0.05, volatility: 0.06 },
    RiskProfile { name: "Aggressive",   mean_return: 0.07, volatility: 0.12 },
];

const SALARY_GROWTH: f64 = 0.02;
const UNEMPLOYMENT_CHANCE: f64 = 0.03;
const RETURN_BOUNDS: (f64, f64) = (-0.5, 0.5);

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub individuals: u32,
    pub retirement_age: u32,
    /// Share of balance withdrawn each retired year.
    pub withdrawal_rate: f64,
    pub start_age_range: (u32, u32),
    pub life_expectancy_range: (u32, u32),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            individuals: 1_000,
            retirement_age: 65,
            withdrawal_rate: 0.04,
            start_age_range: (25, 45),
            life_expectancy_range: (75, 95),
        }
    }
}

pub struct PopulationGenerator {
    config: GeneratorConfig,
}

impl PopulationGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self) -> Vec<ParticipantRow> {
        let seed = self.config.seed;
        let mut population = StreamSlot::Population.rng(seed);
        let mut markets = StreamSlot::Markets.rng(seed);
        let mut employment = StreamSlot::Employment.rng(seed);
        let mut health = StreamSlot::Health.rng(seed);

        let mut rows = Vec::new();
        for id in 1..=self.config.individuals {
            self.generate_individual(
                id,
                &mut population,
                &mut markets,
                &mut employment,
                &mut health,
                &mut rows,
            );
        }
        log::info!(
            "generated {} rows for {} individuals (seed={seed})",
            rows.len(),
            self.config.individuals
        );
        rows
    }

    fn generate_individual(
        &self,
        id: u32,
        population: &mut StreamRng,
        markets: &mut StreamRng,
        employment: &mut StreamRng,
        health: &mut StreamRng,
        rows: &mut Vec<ParticipantRow>,
    ) {
        let cfg = &self.config;
        let occupation = pick_occupation(population);
        let risk = population.pick(&RISK_PROFILES);
        let start_age = population.int_between(cfg.start_age_range.0, cfg.start_age_range.1);
        let life_expectancy =
            population.int_between(cfg.life_expectancy_range.0, cfg.life_expectancy_range.1);
        let contribution_rate = population.uniform(0.05, 0.15);
        let mut salary = population.uniform(occupation.salary_range.0, occupation.salary_range.1);
        let mut balance = salary * population.uniform(0.0, 1.5);
        let health_base = health.uniform(300.0, 900.0);

        for age in start_age..=life_expectancy {
            let retired = age >= cfg.retirement_age;
            let status = if retired {
                RETIRED
            } else if employment.chance(UNEMPLOYMENT_CHANCE) {
                UNEMPLOYED
            } else {
                EMPLOYED
            };

            let contribution = if status == EMPLOYED {
                salary * contribution_rate
            } else {
                0.0
            };
            let annual_return = markets
                .normal(risk.mean_return, risk.volatility)
                .clamp(RETURN_BOUNDS.0, RETURN_BOUNDS.1);
            let grown = balance * (1.0 + annual_return);
            let withdrawal = if retired {
                grown.max(0.0) * cfg.withdrawal_rate
            } else {
                0.0
            };
            balance = (grown + contribution - withdrawal).max(0.0);

            let years_from_start = f64::from(age - start_age);
            let retirement_factor = if retired { 1.5 } else { 1.0 };
            let health_expense = health_base
                * 1.04f64.powf(years_from_start)
                * retirement_factor
                * health.uniform(0.8, 1.2);

            rows.push(ParticipantRow {
                individual_id: id,
                age,
                balance: round_to(balance, 2),
                contribution: round_to(contribution, 2),
                withdrawal: round_to(withdrawal, 2),
                occupation: occupation.name,
                income_level: occupation.income_level,
                risk_profile: risk.name,
                annual_return_rate: round_to(annual_return, 4),
                employment_status: status,
                life_expectancy,
                health_expense: round_to(health_expense, 2),
            });

            if !retired {
                salary *= 1.0 + SALARY_GROWTH;
            }
        }
    }
}

fn pick_occupation(rng: &mut StreamRng) -> &'static Occupation {
    let roll = rng.next_f64() * OCCUPATIONS.iter().map(|o| o.weight).sum::<f64>();
    let mut cumulative = 0.0;
    for occupation in &OCCUPATIONS {
        cumulative += occupation.weight;
        if roll < cumulative {
            return occupation;
        }
    }
    &OCCUPATIONS[OCCUPATIONS.len() - 1]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Write rows as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[ParticipantRow], writer: W) -> ReportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(rows: &[ParticipantRow], path: impl AsRef<Path>) -> ReportResult<()> {
    let path = path.as_ref();
    write_csv(rows, File::create(path)?)?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
