//! Report engine: section order, text output, failure propagation.

use pension_core::{
    age_balance_analysis, contribution_analysis,
    config::ReportConfig,
    engine::ReportEngine,
    error::ReportError,
    generator::{write_csv, GeneratorConfig, PopulationGenerator},
    lifetime_analysis::LifetimeSection,
    render::EMPTY_RESULT,
    retirement_analysis::RetirementReadinessSection,
    risk_profile_analysis::RiskProfileSection,
    summary_analysis::SummarySection,
    table::DataTable,
};
use std::fs;

// ── Helpers ──────────────────────────────────────────────────────────────────

const SAMPLE: &str = "\
Individual_ID,Age,Balance,Contribution,Withdrawal,Risk_Profile,Annual_Return_Rate
1,64,400000,5000,0,Moderate,0.05
1,65,420000,0,16800,Moderate,0.04
2,65,650000,0,26000,Aggressive,0.09
";

fn sample() -> DataTable {
    DataTable::from_reader(SAMPLE.as_bytes()).unwrap()
}

fn generated_table(seed: u64, individuals: u32) -> DataTable {
    let rows = PopulationGenerator::new(GeneratorConfig {
        seed,
        individuals,
        ..GeneratorConfig::default()
    })
    .generate();
    let mut buf = Vec::new();
    write_csv(&rows, &mut buf).unwrap();
    DataTable::from_reader(buf.as_slice()).unwrap()
}

fn text_engine() -> ReportEngine {
    let mut engine = ReportEngine::new(ReportConfig::default());
    engine.register(Box::new(SummarySection));
    engine.register(Box::new(RetirementReadinessSection));
    engine.register(Box::new(RiskProfileSection));
    engine.register(Box::new(LifetimeSection));
    engine
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn build_registers_every_section_in_order() {
    let engine = ReportEngine::build(ReportConfig::default());
    assert_eq!(
        engine.section_names(),
        [
            "summary_statistics",
            "average_balance_by_age",
            "retirement_readiness",
            "contribution_by_occupation_and_income",
            "risk_profile_performance",
            "lifetime_contribution_vs_withdrawal",
            "healthcare_costs_in_retirement",
            "contribution_by_occupation_chart",
        ]
    );
}

#[test]
fn text_sections_print_in_registration_order() {
    let mut out = Vec::new();
    let summary = text_engine().run(&sample(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.sections_run.len(), 4);
    assert!(summary.charts.is_empty());

    let titles = [
        "Summary Statistics",
        "Individuals Ready for Retirement",
        "Risk Profile Performance",
        "Lifetime Contribution vs. Withdrawal",
    ];
    let positions: Vec<usize> = titles
        .iter()
        .map(|t| text.find(t).unwrap_or_else(|| panic!("missing title {t}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "titles out of order");
    assert!(text.contains("Total Assets Under Management: 1470000.00"));
}

#[test]
fn empty_filter_result_still_prints_its_title() {
    let config = ReportConfig {
        target_balance: 1e9,
        ..ReportConfig::default()
    };
    let mut engine = ReportEngine::new(config);
    engine.register(Box::new(RetirementReadinessSection));

    let mut out = Vec::new();
    engine.run(&sample(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Individuals Ready for Retirement"));
    assert!(text.contains(EMPTY_RESULT));
}

/// The first failing section aborts the run. Earlier output stays written.
#[test]
fn missing_column_aborts_the_run() {
    let csv = "Individual_ID,Age,Balance,Contribution\n1,65,600000,100\n";
    let table = DataTable::from_reader(csv.as_bytes()).unwrap();

    let mut engine = ReportEngine::new(ReportConfig::default());
    engine.register(Box::new(RetirementReadinessSection));
    engine.register(Box::new(LifetimeSection));
    engine.register(Box::new(RiskProfileSection));

    let mut out = Vec::new();
    let err = engine.run(&table, &mut out).unwrap_err();
    assert!(
        matches!(err, ReportError::MissingColumn { ref column } if column == "Withdrawal"),
        "got {err}"
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Individuals Ready for Retirement"));
    assert!(!text.contains("Risk Profile Performance"));
}

/// The full report writes both charts into `output_dir` and lists them in
/// the run summary, age chart first.
#[test]
fn full_report_writes_both_charts() {
    let output_dir = std::env::temp_dir().join(format!("pension_report_{}", std::process::id()));
    let _ = fs::remove_dir_all(&output_dir);
    let config = ReportConfig {
        output_dir: output_dir.clone(),
        ..ReportConfig::default()
    };

    let mut out = Vec::new();
    let summary = ReportEngine::build(config)
        .run(&generated_table(17, 20), &mut out)
        .unwrap();

    assert_eq!(summary.sections_run.len(), 8, "every section should run");
    let expected = [
        output_dir.join(age_balance_analysis::CHART_FILE),
        output_dir.join(contribution_analysis::CHART_FILE),
    ];
    assert_eq!(summary.charts, expected);
    for chart in &expected {
        let size = fs::metadata(chart).map(|m| m.len()).unwrap_or(0);
        assert!(size > 0, "chart {} missing or empty", chart.display());
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Average Balance by Age: chart written to"));
    assert!(text.contains("Average Contribution by Occupation: chart written to"));

    let _ = fs::remove_dir_all(&output_dir);
}
