//! Row-filter analyses: retirement readiness and end-of-life healthcare cost.

use pension_core::{
    error::ReportError,
    generator::{write_csv, GeneratorConfig, PopulationGenerator, RETIRED},
    healthcare_analysis::{end_of_life_retiree_rows, healthcare_costs_in_retirement},
    retirement_analysis::retirement_readiness,
    table::{DataTable, GroupKey},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

const SAMPLE: &str = "\
Individual_ID,Age,Balance,Employment_Status,Life_Expectancy,Health_Expense
1,64,900000,Employed,80,1000
1,65,600000,Retired,80,1200
2,65,499999.99,Retired,90,800
3,65,500000,Retired,70,2000
3,66,480000,Retired,70,2500
4,78,10000,Retired,82,3000
4,79,9000,Employed,82,3100
4,90,8000,Retired,82,4000
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

// ── Retirement readiness ─────────────────────────────────────────────────────

#[test]
fn readiness_requires_exact_age_and_target_balance() {
    let ready = retirement_readiness(&sample(), 65.0, 500_000.0).unwrap();
    let ids: Vec<&str> = ready.iter().map(|c| c.individual_id.as_str()).collect();
    assert_eq!(ids, ["1", "3"], "balance equal to target counts, just below does not");
    assert_eq!(ready[0].row, 1);
    assert_eq!(ready[1].balance, 500_000.0);
}

/// Every returned row satisfies the predicate, and every row satisfying it
/// is returned.
#[test]
fn readiness_matches_predicate_on_generated_data() {
    let table = generated_table(5, 60);
    let target = 150_000.0;
    let ready = retirement_readiness(&table, 65.0, target).unwrap();

    let ages = table.numeric_column("Age").unwrap();
    let balances = table.numeric_column("Balance").unwrap();
    let expected: Vec<usize> = (0..table.len())
        .filter(|&r| ages[r] == Some(65.0) && balances[r].is_some_and(|b| b >= target))
        .collect();
    let rows: Vec<usize> = ready.iter().map(|c| c.row).collect();
    assert_eq!(rows, expected);
}

#[test]
fn nobody_ready_is_an_empty_result_not_an_error() {
    let ready = retirement_readiness(&sample(), 65.0, 1e12).unwrap();
    assert!(ready.is_empty());
}

#[test]
fn readiness_without_balance_column_fails() {
    let csv = "Individual_ID,Age\n1,65\n";
    let table = DataTable::from_reader(csv.as_bytes()).unwrap();
    let err = retirement_readiness(&table, 65.0, 0.0).unwrap_err();
    assert!(
        matches!(err, ReportError::MissingColumn { ref column } if column == "Balance"),
        "got {err}"
    );
}

// ── Healthcare cost in retirement ────────────────────────────────────────────

#[test]
fn end_of_life_filter_needs_window_and_retired_status() {
    let rows = end_of_life_retiree_rows(&sample(), 5.0, RETIRED).unwrap();
    // Row 2: 65 < 90 - 5. Row 6: inside the window but still employed.
    assert_eq!(rows, vec![3, 4, 5, 7]);
}

#[test]
fn healthcare_totals_sum_per_individual() {
    let costs = healthcare_costs_in_retirement(&sample(), 5.0, RETIRED).unwrap();
    assert_eq!(costs.len(), 2);
    assert_eq!(costs[0].individual_id, GroupKey::Number(3.0));
    assert_eq!(costs[0].total_health_expense, 4500.0);
    assert_eq!(costs[1].individual_id, GroupKey::Number(4.0));
    assert_eq!(costs[1].total_health_expense, 7000.0);
}

#[test]
fn healthcare_with_no_retirees_is_empty() {
    let costs = healthcare_costs_in_retirement(&sample(), 5.0, "Pensioner").unwrap();
    assert!(costs.is_empty());
}

#[test]
fn filtered_rows_hold_the_predicate_on_generated_data() {
    let table = generated_table(9, 40);
    let rows = end_of_life_retiree_rows(&table, 5.0, RETIRED).unwrap();
    assert!(!rows.is_empty(), "generated retirees should reach their final years");

    let ages = table.numeric_column("Age").unwrap();
    let life = table.numeric_column("Life_Expectancy").unwrap();
    let status = table.text_column("Employment_Status").unwrap();
    for &r in &rows {
        assert!(ages[r].unwrap() >= life[r].unwrap() - 5.0, "row {r} outside window");
        assert_eq!(status[r], RETIRED, "row {r} not retired");
    }
}
