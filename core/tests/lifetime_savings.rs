//! Lifetime contribution vs withdrawal per individual.

use pension_core::{
    generator::{write_csv, GeneratorConfig, PopulationGenerator},
    lifetime_analysis::lifetime_contribution_vs_withdrawal,
    table::{DataTable, GroupKey},
};

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

#[test]
fn sums_and_net_savings_for_one_individual() {
    let csv = "\
Individual_ID,Contribution,Withdrawal
A,100,30
A,50,10
";
    let table = DataTable::from_reader(csv.as_bytes()).unwrap();
    let totals = lifetime_contribution_vs_withdrawal(&table).unwrap();

    assert_eq!(totals.len(), 1);
    let a = &totals[0];
    assert_eq!(a.individual_id, GroupKey::from("A"));
    assert_eq!(a.contribution, 150.0);
    assert_eq!(a.withdrawal, 40.0);
    assert_eq!(a.net_savings, 110.0);
}

#[test]
fn missing_values_count_as_nothing() {
    let csv = "\
Individual_ID,Contribution,Withdrawal
7,,
7,25,
8,,
";
    let table = DataTable::from_reader(csv.as_bytes()).unwrap();
    let totals = lifetime_contribution_vs_withdrawal(&table).unwrap();

    assert_eq!(totals[0].contribution, 25.0);
    assert_eq!(totals[0].withdrawal, 0.0);
    assert_eq!(totals[1].net_savings, 0.0, "all-missing individual sums to zero");
}

/// One entry per individual, ids ascending, net savings always the
/// difference of the two sums.
#[test]
fn net_savings_is_contribution_minus_withdrawal() {
    let table = generated_table(21, 25);
    let totals = lifetime_contribution_vs_withdrawal(&table).unwrap();
    assert_eq!(totals.len(), 25);

    let ids: Vec<f64> = totals
        .iter()
        .filter_map(|t| t.individual_id.as_number())
        .collect();
    assert_eq!(ids, (1..=25).map(f64::from).collect::<Vec<_>>());

    for t in &totals {
        assert_eq!(t.net_savings, t.contribution - t.withdrawal);
        assert!(t.contribution >= 0.0 && t.withdrawal >= 0.0);
    }
}
