//! Integration tests for RuleForge

use ruleforge::{
    derive, load_transactions, mine, write_report, Itemset, LoadOptions, MiningError, Thresholds,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a labeled test CSV file with survey-style records
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "AGE_GROUP,BOROUGH,VEHICLE").unwrap();

    writeln!(file, "25-44,BRONX,SEDAN").unwrap();
    writeln!(file, "25-44,BRONX,SEDAN").unwrap();
    writeln!(file, "25-44,QUEENS,SEDAN").unwrap();
    writeln!(file, "45-64,BRONX,").unwrap();
    writeln!(file, ",,").unwrap();

    file
}

/// Create a headerless CSV file with the basket scenario
fn create_basket_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A,B").unwrap();
    writeln!(file, "A,B,C").unwrap();
    writeln!(file, "A").unwrap();
    writeln!(file, "B,C").unwrap();
    file
}

#[test]
fn test_end_to_end_basket() {
    let test_file = create_basket_csv();

    let data = load_transactions(test_file.path(), LoadOptions { labeled: false }).unwrap();
    assert_eq!(data.len(), 4);

    let frequent = mine(&data.transactions, 0.5);
    let expected = [
        (Itemset::singleton("A"), 0.75),
        (Itemset::singleton("B"), 0.75),
        (Itemset::singleton("C"), 0.5),
        (Itemset::new(["A", "B"]), 0.5),
        (Itemset::new(["B", "C"]), 0.5),
    ];
    assert_eq!(frequent.len(), expected.len());
    for (itemset, support) in &expected {
        assert_eq!(frequent.support(itemset), Some(*support), "{itemset}");
    }
    assert!(!frequent.contains(&Itemset::new(["A", "C"])));
    assert!(!frequent.contains(&Itemset::new(["A", "B", "C"])));

    let rules = derive(&frequent, 0.8).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].antecedent, Itemset::singleton("C"));
    assert_eq!(rules[0].consequent, Itemset::singleton("B"));
    assert_eq!(rules[0].support, 0.5);
    assert_eq!(rules[0].confidence, 1.0);
}

#[test]
fn test_labeled_pipeline_and_report() {
    let test_file = create_test_csv();

    let data = load_transactions(test_file.path(), LoadOptions::default()).unwrap();
    assert_eq!(data.len(), 4);

    let thresholds = Thresholds::new(0.5, 0.9).unwrap();
    let frequent = mine(&data.transactions, thresholds.min_support());

    let age_sedan = Itemset::new(["AGE_GROUP=25-44", "VEHICLE=SEDAN"]);
    assert_eq!(frequent.support(&age_sedan), Some(0.75));
    assert_eq!(
        frequent.support(&Itemset::new(["AGE_GROUP=25-44", "BOROUGH=BRONX", "VEHICLE=SEDAN"])),
        Some(0.5)
    );

    let rules = derive(&frequent, thresholds.min_confidence()).unwrap();
    assert!(rules.iter().all(|rule| rule.confidence >= 0.9));
    assert!(rules.iter().any(|rule| rule.antecedent == Itemset::singleton("VEHICLE=SEDAN")
        && rule.consequent == Itemset::singleton("AGE_GROUP=25-44")));

    let mut buffer = Vec::new();
    write_report(&mut buffer, &frequent, &rules, &thresholds).unwrap();
    let report = String::from_utf8(buffer).unwrap();

    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("==Frequent itemsets (min_sup=50.00%)"));
    assert_eq!(lines.next(), Some("[AGE_GROUP=25-44], 75.00%"));
    assert!(report.contains("==High-confidence association rules (min_conf=90.00%)"));
    assert!(report.contains("[VEHICLE=SEDAN] => [AGE_GROUP=25-44] (Conf: 100.00%, Supp: 75.00%)"));
}

#[test]
fn test_error_handling_empty_dataset() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "AGE_GROUP,BOROUGH").unwrap();

    let err = load_transactions(file.path(), LoadOptions::default()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MiningError>(),
        Some(&MiningError::EmptyDataset)
    );
}

#[test]
fn test_error_handling_invalid_thresholds() {
    assert!(Thresholds::new(1.5, 0.5).is_err());
    assert!(Thresholds::new(0.5, -0.1).is_err());
    assert!(Thresholds::new(0.5, 0.5).is_ok());
}

#[test]
fn test_rerun_is_identical() {
    let test_file = create_test_csv();
    let data = load_transactions(test_file.path(), LoadOptions::default()).unwrap();

    let first = mine(&data.transactions, 0.25);
    let second = mine(&data.transactions, 0.25);
    assert_eq!(first, second);

    assert_eq!(derive(&first, 0.5).unwrap(), derive(&second, 0.5).unwrap());
}
