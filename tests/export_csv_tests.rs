use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn export_csv_writes_one_row_per_scenario() {
    let output_file = assert_fs::NamedTempFile::new("business_case.csv").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("bizcase");
    cmd.args(["export-csv", "-c", "eur", "-o", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario comparison written to"));

    output_file.assert(predicate::path::exists());
    let csv = fs::read_to_string(output_file.path()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Scenario,Total Annual Benefit,Working Capital"));
    assert!(lines[0].ends_with("3-Year NPV,Payback Months,3-Year ROI,Currency"));
    assert!(lines[1].starts_with("Best Case,"));
    assert!(lines[2].starts_with("Base Case,"));
    assert!(lines[3].starts_with("Worst Case,"));
    assert!(lines[1..].iter().all(|line| line.ends_with(",EUR")));
}
