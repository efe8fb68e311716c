use predicates::prelude::*;
use std::fs;

#[test]
fn sensitivity_prints_ranked_variables_and_writes_rows() {
    let output_file = assert_fs::NamedTempFile::new("sensitivity.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("bizcase");
    cmd.args(["sensitivity", "-o", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Variable | Min Impact | Max Impact | Range"))
        .stdout(predicate::str::contains("Leakage Prevention | -355.3 | -59.2 | 296.1"))
        .stdout(predicate::str::contains("Sensitivity rows written to"));

    let rows = fs::read_to_string(output_file.path()).unwrap();
    assert_eq!(rows.matches("- variable:").count(), 25);
    assert!(rows.contains("value: '+0%'") || rows.contains("value: +0%"));
}
