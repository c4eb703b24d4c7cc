use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 15."));
}

#[test]
fn part1_rejects_unknown_code() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("tests/bad_code.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid response code(Q)"));
}
