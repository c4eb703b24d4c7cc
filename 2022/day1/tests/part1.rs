use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("24000"));
}

#[test]
fn part1_fails_on_missing_input() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("no_such_input.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
