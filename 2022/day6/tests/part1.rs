use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(str::starts_with("7 characters"));
}
