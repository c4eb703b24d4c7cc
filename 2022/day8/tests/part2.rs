use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 8."));
}

#[test]
fn part2_rejects_ragged_map() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.arg("tests/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 3 column(s) in each row, given 2."));
}
