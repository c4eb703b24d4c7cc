use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part2").unwrap();
    cmd.args(["example.txt", "--bound", "20"]);

    cmd.assert().success().stdout(str::contains("is 56000011."));
}

#[test]
fn part2_report_fully_covered_area() {
    let mut cmd = Command::cargo_bin("day15_part2").unwrap();
    cmd.args(["example.txt", "--bound", "5"]);

    cmd.assert()
        .success()
        .stderr(str::contains("is covered by some sensor"));
}
