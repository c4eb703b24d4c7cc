use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day9_part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("visits 1 positions"));
}

#[test]
fn part2_output_right_answer_on_larger_example() {
    let mut cmd = Command::cargo_bin("day9_part2").unwrap();
    cmd.arg("example_larger.txt");

    cmd.assert().success().stdout(str::contains("visits 36 positions"));
}
