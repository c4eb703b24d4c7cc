use day10::Instruction;

#[test]
fn x_changes_after_addx_completes() {
    let program = [
        Instruction::Noop,
        Instruction::AddX(3),
        Instruction::AddX(-5),
    ];

    assert_eq!(day10::x_during_cycles(&program), vec![1, 1, 1, 4, 4]);
}

#[test]
fn parses_instructions() {
    assert_eq!(Instruction::try_from("addx -11").unwrap(), Instruction::AddX(-11));
    assert_eq!(Instruction::try_from("noop").unwrap(), Instruction::Noop);
    assert!(Instruction::try_from("addx").is_err());
    assert!(Instruction::try_from("mul 3").is_err());
}
