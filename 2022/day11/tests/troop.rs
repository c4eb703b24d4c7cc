use day11::{Monkey, Relief, Troop};

const LONE_MONKEY: &str = "Monkey 0:
  Starting items: 3
  Operation: new = old + 1
  Test: divisible by 2
    If true: throw to monkey 1
    If false: throw to monkey 1";

#[test]
fn unknown_target_is_rejected() {
    let monkey = Monkey::try_from(LONE_MONKEY).unwrap();

    assert!(Troop::new(vec![monkey]).is_err());
}

#[test]
fn zero_divisor_is_rejected() {
    let text = LONE_MONKEY.replace("divisible by 2", "divisible by 0");

    assert!(Monkey::try_from(text.as_str()).is_err());
}

#[test]
fn items_pass_back_and_forth() {
    let first = Monkey::try_from(LONE_MONKEY).unwrap();
    let second = Monkey::try_from(
        LONE_MONKEY
            .replace("Monkey 0", "Monkey 1")
            .replace("monkey 1", "monkey 0")
            .replace("Starting items: 3", "Starting items:")
            .as_str(),
    )
    .unwrap();
    let mut troop = Troop::new(vec![first, second]).unwrap();

    // 3 -> (3 + 1) / 3 = 1 goes to monkey 1, then (1 + 1) / 3 = 0 comes back.
    troop.play(1, Relief::DivideByThree);

    assert_eq!(troop.monkey_business(), 1);
}
