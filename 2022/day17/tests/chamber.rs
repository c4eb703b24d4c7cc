use day17::Chamber;

const EXAMPLE_JETS: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

#[test]
fn first_rocks_stack_up() {
    let chamber = Chamber::new(EXAMPLE_JETS).unwrap();

    assert_eq!(chamber.clone().tower_height(1), 1);
    assert_eq!(chamber.clone().tower_height(2), 4);
    assert_eq!(chamber.tower_height(10), 17);
}

#[test]
fn skipping_cycles_matches_full_simulation() {
    let chamber = Chamber::new(EXAMPLE_JETS).unwrap();
    let mut simulated = chamber.clone();
    for _ in 0..5000 {
        simulated.drop_rock();
    }

    assert_eq!(chamber.tower_height(5000), simulated.height() as u64);
}

#[test]
fn invalid_jet_is_rejected() {
    assert!(Chamber::new("<>x").is_err());
    assert!(Chamber::new("\n").is_err());
}
