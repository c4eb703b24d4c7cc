use day16::{ValveReport, Volcano};

fn volcano(lines: &[&str]) -> Result<Volcano, day16::Error> {
    let reports = lines
        .iter()
        .map(|line| ValveReport::try_from(*line).unwrap())
        .collect::<Vec<_>>();

    Volcano::new(&reports)
}

#[test]
fn single_valve_one_step_away() {
    let volcano = volcano(&[
        "Valve AA has flow rate=0; tunnel leads to valve BB",
        "Valve BB has flow rate=10; tunnel leads to valve AA",
    ])
    .unwrap();

    // Moving and opening take 2 minutes, then 28 minutes of flow.
    assert_eq!(volcano.max_pressure(30), 280);
    assert_eq!(volcano.max_pressure_in_pair(26), 240);
}

#[test]
fn pair_splits_valves_in_opposite_directions() {
    let volcano = volcano(&[
        "Valve AA has flow rate=0; tunnels lead to valves BB, CC",
        "Valve BB has flow rate=10; tunnel leads to valve AA",
        "Valve CC has flow rate=10; tunnel leads to valve AA",
    ])
    .unwrap();

    // Alone: BB at minute 2, back through AA and open CC at minute 5.
    assert_eq!(volcano.max_pressure(10), 8 * 10 + 5 * 10);
    assert_eq!(volcano.max_pressure_in_pair(10), 8 * 10 * 2);
}

#[test]
fn unreachable_valves_are_skipped() {
    let volcano = volcano(&[
        "Valve AA has flow rate=0; tunnel leads to valve BB",
        "Valve BB has flow rate=5; tunnel leads to valve AA",
        "Valve CC has flow rate=100; tunnel leads to valve CC",
    ])
    .unwrap();

    assert_eq!(volcano.max_pressure(30), 5 * 28);
}

#[test]
fn scan_without_start_valve_is_rejected() {
    assert!(volcano(&["Valve BB has flow rate=5; tunnel leads to valve BB"]).is_err());
}
