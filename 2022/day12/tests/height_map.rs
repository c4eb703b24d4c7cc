use day12::HeightMap;

#[test]
fn unreachable_summit_gives_no_steps() {
    let map = HeightMap::try_from("SacE").unwrap();

    assert_eq!(map.fewest_steps_from_start(), None);
    assert_eq!(map.fewest_steps_from_lowest(), None);
}

#[test]
fn climbs_at_most_one_level_per_step() {
    // The only way up is the ramp along the first row.
    let map = HeightMap::try_from("Sbcdefghijklmnopqrstuvwxy\nzzzzzzzzzzzzzzzzzzzzzzzzE").unwrap();

    assert_eq!(map.fewest_steps_from_start(), Some(25));
}

#[test]
fn lowest_start_may_differ_from_marked_start() {
    let map = HeightMap::try_from("SbbbbbabcdefghijklmnopqrstuvwxyE").unwrap();

    assert_eq!(map.fewest_steps_from_start(), Some(31));
    assert_eq!(map.fewest_steps_from_lowest(), Some(25));
}

#[test]
fn missing_marks_are_rejected() {
    assert!(HeightMap::try_from("abc\ndef").is_err());
    assert!(HeightMap::try_from("SbE\nSbc").is_err());
}
