use day4::{Assignment, Pair};

#[test]
fn single_section_inside_range_is_contained() {
    let pair = Pair::new(Assignment::new(6, 6), Assignment::new(4, 6));

    assert!(pair.one_contains_other());
    assert!(pair.overlaps());
}

#[test]
fn touching_ranges_overlap_without_containment() {
    let pair = Pair::try_from("5-7,7-9").unwrap();

    assert!(!pair.one_contains_other());
    assert!(pair.overlaps());
}

#[test]
fn reversed_bounds_are_normalized() {
    assert_eq!(Assignment::new(8, 2), Assignment::new(2, 8));
}

#[test]
fn malformed_pair_is_rejected() {
    assert!(Pair::try_from("2-4;6-8").is_err());
}
