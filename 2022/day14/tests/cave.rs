use day14::{Bottom, Cave};

#[test]
fn lone_rock_lets_every_grain_slide_off() {
    let mut cave = Cave::new();
    cave.add_rock_path("500,2 -> 500,2").unwrap();

    assert_eq!(cave.pour_sand(Bottom::Abyss), 0);
}

#[test]
fn floor_fills_a_triangle() {
    let mut cave = Cave::new();
    // Rock far to the side only sets the floor depth: floor at y = 4.
    cave.add_rock_path("600,2 -> 600,2").unwrap();

    // Rows 0..=3 of a pyramid under the source: 1 + 3 + 5 + 7 grains.
    assert_eq!(cave.pour_sand(Bottom::Floor), 16);
}

#[test]
fn diagonal_segments_are_rejected() {
    let mut cave = Cave::new();

    assert!(cave.add_rock_path("498,4 -> 499,5").is_err());
    assert!(cave.add_rock_path("498 -> 499,5").is_err());
}
