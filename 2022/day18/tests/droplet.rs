use day18::{Cube, Droplet};

#[test]
fn two_adjacent_cubes_share_a_face() {
    let droplet = Droplet::new([Cube::new(1, 1, 1), Cube::new(2, 1, 1)]);

    assert_eq!(droplet.surface_area(), 10);
    assert_eq!(droplet.exterior_surface_area(), 10);
}

#[test]
fn enclosed_pocket_only_counts_outside() {
    // A 3x3x3 block with the center removed.
    let cubes = (0..3)
        .flat_map(|x| (0..3).flat_map(move |y| (0..3).map(move |z| Cube::new(x, y, z))))
        .filter(|c| *c != Cube::new(1, 1, 1));
    let droplet = Droplet::new(cubes);

    assert_eq!(droplet.surface_area(), 54 + 6);
    assert_eq!(droplet.exterior_surface_area(), 54);
}

#[test]
fn empty_droplet_has_no_surface() {
    let droplet = Droplet::new(Vec::<Cube>::new());

    assert_eq!(droplet.surface_area(), 0);
    assert_eq!(droplet.exterior_surface_area(), 0);
}

#[test]
fn malformed_cube_is_rejected() {
    assert!(Cube::try_from("1,2").is_err());
    assert!(Cube::try_from("1,2,x").is_err());
}
