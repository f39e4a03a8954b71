#![allow(missing_docs)]

use segregation::simulation::cell::Cell;
use segregation::simulation::error::Error;
use segregation::simulation::world::{World, is_valid_location};

use Cell::{Blue as B, Empty as E, Red as R};

#[test]
fn test_is_valid_location() {
    let size = 3;

    assert!(is_valid_location(size, 0, 0));
    assert!(is_valid_location(size, 2, 2));
    assert!(is_valid_location(size, 1, 2));

    assert!(!is_valid_location(size, -1, 0));
    assert!(!is_valid_location(size, 0, -1));
    assert!(!is_valid_location(size, 0, 3));
    assert!(!is_valid_location(size, 3, 0));
    assert!(!is_valid_location(0, 0, 0));
}

#[test]
fn test_from_rows() {
    let world = World::from_rows(vec![vec![R, R, E], vec![E, B, E], vec![R, E, B]])
        .expect("rows are square");

    assert_eq!(world.dim(), 3);
    assert_eq!(world.n_cells(), 9);
    assert_eq!(world.get(0, 1), R);
    assert_eq!(world.get(1, 1), B);
    assert_eq!(world.get(2, 1), E);
    assert_eq!(world.count(R), 3);
    assert_eq!(world.count(B), 2);
    assert_eq!(world.count(E), 4);
}

#[test]
fn test_from_rows_rejects_non_square() {
    let result = World::from_rows(vec![vec![R, R], vec![B]]);
    assert!(matches!(result, Err(Error::NotSquare { rows: 2, cols: 1 })));

    let result = World::from_rows(vec![vec![R, R, B], vec![B, B, R]]);
    assert!(matches!(result, Err(Error::NotSquare { rows: 2, cols: 3 })));
}

#[test]
fn test_moore_neighbours_skip_out_of_bounds() {
    let world = World::filled(3, R);

    assert_eq!(world.moore_neighbours(0, 0).count(), 3);
    assert_eq!(world.moore_neighbours(0, 1).count(), 5);
    assert_eq!(world.moore_neighbours(1, 1).count(), 8);
    assert_eq!(world.moore_neighbours(2, 2).count(), 3);
}

#[test]
fn test_get_checked_and_set() {
    let mut world = World::filled(2, E);
    world.set(1, 0, B);

    assert_eq!(world.get_checked(1, 0), Some(B));
    assert_eq!(world.get_checked(-1, 0), None);
    assert_eq!(world.get_checked(0, 2), None);
}

#[test]
fn test_locations_of_is_row_major() {
    let world = World::from_rows(vec![vec![R, R, E], vec![E, B, E], vec![R, E, B]]).unwrap();

    let reds: Vec<_> = world.locations_of(R).collect();
    assert_eq!(reds, vec![(0, 0), (0, 1), (2, 0)]);
}

#[test]
fn test_display() {
    let world = World::from_rows(vec![vec![R, E], vec![E, B]]).unwrap();
    assert_eq!(world.to_string(), "R.\n.B\n");
}
