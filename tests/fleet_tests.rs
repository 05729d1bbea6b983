use armada::{validate_fleet, ValidationError};

fn layout(ships: &[&[(i64, i64)]]) -> Vec<Vec<(i64, i64)>> {
    ships.iter().map(|cells| cells.to_vec()).collect()
}

/// The standard well-spaced fleet used throughout the suites: one ship
/// per odd column, one empty column between hulls.
fn spaced_fleet() -> Vec<Vec<(i64, i64)>> {
    layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
        &[(9, 2), (9, 3)],
    ])
}

#[test]
fn test_valid_fleet_accepted() {
    let fleet = validate_fleet(&spaced_fleet()).unwrap();
    assert_eq!(fleet.ships().len(), 5);
    assert_eq!(fleet.occupancy().count_ones(), 17);
    let lengths: Vec<usize> = fleet.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
}

#[test]
fn test_submission_order_irrelevant() {
    let mut ships = spaced_fleet();
    ships.reverse();
    assert!(validate_fleet(&ships).is_ok());
}

#[test]
fn test_horizontal_ships_accepted() {
    // Same fleet transposed: one ship per odd row.
    let transposed: Vec<Vec<(i64, i64)>> = spaced_fleet()
        .iter()
        .map(|ship| ship.iter().map(|&(x, y)| (y, x)).collect())
        .collect();
    assert!(validate_fleet(&transposed).is_ok());
}

#[test]
fn test_ships_touching_rejected() {
    // Hulls stacked in adjacent columns.
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(2, 2), (2, 3), (2, 4), (2, 5)],
        &[(3, 2), (3, 3), (3, 4)],
        &[(4, 2), (4, 3), (4, 4)],
        &[(5, 2), (5, 3)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::ShipsTouching));
}

#[test]
fn test_diagonal_touch_rejected() {
    // The destroyer's (8,7) is a diagonal neighbor of (7,6).
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 4), (7, 5), (7, 6)],
        &[(8, 7), (8, 8)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::ShipsTouching));
}

#[test]
fn test_too_few_ships_rejected() {
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
    ]);
    assert_eq!(
        validate_fleet(&ships),
        Err(ValidationError::InvalidFleetComposition)
    );
}

#[test]
fn test_wrong_length_multiset_rejected() {
    // Five ships, but the second 3-hull is only 2 long.
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3)],
        &[(9, 2), (9, 3)],
    ]);
    assert_eq!(
        validate_fleet(&ships),
        Err(ValidationError::InvalidFleetComposition)
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
        &[(11, 2), (11, 3)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::OutOfBounds));
}

#[test]
fn test_negative_coordinate_rejected() {
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
        &[(-2, 2), (-2, 3)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::OutOfBounds));
}

#[test]
fn test_zero_coordinate_rejected() {
    let mut ships = spaced_fleet();
    ships[4] = vec![(9, 0), (9, 1)];
    assert_eq!(validate_fleet(&ships), Err(ValidationError::OutOfBounds));
}

#[test]
fn test_gap_inside_ship_rejected() {
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 5), (1, 6), (1, 7)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
        &[(9, 2), (9, 3)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::MalformedShip));
}

#[test]
fn test_bent_ship_rejected() {
    let mut ships = spaced_fleet();
    ships[2] = vec![(5, 2), (5, 3), (6, 3)];
    assert_eq!(validate_fleet(&ships), Err(ValidationError::MalformedShip));
}

#[test]
fn test_duplicate_cell_in_ship_rejected() {
    let mut ships = spaced_fleet();
    ships[4] = vec![(9, 2), (9, 2)];
    assert_eq!(validate_fleet(&ships), Err(ValidationError::MalformedShip));
}

#[test]
fn test_overlap_rejected() {
    // The destroyer reuses (7,4) from the third cruiser.
    let ships = layout(&[
        &[(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)],
        &[(3, 2), (3, 3), (3, 4), (3, 5)],
        &[(5, 2), (5, 3), (5, 4)],
        &[(7, 2), (7, 3), (7, 4)],
        &[(7, 4), (8, 4)],
    ]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::ShipsOverlap));
}

#[test]
fn test_bounds_reported_before_composition() {
    // A single out-of-board ship: bounds is the first rule checked.
    let ships = layout(&[&[(11, 1), (11, 2)]]);
    assert_eq!(validate_fleet(&ships), Err(ValidationError::OutOfBounds));
}

#[test]
fn test_overlap_reported_before_touching() {
    // Overlapping hulls are necessarily also "touching"; the overlap
    // rule runs first.
    let mut ships = spaced_fleet();
    ships[4] = vec![(7, 4), (8, 4)];
    assert_eq!(validate_fleet(&ships), Err(ValidationError::ShipsOverlap));
}
