//! Fleet layout validation and the validated fleet model.
//!
//! A placement arrives as a nested coordinate list and is either accepted
//! whole or rejected with the first failing rule; nothing partial is ever
//! stored. Accepted ships carry occupancy masks so the board can resolve
//! shots with bitwise tests.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::ValidationError;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// A raw, not-yet-validated fleet layout as decoded from a client payload:
/// one coordinate list per ship.
pub type RawLayout = Vec<Vec<(i64, i64)>>;

/// A board coordinate, 1-indexed on both axes. Constructible only through
/// [`Coord::try_new`], so a held value is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Validate and construct a coordinate. `(0, _)`, `(11, _)` and
    /// negative values are rejected.
    pub fn try_new(x: i64, y: i64) -> Result<Self, ValidationError> {
        let range = 1..=BOARD_SIZE as i64;
        if range.contains(&x) && range.contains(&y) {
            Ok(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(ValidationError::OutOfBounds)
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// 0-indexed bitboard row.
    pub(crate) fn row(self) -> usize {
        (self.y - 1) as usize
    }

    /// 0-indexed bitboard column.
    pub(crate) fn col(self) -> usize {
        (self.x - 1) as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A validated ship: its cells plus the occupancy mask they form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    mask: BB,
}

impl Ship {
    /// The ship's cells in submission order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.cells.len()
    }
}

/// A complete validated fleet of [`NUM_SHIPS`] ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Union occupancy mask of the whole fleet.
    pub fn occupancy(&self) -> BB {
        let mut all = BB::new();
        for ship in &self.ships {
            all |= ship.mask;
        }
        all
    }

    /// The ship occupying `coord`, if any, with its fleet index.
    pub fn ship_at(&self, coord: Coord) -> Option<(usize, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.mask.get(coord.row(), coord.col()).unwrap_or(false))
    }
}

/// Validate a raw layout into a [`Fleet`].
///
/// Rules are checked in a fixed order and the first failure is reported:
/// bounds, fleet composition, per-ship shape, overlap, adjacency. The
/// whole fleet is judged atomically.
pub fn validate_fleet(layout: &[Vec<(i64, i64)>]) -> Result<Fleet, ValidationError> {
    // 1. Every coordinate must sit on the board.
    let mut ships_cells: Vec<Vec<Coord>> = Vec::with_capacity(layout.len());
    for ship in layout {
        let mut cells = Vec::with_capacity(ship.len());
        for &(x, y) in ship {
            cells.push(Coord::try_new(x, y)?);
        }
        ships_cells.push(cells);
    }

    // 2. Exactly NUM_SHIPS ships with the configured length multiset.
    if ships_cells.len() != NUM_SHIPS {
        return Err(ValidationError::InvalidFleetComposition);
    }
    let mut lengths: Vec<usize> = ships_cells.iter().map(|cells| cells.len()).collect();
    lengths.sort_unstable();
    let mut required = FLEET_LENGTHS;
    required.sort_unstable();
    if lengths != required {
        return Err(ValidationError::InvalidFleetComposition);
    }

    // 3. Each ship is a gapless straight line of unique cells.
    for cells in &ships_cells {
        check_shape(cells)?;
    }

    // 4. No cell reused across ships.
    let mut ships: Vec<Ship> = Vec::with_capacity(NUM_SHIPS);
    let mut occupied = BB::new();
    for cells in ships_cells {
        let mut mask = BB::new();
        for c in &cells {
            mask.set(c.row(), c.col())?;
        }
        if !(occupied & mask).is_empty() {
            return Err(ValidationError::ShipsOverlap);
        }
        occupied |= mask;
        ships.push(Ship { cells, mask });
    }

    // 5. No cell of one ship within Chebyshev distance 1 of another ship.
    for ship in &ships {
        let others = occupied & !ship.mask;
        if !(ship.mask.dilated() & others).is_empty() {
            return Err(ValidationError::ShipsTouching);
        }
    }

    Ok(Fleet { ships })
}

fn check_shape(cells: &[Coord]) -> Result<(), ValidationError> {
    let vertical = cells.iter().all(|c| c.x == cells[0].x);
    let horizontal = cells.iter().all(|c| c.y == cells[0].y);
    if !vertical && !horizontal {
        return Err(ValidationError::MalformedShip);
    }
    // Along the varying axis the cells must be consecutive; an equal pair
    // (duplicate cell) fails the same rule.
    let mut line: Vec<u8> = cells
        .iter()
        .map(|c| if vertical { c.y } else { c.x })
        .collect();
    line.sort_unstable();
    for pair in line.windows(2) {
        if pair[1] != pair[0] + 1 {
            return Err(ValidationError::MalformedShip);
        }
    }
    Ok(())
}
