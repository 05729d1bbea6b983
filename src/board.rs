//! Per-player board state: the placed fleet and opponent fire against it.

use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::{EngineError, ProtocolError, ShotResult};
use crate::config::{BOARD_SIZE, TOTAL_SHIP_CELLS};
use crate::fleet::{validate_fleet, Coord, Fleet};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Outcome of a single resolved shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub coord: Coord,
    pub result: ShotResult,
    /// True when this shot hit the last unhit cell of the whole fleet.
    pub fleet_destroyed: bool,
}

/// One player's private grid: fleet placement plus the opponent's shot
/// history against it. The fleet is immutable once accepted.
#[derive(Debug, Clone, Default)]
pub struct Board {
    fleet: Option<Fleet>,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board with no placement.
    pub fn new() -> Self {
        Board {
            fleet: None,
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// True once a placement has been accepted.
    pub fn is_ready(&self) -> bool {
        self.fleet.is_some()
    }

    /// The accepted fleet, if placed.
    pub fn fleet(&self) -> Option<&Fleet> {
        self.fleet.as_ref()
    }

    /// Accept a fleet layout. Validation happens atomically: on failure
    /// the board stays unplaced and the caller may retry. A second call
    /// fails with `AlreadyPlaced` and mutates nothing, even for an
    /// identical layout.
    pub fn place(&mut self, layout: &[Vec<(i64, i64)>]) -> Result<(), EngineError> {
        if self.fleet.is_some() {
            return Err(ProtocolError::AlreadyPlaced.into());
        }
        self.fleet = Some(validate_fleet(layout)?);
        Ok(())
    }

    /// Resolve an incoming shot. Re-firing at any previously fired cell
    /// fails with `DuplicateShot` and changes nothing.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotReport, EngineError> {
        let fleet = match &self.fleet {
            Some(fleet) => fleet,
            None => return Err(ProtocolError::NotYourPhase.into()),
        };
        let (row, col) = (coord.row(), coord.col());
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(ProtocolError::DuplicateShot.into());
        }

        let result = match fleet.ship_at(coord) {
            Some((_, ship)) => {
                self.hits.set(row, col)?;
                if (ship.mask() & !self.hits).is_empty() {
                    ShotResult::Sunk {
                        length: ship.length(),
                    }
                } else {
                    ShotResult::Hit
                }
            }
            None => {
                self.misses.set(row, col)?;
                ShotResult::Miss
            }
        };

        Ok(ShotReport {
            coord,
            result,
            fleet_destroyed: self.all_sunk(),
        })
    }

    /// True when every cell of every placed ship has been hit.
    pub fn all_sunk(&self) -> bool {
        self.fleet.is_some() && self.hits.count_ones() == TOTAL_SHIP_CELLS
    }

    /// Mask of opponent hits against this board.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Mask of opponent misses against this board.
    pub fn misses(&self) -> BB {
        self.misses
    }
}
