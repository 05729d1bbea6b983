//! Common types: player roles, shot results, and the error taxonomy.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Which seat a player occupies within a session. The first joiner is A,
/// the second is B. Roles, never id tokens, appear in event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerRole {
    A,
    B,
}

impl PlayerRole {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerRole::A => PlayerRole::B,
            PlayerRole::B => PlayerRole::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerRole::A => 0,
            PlayerRole::B => 1,
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRole::A => write!(f, "A"),
            PlayerRole::B => write!(f, "B"),
        }
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShotResult {
    /// Shot missed every ship.
    Miss,
    /// Shot hit a ship that still has unhit cells.
    Hit,
    /// Shot hit the last unhit cell of a ship, carrying its length.
    Sunk { length: usize },
}

/// Placement rejections: schema or geometry. Always recoverable, the
/// caller may resubmit a corrected fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload shape mismatch before any geometry check (non-array
    /// nesting, non-integer coordinate, wrong pair arity).
    InvalidPayload,
    /// A coordinate falls outside [1,10]×[1,10].
    OutOfBounds,
    /// Ship count or length multiset differs from {5,4,3,3,2}.
    InvalidFleetComposition,
    /// A ship is not a gapless straight line of unique cells.
    MalformedShip,
    /// Two ships share a cell.
    ShipsOverlap,
    /// Cells of two different ships are 8-neighbors.
    ShipsTouching,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPayload => write!(f, "Placement payload does not match the expected schema"),
            ValidationError::OutOfBounds => write!(f, "Coordinate is outside the 10x10 board"),
            ValidationError::InvalidFleetComposition => {
                write!(f, "Fleet must contain exactly 5 ships of lengths 5, 4, 3, 3, 2")
            }
            ValidationError::MalformedShip => write!(f, "Ship cells must form a gapless straight line"),
            ValidationError::ShipsOverlap => write!(f, "Two ships share a cell"),
            ValidationError::ShipsTouching => write!(f, "Ships of different hulls may not touch, diagonals included"),
        }
    }
}

/// Requests that are well-formed but illegal in the session's current
/// state. These never corrupt the session; the client corrects and
/// retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// The session already has two players.
    GameFull,
    /// The board already holds an accepted placement.
    AlreadyPlaced,
    /// The operation does not belong to the session's current phase.
    NotYourPhase,
    /// A shot from the player not on turn.
    NotYourTurn,
    /// A shot at a cell that was already fired at.
    DuplicateShot,
    /// The session is finished.
    GameOver,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::GameFull => write!(f, "Game already has two players"),
            ProtocolError::AlreadyPlaced => write!(f, "Fleet is already placed and immutable"),
            ProtocolError::NotYourPhase => write!(f, "Operation is not valid in the current phase"),
            ProtocolError::NotYourTurn => write!(f, "It is the other player's turn"),
            ProtocolError::DuplicateShot => write!(f, "Cell was already fired at"),
            ProtocolError::GameOver => write!(f, "Game is finished"),
        }
    }
}

/// Top-level engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Unknown game id or player id (possibly a reclaimed session).
    NotFound,
    /// Phase, turn, or capacity violation.
    Protocol(ProtocolError),
    /// Placement schema or geometry violation.
    Validation(ValidationError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotFound => write!(f, "Unknown game or player id"),
            EngineError::Protocol(e) => write!(f, "{}", e),
            EngineError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl From<ProtocolError> for EngineError {
    fn from(err: ProtocolError) -> Self {
        EngineError::Protocol(err)
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Validation(err)
    }
}

impl From<BitBoardError> for ValidationError {
    fn from(_: BitBoardError) -> Self {
        ValidationError::OutOfBounds
    }
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        EngineError::Validation(err.into())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
