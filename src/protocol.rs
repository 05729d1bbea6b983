#![cfg(feature = "std")]
//! Wire-facing request/response types and boundary decoding.
//!
//! An HTTP/SSE binding is an external adapter over these DTOs and
//! [`EventStream`](crate::EventStream). The placement payload arrives as
//! a dynamic JSON value and is schema-checked here, before any geometry
//! rule runs: shape or type mismatches are `InvalidPayload`, distinct
//! from the geometry errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::ShotReport;
use crate::common::{ShotResult, ValidationError};
use crate::fleet::RawLayout;
use crate::registry::{GameId, PlayerId};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinGameResponse {
    pub player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct PlacementRequest {
    pub player_id: PlayerId,
    /// Nested coordinate lists of client-controlled shape; decode with
    /// [`decode_position`].
    pub position: Value,
}

#[derive(Debug, Deserialize)]
pub struct ShotRequest {
    pub player_id: PlayerId,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotResponse {
    pub shot: [u8; 2],
    pub hit: bool,
    pub sunk: bool,
    pub length: usize,
    pub fleet_destroyed: bool,
}

impl From<&ShotReport> for ShotResponse {
    fn from(report: &ShotReport) -> Self {
        let (hit, sunk, length) = match report.result {
            ShotResult::Miss => (false, false, 0),
            ShotResult::Hit => (true, false, 0),
            ShotResult::Sunk { length } => (true, true, length),
        };
        ShotResponse {
            shot: [report.coord.x(), report.coord.y()],
            hit,
            sunk,
            length,
            fleet_destroyed: report.fleet_destroyed,
        }
    }
}

/// Strictly decode a dynamic placement payload into the raw layout the
/// validator takes. Accepts only an array of arrays of two-integer
/// pairs; anything else is `InvalidPayload`. Range checking is the
/// validator's job, so out-of-board integers pass through here.
pub fn decode_position(value: &Value) -> Result<RawLayout, ValidationError> {
    let ships = value.as_array().ok_or(ValidationError::InvalidPayload)?;
    let mut layout = RawLayout::with_capacity(ships.len());
    for ship in ships {
        let cells = ship.as_array().ok_or(ValidationError::InvalidPayload)?;
        let mut decoded = Vec::with_capacity(cells.len());
        for cell in cells {
            let pair = cell.as_array().ok_or(ValidationError::InvalidPayload)?;
            if pair.len() != 2 {
                return Err(ValidationError::InvalidPayload);
            }
            let x = pair[0].as_i64().ok_or(ValidationError::InvalidPayload)?;
            let y = pair[1].as_i64().ok_or(ValidationError::InvalidPayload)?;
            decoded.push((x, y));
        }
        layout.push(decoded);
    }
    Ok(layout)
}
