#![cfg(feature = "std")]
//! The per-game state machine: two player slots, placement gating, the
//! turn marker, and the event log.
//!
//! A session is always mutated under a single lock held by the registry
//! entry, so the methods here are plain synchronous state transitions.
//! Every rejected operation leaves the session untouched.

use std::time::Instant;

use crate::board::{Board, ShotReport};
use crate::common::{EngineError, PlayerRole, ProtocolError};
use crate::config::RetentionPolicy;
use crate::events::{EventLog, EventRecord, EventStream, GameEvent};
use crate::fleet::Coord;
use crate::registry::PlayerId;

/// Macro-state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForSecondPlayer,
    Placement,
    InPlay,
    Finished,
}

#[derive(Debug)]
struct PlayerSlot {
    id: PlayerId,
    board: Board,
}

impl PlayerSlot {
    fn new(id: PlayerId) -> Self {
        PlayerSlot {
            id,
            board: Board::new(),
        }
    }
}

/// One game: progressively filled player slots, a board per player, the
/// phase machine, and the append-only event log.
#[derive(Debug)]
pub struct GameSession {
    phase: Phase,
    player_a: PlayerSlot,
    player_b: Option<PlayerSlot>,
    turn: PlayerRole,
    winner: Option<PlayerRole>,
    log: EventLog,
    last_activity: Instant,
}

impl GameSession {
    /// Create a session owned by player A. Logs the first record.
    pub fn new(player_a: PlayerId) -> Self {
        let mut log = EventLog::new();
        log.append(GameEvent::PlayerJoined {
            player: PlayerRole::A,
        });
        GameSession {
            phase: Phase::WaitingForSecondPlayer,
            player_a: PlayerSlot::new(player_a),
            player_b: None,
            turn: PlayerRole::A,
            winner: None,
            log,
            last_activity: Instant::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose shot the session currently accepts.
    pub fn turn(&self) -> PlayerRole {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerRole> {
        self.winner
    }

    /// Resolve a player id to its seat.
    pub fn role_of(&self, id: &PlayerId) -> Result<PlayerRole, EngineError> {
        if self.player_a.id == *id {
            Ok(PlayerRole::A)
        } else if self.player_b.as_ref().is_some_and(|slot| slot.id == *id) {
            Ok(PlayerRole::B)
        } else {
            Err(EngineError::NotFound)
        }
    }

    /// Attach the second player. Any later attempt fails with `GameFull`
    /// and does not disturb the existing slot.
    pub fn join(&mut self, player_b: PlayerId) -> Result<(), EngineError> {
        self.touch();
        match self.phase {
            Phase::WaitingForSecondPlayer => {
                self.player_b = Some(PlayerSlot::new(player_b));
                self.phase = Phase::Placement;
                self.log.append(GameEvent::PlayerJoined {
                    player: PlayerRole::B,
                });
                Ok(())
            }
            _ => Err(ProtocolError::GameFull.into()),
        }
    }

    /// Submit a fleet placement for `id`. Only legal during `Placement`;
    /// once both boards are ready the session moves to `InPlay` with
    /// player A on turn.
    pub fn place(&mut self, id: &PlayerId, layout: &[Vec<(i64, i64)>]) -> Result<(), EngineError> {
        self.touch();
        let role = self.role_of(id)?;
        match self.phase {
            Phase::Placement => {}
            Phase::Finished => return Err(ProtocolError::GameOver.into()),
            _ => return Err(ProtocolError::NotYourPhase.into()),
        }
        self.slot_mut(role).board.place(layout)?;
        self.log.append(GameEvent::PlacementAccepted { player: role });
        if self.player_a.board.is_ready()
            && self.player_b.as_ref().is_some_and(|slot| slot.board.is_ready())
        {
            self.phase = Phase::InPlay;
            self.turn = PlayerRole::A;
        }
        Ok(())
    }

    /// Resolve a shot from `id` at `(x, y)` against the opponent's board.
    /// The turn marker flips on every accepted shot, hit or miss; a
    /// duplicate shot is rejected without consuming the turn. Destroying
    /// the opposing fleet finishes the session with the shooter as
    /// winner.
    pub fn shot(&mut self, id: &PlayerId, x: i64, y: i64) -> Result<ShotReport, EngineError> {
        self.touch();
        let role = self.role_of(id)?;
        match self.phase {
            Phase::InPlay => {}
            Phase::Finished => return Err(ProtocolError::GameOver.into()),
            _ => return Err(ProtocolError::NotYourPhase.into()),
        }
        if role != self.turn {
            return Err(ProtocolError::NotYourTurn.into());
        }
        let coord = Coord::try_new(x, y)?;
        let target = role.opponent();
        let report = self.slot_mut(target).board.receive_shot(coord)?;
        self.turn = target;
        self.log.append(GameEvent::ShotResult {
            by: role,
            shot: [coord.x(), coord.y()],
            result: report.result,
            fleet_destroyed: report.fleet_destroyed,
        });
        if report.fleet_destroyed {
            self.phase = Phase::Finished;
            self.winner = Some(role);
            self.log.append(GameEvent::GameOver { winner: role });
        }
        Ok(report)
    }

    /// Subscribe `id` to the session's events: full backlog, then live.
    pub fn subscribe(&mut self, id: &PlayerId) -> Result<EventStream, EngineError> {
        self.touch();
        let role = self.role_of(id)?;
        Ok(self.log.subscribe(role))
    }

    /// All records logged so far.
    pub fn events(&self) -> &[EventRecord] {
        self.log.records()
    }

    /// The board belonging to `role`. Panics only if `role` is B before a
    /// second player joined, which the phase machine rules out for every
    /// caller.
    fn slot_mut(&mut self, role: PlayerRole) -> &mut PlayerSlot {
        match role {
            PlayerRole::A => &mut self.player_a,
            PlayerRole::B => self
                .player_b
                .as_mut()
                .expect("player B slot filled before use"),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// True once the session has outlived its retention window.
    pub fn is_expired(&self, policy: &RetentionPolicy) -> bool {
        let idle = self.last_activity.elapsed();
        match self.phase {
            Phase::Finished => idle > policy.finished,
            _ => idle > policy.idle,
        }
    }
}
