#![cfg(feature = "std")]
//! Append-only session event log with per-player fan-out.
//!
//! Every accepted state transition appends one record; records are
//! sequence-numbered from 0 and immutable once written. Subscribers get
//! the full backlog first, then live records, in log order. Delivery is
//! fire-and-forget relative to the mutating call: the append is
//! synchronous, the flush to each subscriber channel is not awaited.

use log::debug;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::common::{PlayerRole, ShotResult};

/// A state-changing outcome visible to both players. Payloads identify
/// players by role and never carry fleet layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum GameEvent {
    PlayerJoined {
        player: PlayerRole,
    },
    PlacementAccepted {
        player: PlayerRole,
    },
    ShotResult {
        by: PlayerRole,
        shot: [u8; 2],
        result: ShotResult,
        fleet_destroyed: bool,
    },
    GameOver {
        winner: PlayerRole,
    },
}

/// One log entry: `{seq, type, payload}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub seq: u64,
    #[serde(flatten)]
    pub event: GameEvent,
}

/// A subscriber's ordered view of a session: backlog, then live events.
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<EventRecord>,
}

impl EventStream {
    /// Next record, waiting for a live one if the backlog is drained.
    /// Returns `None` once the session has been reclaimed.
    pub async fn next(&mut self) -> Option<EventRecord> {
        self.rx.recv().await
    }

    /// Next already-delivered record without waiting.
    pub fn try_next(&mut self) -> Option<EventRecord> {
        self.rx.try_recv().ok()
    }
}

/// The per-session log and its subscriber channels. Mutated only under
/// the owning session's lock, which is what makes backlog-then-live
/// ordering airtight.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
    subscribers: [Vec<mpsc::UnboundedSender<EventRecord>>; 2],
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record and fan it out. Subscribers whose stream has
    /// been dropped are pruned here.
    pub fn append(&mut self, event: GameEvent) -> u64 {
        let seq = self.records.len() as u64;
        let record = EventRecord { seq, event };
        self.records.push(record.clone());
        for subs in self.subscribers.iter_mut() {
            let before = subs.len();
            subs.retain(|tx| tx.send(record.clone()).is_ok());
            if subs.len() < before {
                debug!("pruned {} closed event subscriber(s)", before - subs.len());
            }
        }
        seq
    }

    /// Register a subscriber for `role`. The backlog is queued into the
    /// channel before registration, so a mid-game subscriber replays the
    /// full history before any live record.
    pub fn subscribe(&mut self, role: PlayerRole) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        for record in &self.records {
            // An unbounded send only fails if the receiver is gone, and
            // we still hold it.
            let _ = tx.send(record.clone());
        }
        self.subscribers[role.index()].push(tx);
        EventStream { rx }
    }

    /// All records appended so far.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
