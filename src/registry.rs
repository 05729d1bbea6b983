#![cfg(feature = "std")]
//! Process-wide table of active sessions.
//!
//! The registry is the single creation and lookup point. The table
//! itself sits behind an `RwLock`; each entry is an `Arc<Mutex<_>>` so
//! operations on different games never contend and operations within one
//! game serialize on the session's own lock. Concurrent joins on a
//! nearly-full game therefore resolve deterministically: exactly one
//! caller wins the slot.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::board::ShotReport;
use crate::common::EngineError;
use crate::config::RetentionPolicy;
use crate::events::EventStream;
use crate::session::GameSession;

/// 32 random bytes, hex-encoded. Collision-resistant enough to double as
/// an unguessable capability.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(bytes.as_mut_slice());
    hex::encode(bytes)
}

/// Opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn generate() -> Self {
        GameId(generate_token())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque player identifier, meaningless outside its session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        PlayerId(generate_token())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared handle to one session's lock.
pub type SessionHandle = Arc<Mutex<GameSession>>;

/// Table of live sessions plus the reclaim policy.
#[derive(Debug)]
pub struct Registry {
    games: RwLock<HashMap<GameId, SessionHandle>>,
    policy: RetentionPolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_policy(RetentionPolicy::default())
    }

    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Registry {
            games: RwLock::new(HashMap::new()),
            policy,
        }
    }

    /// Create a fresh session. The caller becomes player A.
    pub async fn create(&self) -> (GameId, PlayerId) {
        let game_id = GameId::generate();
        let player_id = PlayerId::generate();
        let session = GameSession::new(player_id.clone());
        self.games
            .write()
            .await
            .insert(game_id.clone(), Arc::new(Mutex::new(session)));
        info!("created game {}", game_id);
        (game_id, player_id)
    }

    /// Look up a session handle.
    pub async fn get(&self, game_id: &GameId) -> Result<SessionHandle, EngineError> {
        self.games
            .read()
            .await
            .get(game_id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    /// Attach a second player to an existing game.
    pub async fn join(&self, game_id: &GameId) -> Result<PlayerId, EngineError> {
        let session = self.get(game_id).await?;
        let player_id = PlayerId::generate();
        session.lock().await.join(player_id.clone())?;
        debug!("player B joined game {}", game_id);
        Ok(player_id)
    }

    /// Submit a fleet placement.
    pub async fn place(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        layout: &[Vec<(i64, i64)>],
    ) -> Result<(), EngineError> {
        let session = self.get(game_id).await?;
        let mut guard = session.lock().await;
        guard.place(player_id, layout)
    }

    /// Resolve a shot.
    pub async fn shot(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        x: i64,
        y: i64,
    ) -> Result<ShotReport, EngineError> {
        let session = self.get(game_id).await?;
        let mut guard = session.lock().await;
        guard.shot(player_id, x, y)
    }

    /// Subscribe a player to a session's event stream.
    pub async fn subscribe(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<EventStream, EngineError> {
        let session = self.get(game_id).await?;
        let mut guard = session.lock().await;
        guard.subscribe(player_id)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    /// Reclaim sessions past their retention window. Each candidate's
    /// lock is taken before the decision, so teardown never races an
    /// in-flight mutation; the expiry is re-checked under the table's
    /// write lock because an operation may have touched the session in
    /// between. Returns the number of sessions removed.
    pub async fn sweep(&self) -> usize {
        let candidates: Vec<(GameId, SessionHandle)> = self
            .games
            .read()
            .await
            .iter()
            .map(|(id, session)| (id.clone(), session.clone()))
            .collect();

        let mut expired = Vec::new();
        for (id, session) in candidates {
            if session.lock().await.is_expired(&self.policy) {
                expired.push(id);
            }
        }
        if expired.is_empty() {
            return 0;
        }

        let mut games = self.games.write().await;
        let mut removed = 0;
        for id in expired {
            let handle = match games.get(&id) {
                Some(session) => session.clone(),
                None => continue,
            };
            if handle.lock().await.is_expired(&self.policy) {
                games.remove(&id);
                removed += 1;
            }
        }
        if removed > 0 {
            info!("reclaimed {} expired session(s)", removed);
        }
        removed
    }

    /// Periodic sweep loop for a host to spawn.
    pub async fn run_sweeper(self: Arc<Self>, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
