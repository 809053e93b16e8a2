//! Registry implementation.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::{GameConfig, GameError, GameRng};
use crate::game::{GameSnapshot, UnoGame};

/// Identifier for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game:{}", self.0)
    }
}

/// Registry failures. Engine failures pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    #[error("all {capacity} session ids are in use")]
    Full { capacity: u32 },

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Session ids are drawn from `0..capacity`.
    pub capacity: u32,

    /// Seed for id selection and for each new game's RNG.
    pub seed: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { capacity: 100, seed: 0 }
    }
}

type SharedGame = Arc<RwLock<UnoGame>>;

/// Thread-safe table of live games.
///
/// ```
/// use uno_engine::registry::{GameRegistry, RegistryConfig};
/// use uno_engine::Uid;
///
/// let registry = GameRegistry::new(RegistryConfig::default());
/// let id = registry.create().unwrap();
///
/// registry.with_game(id, |game| game.add_player("A", Uid::new(1))).unwrap();
/// registry.with_game(id, |game| game.start()).unwrap();
///
/// let snapshot = registry.snapshot(id).unwrap();
/// assert_eq!(snapshot.players[0].card_count, 7);
/// ```
pub struct GameRegistry {
    config: RegistryConfig,
    sessions: RwLock<FxHashMap<SessionId, SharedGame>>,
    rng: Mutex<GameRng>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl GameRegistry {
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            rng: Mutex::new(GameRng::new(config.seed)),
            config,
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create a reset game under a fresh id.
    ///
    /// The game's seed is forked from the registry RNG.
    pub fn create(&self) -> Result<SessionId, RegistryError> {
        let seed = self.rng.lock().fork().seed();
        self.create_with(GameConfig::builder().seed(seed).build())
    }

    /// Create a reset game with an explicit configuration.
    pub fn create_with(&self, config: GameConfig) -> Result<SessionId, RegistryError> {
        let mut sessions = self.sessions.write();
        let free: Vec<SessionId> = (0..self.config.capacity)
            .map(SessionId::new)
            .filter(|id| !sessions.contains_key(id))
            .collect();
        let id = self
            .rng
            .lock()
            .pick_index(free.len())
            .map(|pos| free[pos])
            .ok_or(RegistryError::Full { capacity: self.config.capacity })?;

        let mut game = UnoGame::new(config);
        game.reset();
        sessions.insert(id, Arc::new(RwLock::new(game)));

        info!(session = %id, live = sessions.len(), "session created");
        Ok(id)
    }

    fn lookup(&self, id: SessionId) -> Result<SharedGame, RegistryError> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::UnknownSession(id))
    }

    /// Run a mutating operation with exclusive access to one game.
    pub fn with_game<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut UnoGame) -> Result<R, GameError>,
    ) -> Result<R, RegistryError> {
        let game = self.lookup(id)?;
        let mut guard = game.write();
        Ok(f(&mut *guard)?)
    }

    /// Run a read-only query under a shared lock.
    pub fn with_game_read<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&UnoGame) -> Result<R, GameError>,
    ) -> Result<R, RegistryError> {
        let game = self.lookup(id)?;
        let guard = game.read();
        Ok(f(&*guard)?)
    }

    /// Public status of one game.
    pub fn snapshot(&self, id: SessionId) -> Result<GameSnapshot, RegistryError> {
        self.with_game_read(id, |game| Ok(game.snapshot()))
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().contains_key(&id)
    }

    /// Drop one session. Returns whether it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            info!(session = %id, "session removed");
        }
        removed
    }

    /// Drop every session.
    pub fn clear(&self) {
        let mut sessions = self.sessions.write();
        let dropped = sessions.len();
        sessions.clear();
        info!(dropped, "sessions cleared");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Live session ids in ascending order.
    #[must_use]
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
