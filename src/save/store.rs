//! Live progression sessions
//!
//! Each online player's state sits behind its own lock, so a
//! read-modify-write by one procedure is never interleaved with another
//! for the same player.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use super::persistence::Persistence;
use super::SaveError;
use crate::progression::{ProgressionError, ProgressionState};
use crate::PlayerId;

/// Shared handle to one player's state
pub type Session = Arc<Mutex<ProgressionState>>;

/// Online players' progression state plus the backend it is saved to
pub struct ProgressionStore {
    sessions: RwLock<HashMap<PlayerId, Session>>,
    backend: Box<dyn Persistence>,
}

impl ProgressionStore {
    pub fn new(backend: impl Persistence + 'static) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            backend: Box::new(backend),
        }
    }

    /// Load a player's saved state, or start fresh if none exists. A save
    /// that cannot be read refuses the session, so nothing is written over it.
    pub fn join(&self, player: PlayerId) -> Result<Session, SaveError> {
        if let Some(session) = self.sessions.read().get(&player) {
            return Ok(session.clone());
        }

        let state = match self.backend.load(player) {
            Ok(Some(state)) => {
                log::info!("Progression loaded for player {}", player);
                state
            }
            Ok(None) => {
                log::info!("Creating new progression for player {}", player);
                ProgressionState::new()
            }
            Err(e) => {
                log::error!("Failed to load progression for player {}: {}", player, e);
                return Err(e);
            }
        };

        Ok(self
            .sessions
            .write()
            .entry(player)
            .or_insert_with(|| Arc::new(Mutex::new(state)))
            .clone())
    }

    /// Save and drop a player's session
    pub fn leave(&self, player: PlayerId) {
        let session = self.sessions.write().remove(&player);
        if let Some(session) = session {
            let mut state = session.lock();
            self.persist(player, &mut state);
        }
    }

    pub fn session(&self, player: PlayerId) -> Result<Session, ProgressionError> {
        self.sessions
            .read()
            .get(&player)
            .cloned()
            .ok_or(ProgressionError::UnknownPlayer(player))
    }

    pub fn is_online(&self, player: PlayerId) -> bool {
        self.sessions.read().contains_key(&player)
    }

    pub fn online(&self) -> usize {
        self.sessions.read().len()
    }

    /// Save a state the caller has locked. Failures are logged and the
    /// state stays modified so the next flush retries it.
    pub fn persist(&self, player: PlayerId, state: &mut ProgressionState) -> bool {
        match self.backend.save(player, state) {
            Ok(()) => {
                state.modified = false;
                true
            }
            Err(e) => {
                log::warn!("Failed to save progression for player {}: {}", player, e);
                state.modified = true;
                false
            }
        }
    }

    /// Save every modified session, returning how many were written
    pub fn flush_modified(&self) -> usize {
        let sessions: Vec<(PlayerId, Session)> = self
            .sessions
            .read()
            .iter()
            .map(|(player, session)| (*player, session.clone()))
            .collect();

        sessions
            .into_iter()
            .filter(|(player, session)| {
                let mut state = session.lock();
                state.modified && self.persist(*player, &mut state)
            })
            .count()
    }
}
