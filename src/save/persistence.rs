//! Progression save backends
//!
//! One JSON document per player on disk, or a plain map in memory.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use super::SaveError;
use crate::progression::{ProgressionState, STATE_VERSION};
use crate::PlayerId;

/// Where progression state is loaded from and saved to
pub trait Persistence: Send + Sync {
    /// Load a player's state, `None` if the player has never been saved
    fn load(&self, player: PlayerId) -> Result<Option<ProgressionState>, SaveError>;

    fn save(&self, player: PlayerId, state: &ProgressionState) -> Result<(), SaveError>;
}

impl<P: Persistence + ?Sized> Persistence for Arc<P> {
    fn load(&self, player: PlayerId) -> Result<Option<ProgressionState>, SaveError> {
        (**self).load(player)
    }

    fn save(&self, player: PlayerId, state: &ProgressionState) -> Result<(), SaveError> {
        (**self).save(player, state)
    }
}

/// Get the default player save directory
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "skillforge", "Skillforge") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("players");
        path
    } else {
        PathBuf::from("./players")
    }
}

/// Pretty JSON files, one per player
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    dir: PathBuf,
}

impl JsonPersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save into the per-user data directory
    pub fn in_data_dir() -> Self {
        Self::new(save_directory())
    }

    /// Get the path for a specific player
    pub fn player_path(&self, player: PlayerId) -> PathBuf {
        self.dir.join(format!("player_{}.json", player))
    }
}

impl Persistence for JsonPersistence {
    fn load(&self, player: PlayerId) -> Result<Option<ProgressionState>, SaveError> {
        let path = self.player_path(player);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path).map_err(|e| SaveError::Io(e.to_string()))?;
        let state: ProgressionState =
            serde_json::from_str(&data).map_err(|e| SaveError::Parse(e.to_string()))?;

        if state.version != STATE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: STATE_VERSION,
                found: state.version,
            });
        }
        Ok(Some(state))
    }

    fn save(&self, player: PlayerId, state: &ProgressionState) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir).map_err(|e| SaveError::Io(e.to_string()))?;
        let json = serde_json::to_string_pretty(state).map_err(|e| SaveError::Parse(e.to_string()))?;
        fs::write(self.player_path(player), json).map_err(|e| SaveError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Keeps saves in memory. Can be told to fail every save.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: Mutex<HashMap<PlayerId, ProgressionState>>,
    saves: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following save fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Last successfully saved state for a player
    pub fn saved(&self, player: PlayerId) -> Option<ProgressionState> {
        self.saved.lock().get(&player).cloned()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self, player: PlayerId) -> Result<Option<ProgressionState>, SaveError> {
        Ok(self.saved(player))
    }

    fn save(&self, player: PlayerId, state: &ProgressionState) -> Result<(), SaveError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SaveError::Io("save rejected".to_string()));
        }
        self.saved.lock().insert(player, state.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::SkillType;
    use tempfile::TempDir;

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let backend = JsonPersistence::new(dir.path().join("players"));
        assert_eq!(backend.load(5).unwrap(), None);

        let mut state = ProgressionState::new();
        state.talent_points = 4;
        state.talent_chance = 17;
        state.talents.insert("searing".to_string());
        state.skill_mut(SkillType::Combat).points = 33;
        backend.save(5, &state).unwrap();

        let loaded = backend.load(5).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_json_version_mismatch() {
        let dir = TempDir::new().unwrap();
        let backend = JsonPersistence::new(dir.path());
        let mut state = ProgressionState::new();
        state.version = STATE_VERSION + 1;
        backend.save(1, &state).unwrap();

        assert_eq!(
            backend.load(1),
            Err(SaveError::VersionMismatch { expected: STATE_VERSION, found: STATE_VERSION + 1 })
        );
    }

    #[test]
    fn test_json_parse_error() {
        let dir = TempDir::new().unwrap();
        let backend = JsonPersistence::new(dir.path());
        fs::write(backend.player_path(2), "{ not json").unwrap();
        assert!(matches!(backend.load(2), Err(SaveError::Parse(_))));
    }

    #[test]
    fn test_memory_failing_saves() {
        let backend = MemoryPersistence::new();
        let state = ProgressionState::new();
        backend.set_failing(true);
        assert!(backend.save(1, &state).is_err());
        assert_eq!(backend.save_count(), 0);
        backend.set_failing(false);
        backend.save(1, &state).unwrap();
        assert_eq!(backend.save_count(), 1);
        assert_eq!(backend.saved(1), Some(state));
    }
}
