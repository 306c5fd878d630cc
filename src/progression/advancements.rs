//! Advancements for talent progression
//!
//! The talent procedures report every point and unlock here. A reporter
//! that shows its own toast says so, and the caller skips its own cue.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

use crate::PlayerId;

/// Receives talent progression events
pub trait AdvancementReporter {
    /// Record a talent point (`None`) or an unlocked talent.
    ///
    /// Returns true if the reporter already gave the player feedback.
    fn give(&self, player: PlayerId, talent: Option<&str>) -> bool;
}

/// Advancement granted for the first talent point ever
pub const FIRST_POINT: &str = "talent_point";

/// In-memory advancement ledger.
///
/// The first talent point and the first unlock of each talent are
/// advancements; repeating them grants nothing.
#[derive(Debug, Default)]
pub struct AdvancementLedger {
    granted: Mutex<HashMap<PlayerId, HashSet<String>>>,
}

impl AdvancementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advancement id for an event
    pub fn key(talent: Option<&str>) -> String {
        match talent {
            Some(id) => format!("talent:{}", id),
            None => FIRST_POINT.to_string(),
        }
    }

    pub fn has(&self, player: PlayerId, key: &str) -> bool {
        self.granted
            .lock()
            .get(&player)
            .map(|keys| keys.contains(key))
            .unwrap_or(false)
    }

    pub fn count(&self, player: PlayerId) -> usize {
        self.granted.lock().get(&player).map(HashSet::len).unwrap_or(0)
    }
}

impl AdvancementReporter for AdvancementLedger {
    fn give(&self, player: PlayerId, talent: Option<&str>) -> bool {
        let key = Self::key(talent);
        let newly = self.granted.lock().entry(player).or_default().insert(key.clone());
        if newly {
            log::info!("Advancement granted to player {}: {}", player, key);
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_is_handled_once() {
        let ledger = AdvancementLedger::new();
        assert!(ledger.give(1, None));
        assert!(!ledger.give(1, None));
        assert!(ledger.give(2, None));
        assert!(ledger.has(1, FIRST_POINT));
    }

    #[test]
    fn test_talents_are_tracked_separately() {
        let ledger = AdvancementLedger::new();
        assert!(ledger.give(1, Some("deep_pockets")));
        assert!(ledger.give(1, Some("keen_eye")));
        assert!(!ledger.give(1, Some("keen_eye")));
        assert_eq!(ledger.count(1), 2);
        assert_eq!(ledger.count(9), 0);
    }
}
