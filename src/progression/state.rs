//! Per-player progression state
//!
//! Everything the talent and skill procedures read and write for one
//! player. Serialized as-is by the persistence layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::skills::{SkillRecord, SkillType};

/// Current state version for compatibility
pub const STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionState {
    /// Version for compatibility checking
    pub version: u32,
    /// Banked talent points
    pub talent_points: u32,
    /// Miss counter raising the odds of the next talent point roll
    pub talent_chance: u32,
    /// Unlocked talent ids
    pub talents: BTreeSet<String>,
    /// Level and points per skill
    pub skills: BTreeMap<SkillType, SkillRecord>,
    /// Changed since the last successful save
    #[serde(skip)]
    pub modified: bool,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            talent_points: 0,
            talent_chance: 0,
            talents: BTreeSet::new(),
            skills: BTreeMap::new(),
            modified: false,
        }
    }
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_talent(&self, talent: &str) -> bool {
        self.talents.contains(talent)
    }

    pub fn talent_count(&self) -> usize {
        self.talents.len()
    }

    /// Owns no talents and has none banked
    pub fn is_fresh(&self) -> bool {
        self.talents.is_empty() && self.talent_points == 0
    }

    pub fn skill(&self, skill: SkillType) -> SkillRecord {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    pub fn skill_mut(&mut self, skill: SkillType) -> &mut SkillRecord {
        self.skills.entry(skill).or_default()
    }
}
