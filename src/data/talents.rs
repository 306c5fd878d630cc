//! Talent definitions and the cost curve
//!
//! Loaded from RON so the talent economy can be tuned without a rebuild.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::progression::{ProgressionState, RollTuning};

/// A permanent upgrade bought with talent points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentDef {
    /// Unique talent ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    pub description: String,
    /// Talents that must be owned before this one can be bought
    #[serde(default)]
    pub requires: Vec<String>,
}

/// Talent price as a function of how many talents are already owned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCurve {
    /// Same price for every talent
    Flat(u32),
    /// `base + step * owned`
    Linear { base: u32, step: u32 },
    /// Price by owned count; the last entry repeats
    Table(Vec<u32>),
}

impl CostCurve {
    pub fn cost(&self, owned: usize) -> u32 {
        match self {
            CostCurve::Flat(n) => *n,
            CostCurve::Linear { base, step } => {
                let owned = u32::try_from(owned).unwrap_or(u32::MAX);
                base.saturating_add(step.saturating_mul(owned))
            }
            CostCurve::Table(prices) => prices
                .get(owned)
                .or_else(|| prices.last())
                .copied()
                .unwrap_or(0),
        }
    }

    /// Prices never drop as more talents are owned
    pub fn is_non_decreasing(&self) -> bool {
        match self {
            CostCurve::Flat(_) | CostCurve::Linear { .. } => true,
            CostCurve::Table(prices) => prices.windows(2).all(|w| w[0] <= w[1]),
        }
    }
}

impl Default for CostCurve {
    fn default() -> Self {
        CostCurve::Linear { base: 1, step: 1 }
    }
}

/// Everything that defines the talent economy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentData {
    #[serde(default)]
    pub roll: RollTuning,
    #[serde(default)]
    pub cost: CostCurve,
    pub talents: Vec<TalentDef>,
}

impl TalentData {
    /// Find a talent by ID
    pub fn find(&self, id: &str) -> Option<&TalentDef> {
        self.talents.iter().find(|t| t.id == id)
    }

    /// Price of the next talent for a player
    pub fn cost_for(&self, state: &ProgressionState) -> u32 {
        self.cost.cost(state.talent_count())
    }

    /// Every prerequisite of `talent` is owned
    pub fn can_access(&self, state: &ProgressionState, talent: &TalentDef) -> bool {
        talent.requires.iter().all(|id| state.has_talent(id))
    }

    /// Talents the player could buy right now if they had the points
    pub fn available<'a>(&'a self, state: &'a ProgressionState) -> impl Iterator<Item = &'a TalentDef> + 'a {
        self.talents
            .iter()
            .filter(move |t| !state.has_talent(&t.id) && self.can_access(state, t))
    }

    /// Check ids are unique, prerequisites exist and prices never drop
    pub fn validate(&self) -> Result<(), super::DataError> {
        use super::DataError;

        if !self.cost.is_non_decreasing() {
            return Err(DataError::NonMonotonicCost);
        }
        let mut seen = HashSet::new();
        for talent in &self.talents {
            if !seen.insert(talent.id.as_str()) {
                return Err(DataError::DuplicateTalent(talent.id.clone()));
            }
        }
        for talent in &self.talents {
            if let Some(missing) = talent.requires.iter().find(|id| !seen.contains(id.as_str())) {
                return Err(DataError::UnknownPrerequisite {
                    talent: talent.id.clone(),
                    requires: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for TalentData {
    fn default() -> Self {
        default_talent_data()
    }
}

fn talent(id: &str, name: &str, description: &str, requires: &[&str]) -> TalentDef {
    TalentDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        requires: requires.iter().map(|r| r.to_string()).collect(),
    }
}

/// Create the default talent tree (hardcoded fallback)
pub fn default_talent_data() -> TalentData {
    TalentData {
        roll: RollTuning::default(),
        cost: CostCurve::default(),
        talents: vec![
            // === Mining ===
            talent("mine_magnet", "Ore Magnet", "Mined drops fly to you", &[]),
            talent("super_vision", "Super Vision", "See ores through stone", &["mine_magnet"]),
            talent("deep_vision", "Deep Vision", "See further through stone", &["super_vision"]),
            talent("silk_strip", "Silk Strip", "Strip ores with a silk touch pickaxe", &["mine_magnet"]),
            // === Combat ===
            talent("searing", "Searing", "Burning foes take more damage", &[]),
            talent("pyromaniac", "Pyromaniac", "Fire spreads to nearby foes", &["searing"]),
            talent("denial", "Denial", "Slowed foes cannot heal", &[]),
            // === Farming ===
            talent("green_thumb", "Green Thumb", "Crops grow in a wider radius", &[]),
            talent("gold_harvest", "Golden Harvest", "Chance of golden crops", &["green_thumb"]),
            // === Fishing ===
            talent("lucky_lure", "Lucky Lure", "Treasure bites more often", &[]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    #[test]
    fn test_cost_curves() {
        assert_eq!(CostCurve::Flat(3).cost(0), 3);
        assert_eq!(CostCurve::Flat(3).cost(12), 3);
        let linear = CostCurve::Linear { base: 1, step: 2 };
        assert_eq!(linear.cost(0), 1);
        assert_eq!(linear.cost(3), 7);
        let table = CostCurve::Table(vec![1, 1, 2, 5]);
        assert_eq!(table.cost(2), 2);
        assert_eq!(table.cost(40), 5);
        assert_eq!(CostCurve::Table(vec![]).cost(0), 0);
    }

    #[test]
    fn test_default_data_is_valid() {
        let data = default_talent_data();
        assert!(data.validate().is_ok());
        assert!(data.find("super_vision").is_some());
        assert!(data.find("nope").is_none());
    }

    #[test]
    fn test_validation_failures() {
        let mut data = default_talent_data();
        data.cost = CostCurve::Table(vec![3, 2]);
        assert_eq!(data.validate(), Err(DataError::NonMonotonicCost));

        let mut data = default_talent_data();
        data.talents.push(talent("searing", "Again", "", &[]));
        assert_eq!(data.validate(), Err(DataError::DuplicateTalent("searing".to_string())));

        let mut data = default_talent_data();
        data.talents.push(talent("orphan", "Orphan", "", &["missing"]));
        assert!(matches!(data.validate(), Err(DataError::UnknownPrerequisite { .. })));
    }

    #[test]
    fn test_access_follows_prerequisites() {
        let data = default_talent_data();
        let mut state = ProgressionState::new();
        let vision = data.find("super_vision").unwrap();
        assert!(!data.can_access(&state, vision));
        state.talents.insert("mine_magnet".to_string());
        assert!(data.can_access(&state, vision));

        let available: Vec<_> = data.available(&state).map(|t| t.id.as_str()).collect();
        assert!(available.contains(&"super_vision"));
        assert!(!available.contains(&"mine_magnet"));
        assert!(!available.contains(&"deep_vision"));
    }
}
