//! Skill categories and per-skill level records

use serde::{Deserialize, Serialize};

use super::xp::points_for_level;

/// A progression track with its own bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillType {
    Mining,
    Combat,
    Farming,
    Fishing,
}

impl SkillType {
    pub const ALL: [SkillType; 4] = [
        SkillType::Mining,
        SkillType::Combat,
        SkillType::Farming,
        SkillType::Fishing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillType::Mining => "Mining",
            SkillType::Combat => "Combat",
            SkillType::Farming => "Farming",
            SkillType::Fishing => "Fishing",
        }
    }
}

/// A player's standing in one skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub level: u32,
    /// Points earned within the current level
    pub points: u32,
}

/// One segment of a gain, as it should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainStep {
    /// Fill from `from` to `to` out of `max` at `level`
    Fill { level: u32, from: u32, to: u32, max: u32 },
    /// `level` was just reached
    LevelUp { level: u32 },
}

impl SkillRecord {
    pub fn required(&self) -> u32 {
        points_for_level(self.level)
    }

    /// Add points, rolling over level boundaries.
    ///
    /// Returns the animation steps in order: for every boundary crossed a
    /// fill to the top followed by a level-up, then the remainder.
    pub fn add(&mut self, amount: u32) -> Vec<GainStep> {
        let mut steps = Vec::new();
        if amount == 0 {
            return steps;
        }

        let mut remaining = amount;
        loop {
            let required = self.required();
            let from = self.points;
            let room = required.saturating_sub(from);
            if remaining < room {
                self.points += remaining;
                steps.push(GainStep::Fill { level: self.level, from, to: self.points, max: required });
                break;
            }

            remaining -= room;
            steps.push(GainStep::Fill { level: self.level, from, to: required, max: required });
            self.level += 1;
            self.points = 0;
            steps.push(GainStep::LevelUp { level: self.level });
            if remaining == 0 {
                break;
            }
        }
        steps
    }
}
