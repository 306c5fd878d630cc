//! Adaptive talent point odds
//!
//! Pure roll arithmetic. Every miss raises a counter; the counter, minus a
//! small grace, is the number of winning draws out of `total`.

use serde::{Deserialize, Serialize};

/// Odds parameters for talent point rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTuning {
    /// Size of the sample space
    pub total: u32,
    /// Winning draws while the player owns nothing and has nothing banked
    pub catch_up_chance: u32,
    /// Counter value below which a roll can never win
    pub grace: u32,
    /// Upper bound on winning draws
    pub cap: u32,
}

impl Default for RollTuning {
    fn default() -> Self {
        Self {
            total: 800,
            catch_up_chance: 400,
            grace: 5,
            cap: 400,
        }
    }
}

impl RollTuning {
    /// Winning draws for a miss counter
    pub fn chance(&self, counter: u32, catch_up: bool) -> u32 {
        let chance = if catch_up {
            self.catch_up_chance
        } else {
            counter.saturating_sub(self.grace).min(self.cap)
        };
        chance.min(self.total)
    }

    /// Success probability for a miss counter, in [0, 1]
    pub fn probability(&self, counter: u32, catch_up: bool) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.chance(counter, catch_up) as f64 / self.total as f64
    }
}

/// Result of one roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    /// Winning draws the roll was made against
    pub chance: u32,
    /// The miss counter after the roll
    pub counter: u32,
    pub success: bool,
}

/// Resolve a roll for a known `draw` in `[0, total)`.
///
/// The counter grows by `increase` before the odds are read. A win
/// resets it to zero since the award that follows clears it.
pub fn resolve(tuning: &RollTuning, counter: u32, increase: u32, catch_up: bool, draw: u32) -> RollOutcome {
    let raised = counter.saturating_add(increase);
    let chance = tuning.chance(raised, catch_up);
    let success = draw < chance;
    RollOutcome {
        chance,
        counter: if success { 0 } else { raised },
        success,
    }
}
