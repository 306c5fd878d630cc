//! Skillforge - skill progress bars and talent progression
//!
//! Tick-driven progress bars per skill, adaptive talent point rolls,
//! and talent unlocks gated by cost and prerequisites.

pub mod bar;
pub mod progression;
pub mod audio;
pub mod data;
pub mod save;
pub mod game;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

/// Identifies a connected player
pub type PlayerId = u64;

// Re-export commonly used types
pub use bar::{ProgressBar, PlayerBars};
pub use progression::{SkillType, Talents, SkillPoints, ProgressionError};
pub use save::ProgressionStore;
