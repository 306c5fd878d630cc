//! Progression systems
//!
//! Skill levels, talent points and talent unlocks.

pub mod xp;
pub mod skills;
pub mod state;
pub mod roll;
pub mod talents;
pub mod points;
pub mod advancements;
pub mod error;

pub use skills::{SkillType, SkillRecord, GainStep};
pub use state::{ProgressionState, STATE_VERSION};
pub use roll::{RollTuning, RollOutcome};
pub use talents::Talents;
pub use points::SkillPoints;
pub use advancements::{AdvancementReporter, AdvancementLedger};
pub use error::ProgressionError;
