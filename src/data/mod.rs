//! Data loading and external game content
//!
//! Talent definitions and tuning live in RON files so the economy can be
//! changed without touching code.

pub mod loader;
pub mod talents;

use thiserror::Error;

pub use loader::{load_talent_data, load_talent_data_or_default, parse_talent_data, TALENT_DATA_PATH};
pub use talents::{CostCurve, TalentData, TalentDef, default_talent_data};

/// Problems with a data file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("talent cost table decreases")]
    NonMonotonicCost,
    #[error("duplicate talent id: {0}")]
    DuplicateTalent(String),
    #[error("talent {talent} requires unknown talent {requires}")]
    UnknownPrerequisite { talent: String, requires: String },
}
