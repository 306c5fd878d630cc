//! Progression error types

use thiserror::Error;

use crate::PlayerId;

/// Precondition violations. Rejected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("player {0} has no loaded progression state")]
    UnknownPlayer(PlayerId),
    #[error("unknown talent: {0}")]
    UnknownTalent(String),
}
