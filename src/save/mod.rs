//! Save/load system
//!
//! Keeps online players' progression state and writes it to a backend.

pub mod persistence;
pub mod store;

use thiserror::Error;

pub use persistence::{Persistence, JsonPersistence, MemoryPersistence, save_directory};
pub use store::{ProgressionStore, Session};

/// Save error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
