//! Feedback system
//!
//! One-shot sound cues and on-screen titles for progression events.

pub mod manager;
pub mod sounds;
pub mod feedback;

pub use manager::AudioManager;
pub use sounds::SoundId;
pub use feedback::{Cue, FeedbackEmitter, AudioFeedback, Title};
