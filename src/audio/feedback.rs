//! Feedback emitters
//!
//! Progression procedures announce points, unlocks and level-ups through
//! a `FeedbackEmitter`. The audio-backed emitter plays a sound per cue and
//! buffers titles until the front end draws them.

use parking_lot::Mutex;

use super::manager::AudioManager;
use super::sounds::SoundId;
use crate::PlayerId;

/// One-shot feedback events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A talent point was gained
    TalentPoint,
    /// A new talent can be unlocked
    TalentUnlock,
    /// A skill level was reached
    LevelUp,
}

impl Cue {
    pub fn sound(&self) -> SoundId {
        match self {
            Cue::TalentPoint => SoundId::TalentPoint,
            Cue::TalentUnlock => SoundId::TalentUnlock,
            Cue::LevelUp => SoundId::LevelUp,
        }
    }
}

/// A large on-screen message for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub player: PlayerId,
    pub title: String,
    pub subtitle: String,
}

/// Delivers cues and titles to players
pub trait FeedbackEmitter {
    fn cue(&self, player: PlayerId, cue: Cue);

    fn title(&self, player: PlayerId, title: &str, subtitle: &str);
}

/// Plays cues through the audio manager and queues titles for display
pub struct AudioFeedback {
    audio: Mutex<AudioManager>,
    titles: Mutex<Vec<Title>>,
}

impl AudioFeedback {
    pub fn new(audio: AudioManager) -> Self {
        Self {
            audio: Mutex::new(audio),
            titles: Mutex::new(Vec::new()),
        }
    }

    /// Take every title queued since the last call
    pub fn drain_titles(&self) -> Vec<Title> {
        std::mem::take(&mut *self.titles.lock())
    }
}

impl FeedbackEmitter for AudioFeedback {
    fn cue(&self, player: PlayerId, cue: Cue) {
        log::debug!("Cue {:?} for player {}", cue, player);
        self.audio.lock().play(cue.sound());
    }

    fn title(&self, player: PlayerId, title: &str, subtitle: &str) {
        self.titles.lock().push(Title {
            player,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        });
    }
}
