//! Shared fixtures for unit tests

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::audio::{Cue, FeedbackEmitter};
use crate::data::{default_talent_data, TalentData};
use crate::progression::{AdvancementLedger, SkillPoints, Talents};
use crate::save::{MemoryPersistence, ProgressionStore};
use crate::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Cue(PlayerId, Cue),
    Title(PlayerId, String, String),
}

/// Remembers every cue and title in order
#[derive(Debug, Default)]
pub(crate) struct RecordingFeedback {
    events: Mutex<Vec<Event>>,
}

impl RecordingFeedback {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

impl FeedbackEmitter for RecordingFeedback {
    fn cue(&self, player: PlayerId, cue: Cue) {
        self.events.lock().push(Event::Cue(player, cue));
    }

    fn title(&self, player: PlayerId, title: &str, subtitle: &str) {
        self.events
            .lock()
            .push(Event::Title(player, title.to_string(), subtitle.to_string()));
    }
}

/// An in-memory world with player 1 online
pub(crate) struct Fixture {
    pub(crate) store: Arc<ProgressionStore>,
    pub(crate) backend: Arc<MemoryPersistence>,
    pub(crate) feedback: Arc<RecordingFeedback>,
    pub(crate) advancements: Arc<AdvancementLedger>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let backend = Arc::new(MemoryPersistence::new());
        let store = Arc::new(ProgressionStore::new(backend.clone()));
        store.join(1).unwrap();
        Self {
            store,
            backend,
            feedback: Arc::new(RecordingFeedback::default()),
            advancements: Arc::new(AdvancementLedger::new()),
        }
    }

    pub(crate) fn talents(&self, seed: u64) -> Talents<StdRng> {
        self.talents_with(seed, default_talent_data())
    }

    pub(crate) fn talents_with(&self, seed: u64, data: TalentData) -> Talents<StdRng> {
        Talents::new(
            data,
            self.store.clone(),
            self.feedback.clone(),
            self.advancements.clone(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub(crate) fn skill_points(&self) -> SkillPoints {
        SkillPoints::new(self.store.clone(), self.feedback.clone())
    }
}
