//! Skill point awards
//!
//! Credits skill points to a player's skill record and queues the matching
//! bar animations: a fill for each level segment and a level-up for each
//! boundary crossed.

use std::sync::Arc;

use super::error::ProgressionError;
use super::skills::{GainStep, SkillType};
use crate::audio::{Cue, FeedbackEmitter};
use crate::bar::PlayerBars;
use crate::save::ProgressionStore;

pub struct SkillPoints {
    store: Arc<ProgressionStore>,
    feedback: Arc<dyn FeedbackEmitter>,
}

impl SkillPoints {
    pub fn new(store: Arc<ProgressionStore>, feedback: Arc<dyn FeedbackEmitter>) -> Self {
        Self { store, feedback }
    }

    /// Give skill points to the owner of `bars`, returning the number of
    /// levels gained
    pub fn give(&self, bars: &mut PlayerBars, skill: SkillType, amount: u32) -> Result<u32, ProgressionError> {
        if amount == 0 {
            return Ok(0);
        }
        let player = bars.player();
        let session = self.store.session(player)?;

        let steps = {
            let mut state = session.lock();
            let steps = state.skill_mut(skill).add(amount);
            state.modified = true;
            self.store.persist(player, &mut state);
            steps
        };

        let mut levels = 0;
        let Some(bar) = bars.get_mut(skill) else {
            return Ok(0);
        };
        for step in steps {
            match step {
                GainStep::Fill { level, from, to, max } => bar.skill_points_progress(level, from, to, max),
                GainStep::LevelUp { level } => {
                    levels += 1;
                    log::info!("Player {} reached {} level {}", player, skill.display_name(), level);
                    let feedback = self.feedback.clone();
                    bar.level_up(level, move || {
                        feedback.cue(player, Cue::LevelUp);
                        feedback.title(player, skill.display_name(), &format!("Level {}", level));
                    });
                }
            }
        }
        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::task::LEVEL_UP_STEPS;
    use crate::bar::Task;
    use crate::test_support::{Event, Fixture};

    #[test]
    fn test_give_queues_progress() {
        let fixture = Fixture::new();
        let points = fixture.skill_points();
        let mut bars = PlayerBars::new(1);

        assert_eq!(points.give(&mut bars, SkillType::Mining, 30), Ok(0));
        assert_eq!(points.give(&mut bars, SkillType::Mining, 20), Ok(0));

        let bar = bars.get(SkillType::Mining).unwrap();
        assert_eq!(bar.queue_len(), 1);
        match bar.tasks().next() {
            Some(Task::PointsProgress(task)) => {
                assert_eq!((task.from(), task.to(), task.max()), (0, 50, 100));
            }
            other => panic!("unexpected task {:?}", other),
        }
        let state = fixture.store.session(1).unwrap().lock().clone();
        assert_eq!(state.skill(SkillType::Mining).points, 50);
        assert_eq!(fixture.backend.save_count(), 2);
    }

    #[test]
    fn test_level_up_plays_after_animation() {
        let fixture = Fixture::new();
        let points = fixture.skill_points();
        let mut bars = PlayerBars::new(1);

        assert_eq!(points.give(&mut bars, SkillType::Combat, 110), Ok(1));
        let kinds: Vec<_> = bars
            .get(SkillType::Combat)
            .unwrap()
            .tasks()
            .map(|t| matches!(t, Task::LevelUp(_)))
            .collect();
        assert_eq!(kinds, vec![false, true, false]);
        assert!(fixture.feedback.events().is_empty());

        // 0 -> 100 in steps of 2 is 51 ticks, then the level-up
        for _ in 0..51 + LEVEL_UP_STEPS {
            bars.tick_all();
        }
        assert_eq!(
            fixture.feedback.events(),
            vec![
                Event::Cue(1, Cue::LevelUp),
                Event::Title(1, "Combat".to_string(), "Level 1".to_string()),
            ]
        );
        assert_eq!(bars.get(SkillType::Combat).unwrap().queue_len(), 1);
    }

    #[test]
    fn test_zero_and_unknown_player() {
        let fixture = Fixture::new();
        let points = fixture.skill_points();
        let mut bars = PlayerBars::new(1);
        assert_eq!(points.give(&mut bars, SkillType::Fishing, 0), Ok(0));
        assert_eq!(fixture.backend.save_count(), 0);

        let mut stranger = PlayerBars::new(50);
        assert_eq!(
            points.give(&mut stranger, SkillType::Fishing, 5),
            Err(ProgressionError::UnknownPlayer(50))
        );
    }
}
