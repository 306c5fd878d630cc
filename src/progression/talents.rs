//! Talent points and talent unlocks
//!
//! Skill activity rolls for talent points with odds that climb after each
//! miss. Points are banked and spent on talents from the talent tree.

use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

use super::advancements::AdvancementReporter;
use super::error::ProgressionError;
use super::roll;
use super::state::ProgressionState;
use crate::audio::{Cue, FeedbackEmitter};
use crate::data::TalentData;
use crate::save::ProgressionStore;
use crate::PlayerId;

/// Balance and price right after points were credited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Credit {
    points: u32,
    cost: u32,
}

/// Talent point awards and talent purchases
pub struct Talents<R = StdRng> {
    data: TalentData,
    store: Arc<ProgressionStore>,
    feedback: Arc<dyn FeedbackEmitter>,
    advancements: Arc<dyn AdvancementReporter>,
    rng: R,
}

impl<R: Rng> Talents<R> {
    pub fn new(
        data: TalentData,
        store: Arc<ProgressionStore>,
        feedback: Arc<dyn FeedbackEmitter>,
        advancements: Arc<dyn AdvancementReporter>,
        rng: R,
    ) -> Self {
        Self {
            data,
            store,
            feedback,
            advancements,
            rng,
        }
    }

    pub fn data(&self) -> &TalentData {
        &self.data
    }

    pub fn store(&self) -> &Arc<ProgressionStore> {
        &self.store
    }

    /// Buy a talent.
    ///
    /// Returns `Ok(false)` without touching anything if the player cannot
    /// afford it, already owns it, or lacks a prerequisite.
    pub fn unlock(&self, player: PlayerId, talent: &str) -> Result<bool, ProgressionError> {
        let def = self
            .data
            .find(talent)
            .ok_or_else(|| ProgressionError::UnknownTalent(talent.to_string()))?;
        let session = self.store.session(player)?;

        {
            let mut state = session.lock();
            let cost = self.data.cost_for(&state);
            if state.talent_points < cost {
                return Ok(false);
            }
            if state.has_talent(&def.id) {
                return Ok(false);
            }
            if !self.data.can_access(&state, def) {
                return Ok(false);
            }

            state.talent_points -= cost;
            state.talents.insert(def.id.clone());
            state.modified = true;
            self.store.persist(player, &mut state);
            log::info!("Player {} unlocked talent {} for {} points", player, def.id, cost);
        }

        self.advancements.give(player, Some(&def.id));
        Ok(true)
    }

    /// Roll for a talent point after skill activity.
    ///
    /// The miss counter grows by `increase` on every roll. A player who
    /// owns no talents and has none banked always wins half the time.
    pub fn roll_point(&mut self, player: PlayerId, increase: u32) -> Result<bool, ProgressionError> {
        let session = self.store.session(player)?;
        let draw = self.rng.gen_range(0..self.data.roll.total.max(1));

        let credit = {
            let mut state = session.lock();
            let outcome = roll::resolve(
                &self.data.roll,
                state.talent_chance,
                increase,
                state.is_fresh(),
                draw,
            );
            log::debug!(
                "Talent roll for player {}: {} < {} of {} -> {}",
                player,
                draw,
                outcome.chance,
                self.data.roll.total,
                outcome.success
            );

            if !outcome.success {
                state.talent_chance = outcome.counter;
                state.modified = true;
                return Ok(false);
            }
            self.credit(player, &mut state, 1)
        };

        if let Some(credit) = credit {
            self.announce(player, credit);
        }
        Ok(true)
    }

    /// Adjust a player's banked talent points.
    ///
    /// Zero does nothing. Any other amount resets the miss counter and is
    /// saved; only gains are announced. The balance never drops below zero.
    pub fn add_points(&self, player: PlayerId, amount: i32) -> Result<(), ProgressionError> {
        if amount == 0 {
            return Ok(());
        }
        let session = self.store.session(player)?;
        let credit = {
            let mut state = session.lock();
            self.credit(player, &mut state, amount)
        };
        if let Some(credit) = credit {
            self.announce(player, credit);
        }
        Ok(())
    }

    fn credit(&self, player: PlayerId, state: &mut ProgressionState, amount: i32) -> Option<Credit> {
        state.talent_points = state.talent_points.saturating_add_signed(amount);
        state.talent_chance = 0;
        state.modified = true;
        self.store.persist(player, state);
        log::info!("Player {} talent points {:+} -> {}", player, amount, state.talent_points);

        (amount >= 1).then(|| Credit {
            points: state.talent_points,
            cost: self.data.cost_for(state),
        })
    }

    fn announce(&self, player: PlayerId, credit: Credit) {
        let handled = self.advancements.give(player, None);
        if credit.points >= credit.cost {
            if !handled {
                self.feedback.cue(player, Cue::TalentUnlock);
            }
            self.feedback.title(player, "Talent", "New Unlock Available");
        } else {
            if !handled {
                self.feedback.cue(player, Cue::TalentPoint);
            }
            let progress = format!("Progress {}/{}", credit.points, credit.cost);
            self.feedback.title(player, "Talent Points", &progress);
        }
    }
}
