//! Progress bar controller
//!
//! Owns one bar per skill category and runs queued tasks strictly one
//! after another. An idle bar stays on screen for a while, then hides.

use std::collections::{HashMap, VecDeque};

use super::resource::{BarColor, BarStyle, SkillBar};
use super::task::{LevelUpTask, PointsProgressTask, Task, TaskStatus};
use crate::progression::SkillType;
use crate::PlayerId;

/// Ticks an idle bar stays visible after its last task
pub const IDLE_LIFESPAN: u32 = 100;

/// Tick-driven controller for a single skill bar
#[derive(Debug)]
pub struct ProgressBar {
    skill: SkillType,
    bar: SkillBar,
    lifespan: u32,
    tasks: VecDeque<Task>,
}

impl ProgressBar {
    pub fn new(skill: SkillType) -> Self {
        Self::with_look(skill, BarColor::Blue, BarStyle::Solid)
    }

    pub fn with_look(skill: SkillType, color: BarColor, style: BarStyle) -> Self {
        Self {
            skill,
            bar: SkillBar::new(skill.display_name(), color, style),
            lifespan: 0,
            tasks: VecDeque::new(),
        }
    }

    pub fn skill(&self) -> SkillType {
        self.skill
    }

    /// Read-only view of the bar for drawing
    pub fn bar(&self) -> &SkillBar {
        &self.bar
    }

    pub fn add_observer(&mut self, player: PlayerId) -> &mut Self {
        self.bar.add_observer(player);
        self
    }

    pub fn remove_observer(&mut self, player: PlayerId) -> &mut Self {
        self.bar.remove_observer(player);
        self
    }

    pub fn clear_observers(&mut self) -> &mut Self {
        self.bar.clear_observers();
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.bar.show();
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.bar.hide();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.bar.set_title(title);
        self
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.bar.set_progress(progress);
    }

    pub fn progress(&self) -> f64 {
        self.bar.progress()
    }

    pub fn lifespan(&self) -> u32 {
        self.lifespan
    }

    pub fn queue_len(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Advance the head task, or count down the idle lifespan.
    ///
    /// Returns false once the bar has nothing left to do: on the tick the
    /// lifespan runs out (the bar is hidden) and on every tick after that.
    pub fn tick(&mut self) -> bool {
        if let Some(task) = self.tasks.front_mut() {
            if task.step(&mut self.bar, self.skill) == TaskStatus::Finished {
                self.tasks.pop_front();
            }
            self.bar.show();
            self.lifespan = IDLE_LIFESPAN;
            true
        } else if self.lifespan > 0 {
            self.lifespan -= 1;
            if self.lifespan == 0 {
                self.bar.hide();
                log::debug!("{} bar went idle", self.skill.display_name());
                return false;
            }
            true
        } else {
            false
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifespan > 0 || !self.tasks.is_empty()
    }

    /// Queue a fill animation, or move the target of the one already
    /// queued for this level.
    pub fn skill_points_progress(&mut self, level: u32, from: u32, to: u32, max: u32) {
        for task in self.tasks.iter_mut() {
            if let Task::PointsProgress(progress) = task {
                if progress.level() == level {
                    progress.retarget(to);
                    return;
                }
            }
        }
        self.tasks
            .push_back(Task::PointsProgress(PointsProgressTask::new(level, from, to, max)));
    }

    /// Queue a level-up animation; `completion` runs when it ends
    pub fn level_up(&mut self, level: u32, completion: impl FnOnce() + 'static) {
        self.tasks
            .push_back(Task::LevelUp(LevelUpTask::new(level, Box::new(completion))));
    }
}

/// All skill bars belonging to one player
#[derive(Debug)]
pub struct PlayerBars {
    player: PlayerId,
    bars: HashMap<SkillType, ProgressBar>,
}

impl PlayerBars {
    /// Create one bar per skill, observed by `player`
    pub fn new(player: PlayerId) -> Self {
        let bars = SkillType::ALL
            .iter()
            .map(|&skill| {
                let mut bar = ProgressBar::new(skill);
                bar.add_observer(player);
                (skill, bar)
            })
            .collect();
        Self { player, bars }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn get(&self, skill: SkillType) -> Option<&ProgressBar> {
        self.bars.get(&skill)
    }

    pub fn get_mut(&mut self, skill: SkillType) -> Option<&mut ProgressBar> {
        self.bars.get_mut(&skill)
    }

    /// Tick every bar, returning how many are still alive
    pub fn tick_all(&mut self) -> usize {
        self.bars.values_mut().map(|bar| bar.tick()).filter(|alive| *alive).count()
    }

    /// Visible bars in skill order
    pub fn visible(&self) -> impl Iterator<Item = &ProgressBar> {
        SkillType::ALL
            .iter()
            .filter_map(|skill| self.bars.get(skill))
            .filter(|bar| bar.bar().is_visible())
    }

    /// Drop the player from every bar, e.g. on disconnect
    pub fn detach(&mut self) {
        for bar in self.bars.values_mut() {
            bar.remove_observer(self.player).hide();
        }
    }
}
