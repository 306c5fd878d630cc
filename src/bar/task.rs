//! Bar animation tasks
//!
//! A task is advanced exactly once per controller tick while it sits at
//! the head of the queue. The bar it draws on is handed in by the
//! controller on every step.

use std::fmt;

use super::resource::{BarColor, BarStyle, SkillBar};
use crate::progression::SkillType;

/// Points added to the displayed value per step after the first
pub const POINTS_PER_STEP: u32 = 2;

/// Total length of the level-up animation in steps
pub const LEVEL_UP_STEPS: u32 = 90;

/// Steps during which the level-up bar is held full
pub const LEVEL_UP_HOLD_STEPS: u32 = 10;

/// Fill lost per step once the hold is over, in hundredths
const LEVEL_UP_DRAIN_PCT: u32 = 2;

/// Background colors cycled by the level-up animation
const LEVEL_UP_PALETTE: [BarColor; 3] = [BarColor::Red, BarColor::Green, BarColor::Blue];

/// Result of stepping a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task wants more steps
    Running,
    /// The task is done and must be removed from the queue
    Finished,
}

/// Animates the bar filling up from `from` towards `to` out of `max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsProgressTask {
    level: u32,
    ticks: u32,
    from: u32,
    current: u32,
    to: u32,
    max: u32,
}

impl PointsProgressTask {
    pub fn new(level: u32, from: u32, to: u32, max: u32) -> Self {
        let from = from.min(max);
        Self {
            level,
            ticks: 0,
            from,
            current: from,
            to: to.min(max),
            max,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Move the target. Only the target changes; the animation carries on
    /// from wherever it currently is.
    pub fn retarget(&mut self, to: u32) {
        self.to = to.min(self.max);
    }

    /// Displayed fill ratio. An empty level span shows a full bar.
    pub fn progress(&self) -> f64 {
        if self.max == 0 {
            1.0
        } else {
            self.current as f64 / self.max as f64
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.to
    }

    pub fn step(&mut self, bar: &mut SkillBar, skill: SkillType) -> TaskStatus {
        // The first step only draws the starting point
        if self.ticks > 0 {
            self.current = self.current.saturating_add(POINTS_PER_STEP).min(self.max);
        }
        let progress = self.progress();
        bar.set_progress(progress);
        bar.set_title(format!("{} {}", skill.display_name(), self.level));
        bar.set_color(BarColor::for_progress(progress));
        bar.set_style(BarStyle::Segmented10);
        self.ticks += 1;

        if self.is_done() {
            TaskStatus::Finished
        } else {
            TaskStatus::Running
        }
    }
}

/// Callback run once when a level-up animation ends
pub type Completion = Box<dyn FnOnce()>;

/// Celebratory animation: hold full, drain, then flip the level number
pub struct LevelUpTask {
    level: u32,
    ticks: u32,
    /// Remaining fill in hundredths
    fill_pct: u32,
    completion: Option<Completion>,
}

impl LevelUpTask {
    pub fn new(level: u32, completion: Completion) -> Self {
        Self {
            level,
            ticks: 0,
            fill_pct: 100,
            completion: Some(completion),
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn progress(&self) -> f64 {
        self.fill_pct as f64 / 100.0
    }

    pub fn step(&mut self, bar: &mut SkillBar, skill: SkillType) -> TaskStatus {
        bar.set_progress(self.progress());
        bar.set_style(BarStyle::Solid);
        if self.ticks % 10 == 0 {
            let index = (self.ticks / 10) as usize % LEVEL_UP_PALETTE.len();
            bar.set_color(LEVEL_UP_PALETTE[index]);
        }
        let shown_level = if self.fill_pct > 0 {
            self.level.saturating_sub(1)
        } else {
            self.level
        };
        bar.set_title(format!("{} {}", skill.display_name(), shown_level));

        self.ticks += 1;
        if self.ticks > LEVEL_UP_HOLD_STEPS {
            self.fill_pct = self.fill_pct.saturating_sub(LEVEL_UP_DRAIN_PCT);
        }

        if self.ticks >= LEVEL_UP_STEPS {
            if let Some(completion) = self.completion.take() {
                completion();
            }
            TaskStatus::Finished
        } else {
            TaskStatus::Running
        }
    }
}

impl fmt::Debug for LevelUpTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelUpTask")
            .field("level", &self.level)
            .field("ticks", &self.ticks)
            .field("fill_pct", &self.fill_pct)
            .field("completed", &self.completion.is_none())
            .finish()
    }
}

/// Every kind of work a progress bar can queue
#[derive(Debug)]
pub enum Task {
    PointsProgress(PointsProgressTask),
    LevelUp(LevelUpTask),
}

impl Task {
    /// Advance one step, drawing on `bar`
    pub fn step(&mut self, bar: &mut SkillBar, skill: SkillType) -> TaskStatus {
        match self {
            Task::PointsProgress(task) => task.step(bar, skill),
            Task::LevelUp(task) => task.step(bar, skill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bar() -> SkillBar {
        SkillBar::new("test", BarColor::Blue, BarStyle::Solid)
    }

    #[test]
    fn test_first_step_only_draws() {
        let mut bar = bar();
        let mut task = PointsProgressTask::new(3, 20, 60, 100);
        assert_eq!(task.step(&mut bar, SkillType::Mining), TaskStatus::Running);
        assert_eq!(task.current(), 20);
        assert_eq!(bar.progress(), 0.2);
        assert_eq!(bar.title(), "Mining 3");
        assert_eq!(bar.style(), BarStyle::Segmented10);
    }

    #[test]
    fn test_points_progress_example_run() {
        let mut bar = bar();
        let mut task = PointsProgressTask::new(1, 20, 60, 100);
        task.step(&mut bar, SkillType::Mining);

        for step in 1..=20 {
            let status = task.step(&mut bar, SkillType::Mining);
            assert_eq!(task.current(), 20 + step * 2);
            match task.current() {
                58 => {
                    assert_eq!(bar.progress(), 0.58);
                    assert_eq!(bar.color(), BarColor::Green);
                    assert_eq!(status, TaskStatus::Running);
                }
                60 => {
                    assert_eq!(bar.progress(), 0.6);
                    assert_eq!(bar.color(), BarColor::Yellow);
                    assert_eq!(status, TaskStatus::Finished);
                }
                _ => assert_eq!(status, TaskStatus::Running),
            }
        }
    }

    #[test]
    fn test_stops_short_of_max() {
        let mut bar = bar();
        let mut task = PointsProgressTask::new(1, 0, 10, 100);
        let mut steps = 0;
        while task.step(&mut bar, SkillType::Combat) == TaskStatus::Running {
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(task.current(), 10);
        assert_eq!(bar.progress(), 0.1);
    }

    #[test]
    fn test_target_above_max_is_clamped() {
        let mut bar = bar();
        let mut task = PointsProgressTask::new(1, 95, 500, 100);
        assert_eq!(task.to(), 100);
        let mut steps = 0;
        while task.step(&mut bar, SkillType::Combat) == TaskStatus::Running {
            steps += 1;
            assert!(steps < 10);
        }
        assert_eq!(task.current(), 100);
    }

    #[test]
    fn test_empty_span_finishes_immediately() {
        let mut bar = bar();
        let mut task = PointsProgressTask::new(1, 0, 0, 0);
        assert_eq!(task.step(&mut bar, SkillType::Farming), TaskStatus::Finished);
        assert_eq!(bar.progress(), 1.0);
    }

    #[test]
    fn test_level_up_lifecycle() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut task = LevelUpTask::new(5, Box::new(move || counter.set(counter.get() + 1)));
        let mut bar = bar();

        for step in 0..LEVEL_UP_STEPS {
            let status = task.step(&mut bar, SkillType::Fishing);
            if step < 89 {
                assert_eq!(status, TaskStatus::Running, "step {}", step);
                assert_eq!(fired.get(), 0);
            } else {
                assert_eq!(status, TaskStatus::Finished);
            }
            if step <= LEVEL_UP_HOLD_STEPS {
                assert_eq!(bar.progress(), 1.0, "step {}", step);
            }
        }
        assert_eq!(fired.get(), 1);
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(bar.title(), "Fishing 5");
        assert_eq!(bar.style(), BarStyle::Solid);
    }

    #[test]
    fn test_level_up_palette_and_title() {
        let mut task = LevelUpTask::new(4, Box::new(|| {}));
        let mut bar = bar();

        task.step(&mut bar, SkillType::Mining);
        assert_eq!(bar.color(), BarColor::Red);
        assert_eq!(bar.title(), "Mining 3");
        for _ in 1..11 {
            task.step(&mut bar, SkillType::Mining);
        }
        assert_eq!(bar.color(), BarColor::Green);
        for _ in 11..21 {
            task.step(&mut bar, SkillType::Mining);
        }
        assert_eq!(bar.color(), BarColor::Blue);
        for _ in 21..31 {
            task.step(&mut bar, SkillType::Mining);
        }
        assert_eq!(bar.color(), BarColor::Red);

        // Drain finishes after 50 decrements; the next draw shows the new level
        while task.progress() > 0.0 {
            task.step(&mut bar, SkillType::Mining);
            assert!(bar.title() == "Mining 3" || task.progress() == 0.0);
        }
        task.step(&mut bar, SkillType::Mining);
        assert_eq!(bar.title(), "Mining 4");
    }

    #[test]
    fn test_level_up_progress_never_increases() {
        let mut task = LevelUpTask::new(2, Box::new(|| {}));
        let mut bar = bar();
        let mut last = task.progress();
        for _ in 0..LEVEL_UP_STEPS {
            task.step(&mut bar, SkillType::Combat);
            assert!(task.progress() <= last);
            last = task.progress();
        }
    }

    proptest! {
        #[test]
        fn prop_points_current_monotonic_and_bounded(
            from in 0u32..300,
            to in 0u32..300,
            max in 0u32..300,
            retargets in proptest::collection::vec(0u32..300, 0..5),
        ) {
            let mut bar = bar();
            let mut task = PointsProgressTask::new(1, from, to, max);
            let mut last = task.current();
            let mut retargets = retargets.into_iter();
            for i in 0..400 {
                if i % 17 == 3 {
                    if let Some(next) = retargets.next() {
                        task.retarget(next);
                    }
                }
                let status = task.step(&mut bar, SkillType::Mining);
                prop_assert!(task.current() >= last);
                prop_assert!(task.current() <= task.max());
                prop_assert!(bar.progress() >= 0.0 && bar.progress() <= 1.0);
                last = task.current();
                if status == TaskStatus::Finished {
                    break;
                }
            }
            prop_assert!(task.is_done());
        }
    }
}
