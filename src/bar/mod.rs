//! Skill progress bars
//!
//! One on-screen bar per skill category, animated by a queue of
//! tick-driven tasks.

pub mod resource;
pub mod task;
pub mod controller;

pub use resource::{SkillBar, BarColor, BarStyle};
pub use task::{Task, TaskStatus, PointsProgressTask, LevelUpTask};
pub use controller::{ProgressBar, PlayerBars, IDLE_LIFESPAN};
