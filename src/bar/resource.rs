//! The visual resource shared by all tasks of one controller
//!
//! Holds exactly what a client needs to draw the bar. Nothing here knows
//! about tasks or ticks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::PlayerId;

/// Bar fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarColor {
    Pink,
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    White,
}

impl BarColor {
    /// Color band for a fill ratio, from least to most full
    pub fn for_progress(progress: f64) -> Self {
        if progress < 0.2 {
            BarColor::Purple
        } else if progress < 0.4 {
            BarColor::Blue
        } else if progress < 0.6 {
            BarColor::Green
        } else if progress < 0.8 {
            BarColor::Yellow
        } else {
            BarColor::White
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BarColor::Pink => (255, 105, 180),
            BarColor::Blue => (30, 144, 255),
            BarColor::Red => (220, 40, 40),
            BarColor::Green => (30, 200, 30),
            BarColor::Yellow => (240, 220, 40),
            BarColor::Purple => (163, 53, 238),
            BarColor::White => (235, 235, 235),
        }
    }
}

/// Bar segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarStyle {
    #[default]
    Solid,
    Segmented6,
    Segmented10,
    Segmented12,
    Segmented20,
}

/// A single progress bar as seen by its observers
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    visible: bool,
    title: String,
    progress: f64,
    color: BarColor,
    style: BarStyle,
    observers: HashSet<PlayerId>,
}

impl SkillBar {
    /// Create a hidden, empty bar
    pub fn new(title: impl Into<String>, color: BarColor, style: BarStyle) -> Self {
        Self {
            visible: false,
            title: title.into(),
            progress: 0.0,
            color,
            style,
            observers: HashSet::new(),
        }
    }

    pub fn add_observer(&mut self, player: PlayerId) -> bool {
        self.observers.insert(player)
    }

    pub fn remove_observer(&mut self, player: PlayerId) -> bool {
        self.observers.remove(&player)
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn observers(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.observers.iter().copied()
    }

    pub fn is_observed_by(&self, player: PlayerId) -> bool {
        self.observers.contains(&player)
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the fill ratio, clamped to [0, 1]. NaN counts as empty.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn set_color(&mut self, color: BarColor) {
        self.color = color;
    }

    pub fn color(&self) -> BarColor {
        self.color
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
    }

    pub fn style(&self) -> BarStyle {
        self.style
    }
}
