//! Fixed-rate tick clock
//!
//! Turns wall-clock frame deltas into whole simulation ticks.

use std::time::Duration;

/// Simulation ticks per second
pub const TICKS_PER_SECOND: u32 = 20;

/// Accumulates frame time and hands out whole ticks
pub struct TickClock {
    /// Length of one tick in seconds
    tick_interval: f32,
    /// Time not yet turned into ticks
    since_last_tick: f32,
    /// Ticks handed out so far
    ticks: u64,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_interval: 1.0 / ticks_per_second.max(1) as f32,
            since_last_tick: 0.0,
            ticks: 0,
        }
    }

    /// Add frame time and return how many ticks are now due
    pub fn update(&mut self, delta: Duration) -> u32 {
        let delta_secs = delta.as_secs_f32();
        self.since_last_tick += delta_secs;

        let mut due = 0;
        while self.since_last_tick >= self.tick_interval {
            self.since_last_tick -= self.tick_interval;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.since_last_tick = 0.0;
        self.ticks = 0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}
