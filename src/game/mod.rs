//! Game loop support

mod clock;

pub use clock::{TickClock, TICKS_PER_SECOND};
