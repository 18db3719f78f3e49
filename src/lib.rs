//! Countdown timer for game loops.
//!
//! A [`Timer`] accumulates the delta time its owner feeds it every frame,
//! reports its progress against a target duration, and raises a
//! [`TimerEvent`] on every control call and tick. A [`Clock`] measures the
//! real time between frames for loops that do not have their own.

mod clock;
mod timer;

pub use clock::{Clock, DEFAULT_MAX_DELTA};
pub use timer::{HookId, Status, Timer, TimerEvent, TimerState};
