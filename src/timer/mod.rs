mod event;
mod state;

use log::{debug, trace};

pub use event::{HookId, TimerEvent};
pub use state::TimerState;

use event::Hooks;

/// Conceptual state of a [`Timer`].
///
/// Only [`Timer::is_running`] is stored; the other states are derived from
/// the elapsed time and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stopped with no duration and no elapsed time.
    Idle,
    /// Accumulating time on update.
    Running,
    /// Stopped with some progress or duration left over.
    Paused,
    /// Elapsed time is past the duration.
    ///
    /// The timer keeps running until it is paused or reset.
    Ended,
}

/// Countdown timer driven by a game loop.
///
/// The timer does not measure time itself. The owner calls
/// [`Timer::update`] once per frame with the seconds that passed since the
/// previous frame, for example from a [`Clock`](crate::Clock).
///
/// Every control method raises a [`TimerEvent`]. Callbacks are registered
/// with [`Timer::on`] and [`Timer::on_any`] and run before the control
/// method returns.
///
/// # Examples
///
/// ```
/// use frame_timer::{Timer, TimerEvent};
///
/// let mut timer = Timer::new();
/// timer.on(TimerEvent::Ended, || println!("time's up"));
///
/// timer.begin(1.0);
/// timer.update(0.75);
/// assert!(!timer.is_end());
/// timer.update(0.75);
/// assert!(timer.is_end());
/// ```
#[derive(Debug, Default)]
pub struct Timer {
    /// Whether [`Timer::update`] accumulates time.
    running: bool,
    /// Target duration in seconds.
    ///
    /// `0.0` means that no duration is set.
    duration: f32,
    /// Seconds accumulated since the last reset.
    elapsed: f32,
    /// Registered event callbacks.
    hooks: Hooks,
}

impl Timer {
    /// Create a stopped timer with no duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timer is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds accumulated since the timer was last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current conceptual state of the timer.
    pub fn status(&self) -> Status {
        if self.is_end() {
            Status::Ended
        } else if self.running {
            Status::Running
        } else if self.elapsed == 0.0 && self.duration == 0.0 {
            Status::Idle
        } else {
            Status::Paused
        }
    }

    /// Normalized progress of the timer.
    ///
    /// Returns `elapsed / duration`, or `0.0` if either of them is zero.
    /// The result is not clamped, so it grows past `1.0` once the timer has
    /// ended.
    pub fn progress(&self) -> f32 {
        if self.duration != 0.0 && self.elapsed != 0.0 {
            self.elapsed / self.duration
        } else {
            0.0
        }
    }

    /// Whether more than the given number of seconds have elapsed.
    ///
    /// The threshold is in seconds, not a fraction of the duration.
    ///
    /// # Arguments
    ///
    /// * `seconds` - The elapsed time to compare with.
    pub fn reach_progress(&self, seconds: f32) -> bool {
        self.elapsed > seconds
    }

    /// Whether the elapsed time is past the duration.
    ///
    /// Reaching the duration exactly does not count as the end.
    pub fn is_end(&self) -> bool {
        self.elapsed > self.duration
    }

    /// Clear the duration and progress, and stop the timer.
    ///
    /// Raises [`TimerEvent::Reset`].
    pub fn reset(&mut self) {
        self.duration = 0.0;
        self.reset_progress();
        debug!("Timer reset");
        self.hooks.emit(TimerEvent::Reset);
    }

    /// Start or resume the timer.
    ///
    /// Raises [`TimerEvent::Played`], also if the timer was already running.
    pub fn play(&mut self) {
        self.running = true;
        debug!("Timer played at {}s", self.elapsed);
        self.hooks.emit(TimerEvent::Played);
    }

    /// Pause the timer.
    ///
    /// Raises [`TimerEvent::Paused`], also if the timer was already paused.
    pub fn pause(&mut self) {
        self.running = false;
        debug!("Timer paused at {}s", self.elapsed);
        self.hooks.emit(TimerEvent::Paused);
    }

    /// Restart the timer with a new duration.
    ///
    /// Raises [`TimerEvent::Reset`], [`TimerEvent::Played`] and
    /// [`TimerEvent::Started`], in that order.
    ///
    /// # Arguments
    ///
    /// * `duration` - The duration of the timer in seconds.
    pub fn begin(&mut self, duration: f32) {
        self.reset();
        self.duration = duration;
        self.play();
        debug!("Timer started (duration: {}s)", duration);
        self.hooks.emit(TimerEvent::Started);
    }

    /// Set the elapsed time back to zero and stop the timer.
    ///
    /// Keeps the duration and raises no event.
    pub fn reset_progress(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    /// Manually set the elapsed time.
    ///
    /// # Arguments
    ///
    /// * `seconds` - The new elapsed time in seconds.
    pub fn set_progress(&mut self, seconds: f32) {
        self.elapsed = seconds;
    }

    /// Manually set the elapsed time as a percentage of the duration.
    ///
    /// # Arguments
    ///
    /// * `percentage` - Percentage of the duration, `50.0` for half way.
    pub fn set_progress_percentage(&mut self, percentage: f32) {
        self.elapsed = self.duration * (percentage / 100.0);
    }

    /// Advance the timer by a single tick.
    ///
    /// Does nothing if the timer is not running. Otherwise adds the delta
    /// time to the elapsed time, raises [`TimerEvent::Ended`] if the timer
    /// is past its duration, and then raises [`TimerEvent::Running`].
    ///
    /// Call once per frame with the time since the previous frame.
    ///
    /// # Arguments
    ///
    /// * `delta_time` - Seconds since the previous update.
    pub fn update(&mut self, delta_time: f32) {
        if !self.running {
            return;
        }

        self.elapsed += delta_time;
        trace!("Timer at {}s of {}s", self.elapsed, self.duration);

        if self.is_end() {
            self.hooks.emit(TimerEvent::Ended);
        }
        self.hooks.emit(TimerEvent::Running);
    }

    /// Register a callback for a single event kind.
    ///
    /// Returns a handle for [`Timer::off`].
    pub fn on<F>(&mut self, event: TimerEvent, callback: F) -> HookId
    where
        F: FnMut() + 'static,
    {
        self.hooks.on(event, callback)
    }

    /// Register a callback for every event kind.
    ///
    /// These callbacks run after the callbacks of the specific event kind.
    pub fn on_any<F>(&mut self, callback: F) -> HookId
    where
        F: FnMut(TimerEvent) + 'static,
    {
        self.hooks.on_any(callback)
    }

    /// Unregister a callback.
    ///
    /// Returns false if no callback with the given handle is registered.
    pub fn off(&mut self, id: HookId) -> bool {
        self.hooks.off(id)
    }

    /// Unregister every callback.
    pub fn clear_hooks(&mut self) {
        self.hooks.clear();
    }

    /// Number of callbacks that will be called for the given event.
    pub fn hook_count(&self, event: TimerEvent) -> usize {
        self.hooks.count(event)
    }

    /// Copy of the timer fields.
    pub fn state(&self) -> TimerState {
        TimerState {
            running: self.running,
            duration: self.duration,
            elapsed: self.elapsed,
        }
    }

    /// Overwrite the timer fields with a saved state.
    ///
    /// Keeps the registered callbacks and raises no event.
    pub fn restore(&mut self, state: TimerState) {
        self.running = state.running;
        self.duration = state.duration;
        self.elapsed = state.elapsed;
    }
}

impl From<TimerState> for Timer {
    fn from(state: TimerState) -> Self {
        let mut timer = Timer::new();
        timer.restore(state);
        timer
    }
}
