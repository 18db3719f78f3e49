use std::time::{Duration, Instant};

/// Largest delta time handed out by default, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Frame clock handing out the real time passed between ticks.
pub struct Clock {
    last_tick: Instant,
    hz: u32,
    max_delta: f32,
}

impl Clock {
    /// Create a new clock.
    ///
    /// # Arguments
    ///
    /// * `hz` - The maximum tick rate of the clock in hertz. `0` ticks as
    ///   often as it is asked to.
    pub fn new(hz: u32) -> Self {
        Self {
            last_tick: Instant::now(),
            hz,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Limit the delta time passed to tick callbacks.
    ///
    /// Keeps a stalled loop (dragged window, debugger) from advancing the
    /// callback by one huge step.
    ///
    /// # Arguments
    ///
    /// * `max_delta` - The largest delta time in seconds.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Restart measuring from now, e.g. after the loop was suspended.
    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Manually trigger the clock.
    ///
    /// * `callback` - The callback to trigger with the seconds since the last
    ///   tick.
    pub fn trigger<F>(&mut self, callback: F)
    where
        F: FnMut(f32),
    {
        self.trigger_at(Instant::now(), callback);
    }

    /// Trigger a tick if the appropriate delay has passed since the last tick.
    ///
    /// Will return true if a tick was triggered.
    ///
    /// # Arguments
    ///
    /// * `callback` - The function to call with the seconds since the last
    ///   tick if the clock is triggered.
    pub fn tick<F>(&mut self, callback: F) -> bool
    where
        F: FnMut(f32),
    {
        self.tick_at(Instant::now(), callback)
    }

    fn tick_at<F>(&mut self, now: Instant, callback: F) -> bool
    where
        F: FnMut(f32),
    {
        let should_trigger = match self.hz {
            0 => true,
            hz => {
                let threshold = Duration::from_secs(1).as_secs_f64() / hz as f64;
                self.since_last_tick(now) > threshold
            }
        };

        if should_trigger {
            self.trigger_at(now, callback);
        }

        should_trigger
    }

    fn trigger_at<F>(&mut self, now: Instant, mut callback: F)
    where
        F: FnMut(f32),
    {
        let dt = (self.since_last_tick(now) as f32).min(self.max_delta);
        self.last_tick = now;
        callback(dt);
    }

    fn since_last_tick(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.last_tick).as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_rate() {
        let mut clock = Clock::new(10);
        let start = clock.last_tick;
        let mut ticks = Vec::new();

        assert!(!clock.tick_at(start + Duration::from_millis(50), |dt| ticks.push(dt)));
        assert!(clock.tick_at(start + Duration::from_millis(150), |dt| ticks.push(dt)));
        assert!(!clock.tick_at(start + Duration::from_millis(200), |dt| ticks.push(dt)));

        assert_eq!(ticks.len(), 1);
        assert!((ticks[0] - 0.15).abs() < 1e-6);
    }

    #[test]
    fn unlimited_always_ticks() {
        let mut clock = Clock::new(0);
        let start = clock.last_tick;
        let mut ticks = 0;

        for _ in 0..5 {
            assert!(clock.tick_at(start, |_| ticks += 1));
        }

        assert_eq!(ticks, 5);
    }

    #[test]
    fn clamps_delta() {
        let mut clock = Clock::new(60).with_max_delta(0.1);
        let start = clock.last_tick;
        let mut delta = 0.0;

        clock.trigger_at(start + Duration::from_secs(3), |dt| delta = dt);

        assert_eq!(delta, 0.1);
    }

    #[test]
    fn drives_timer() {
        let mut clock = Clock::new(0);
        let start = clock.last_tick;
        let mut timer = crate::Timer::new();
        timer.begin(0.3);

        for i in 1..=4 {
            clock.tick_at(start + Duration::from_millis(100 * i), |dt| timer.update(dt));
        }

        assert!(timer.is_end());
        assert!((timer.elapsed() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn trigger_ignores_rate() {
        let mut clock = Clock::new(1);
        let mut triggered = false;

        clock.trigger(|_| triggered = true);

        assert!(triggered);
    }
}
