use serde::{Deserialize, Serialize};

/// Plain copy of the fields of a [`Timer`](super::Timer).
///
/// Hosts use it to save and restore a timer, e.g. as part of a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    /// Whether the timer accumulates time on update.
    pub running: bool,
    /// Target duration in seconds. `0.0` means no duration is set.
    pub duration: f32,
    /// Seconds accumulated since the last reset or begin.
    pub elapsed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names() {
        let state = TimerState {
            running: true,
            duration: 10.0,
            elapsed: 2.5,
        };

        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "running": true, "duration": 10.0, "elapsed": 2.5 })
        );

        let back: TimerState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
