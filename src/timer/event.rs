use std::fmt;

/// Notifications raised by a [`Timer`](super::Timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// The timer was started with [`Timer::begin`](super::Timer::begin).
    Started,
    /// The timer was started or resumed.
    Played,
    /// The timer was paused.
    Paused,
    /// An update left the elapsed time past the duration.
    ///
    /// Raised on every update past the end, not only the first one.
    Ended,
    /// The timer advanced by one tick.
    Running,
    /// The timer was reset to its initial state.
    Reset,
}

impl TimerEvent {
    /// Every event kind, in declaration order.
    pub const ALL: [TimerEvent; 6] = [
        TimerEvent::Started,
        TimerEvent::Played,
        TimerEvent::Paused,
        TimerEvent::Ended,
        TimerEvent::Running,
        TimerEvent::Reset,
    ];
}

impl fmt::Display for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerEvent::Started => "started",
            TimerEvent::Played => "played",
            TimerEvent::Paused => "paused",
            TimerEvent::Ended => "ended",
            TimerEvent::Running => "running",
            TimerEvent::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Handle of a registered callback, used to unregister it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

enum Handler {
    /// Called for a single event kind.
    Event(TimerEvent, Box<dyn FnMut()>),
    /// Called for every event kind.
    Any(Box<dyn FnMut(TimerEvent)>),
}

/// Callback registry of a timer.
///
/// Callbacks of one event kind run in registration order, followed by the
/// callbacks registered for every event.
#[derive(Default)]
pub(crate) struct Hooks {
    next_id: u64,
    handlers: Vec<(HookId, Handler)>,
}

impl Hooks {
    fn next_id(&mut self) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn on<F>(&mut self, event: TimerEvent, callback: F) -> HookId
    where
        F: FnMut() + 'static,
    {
        let id = self.next_id();
        self.handlers
            .push((id, Handler::Event(event, Box::new(callback))));
        id
    }

    pub fn on_any<F>(&mut self, callback: F) -> HookId
    where
        F: FnMut(TimerEvent) + 'static,
    {
        let id = self.next_id();
        self.handlers.push((id, Handler::Any(Box::new(callback))));
        id
    }

    pub fn off(&mut self, id: HookId) -> bool {
        let len = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != len
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of callbacks listening to the given event, including the
    /// callbacks registered for every event.
    pub fn count(&self, event: TimerEvent) -> usize {
        self.handlers
            .iter()
            .filter(|(_, handler)| match handler {
                Handler::Event(kind, _) => *kind == event,
                Handler::Any(_) => true,
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit(&mut self, event: TimerEvent) {
        for (_, handler) in self.handlers.iter_mut() {
            if let Handler::Event(kind, callback) = handler {
                if *kind == event {
                    callback();
                }
            }
        }

        for (_, handler) in self.handlers.iter_mut() {
            if let Handler::Any(callback) = handler {
                callback(event);
            }
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("len", &self.len())
            .finish()
    }
}
