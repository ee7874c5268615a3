use std::time::{Duration, Instant};

/// Trailing-edge call coalescer for a synchronous event loop.
///
/// Each `push` replaces any pending value and restarts the quiet window;
/// `poll` hands the value out once the window has stayed quiet for the full
/// delay. Rapid bursts therefore collapse into the last pushed value.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, discarding any value still waiting.
    pub fn push(&mut self, value: T) {
        self.pending = Some((Instant::now(), value));
    }

    /// Take the pending value if the delay has elapsed since the last push.
    pub fn poll(&mut self) -> Option<T> {
        match &self.pending {
            Some((pushed_at, _)) if pushed_at.elapsed() >= self.delay => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
