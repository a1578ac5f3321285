//! Pacing between autonomous actions.
//!
//! Delays are cosmetic: no state depends on them. Tests inject `NoPacing`
//! so the whole sequence runs synchronously.

use std::time::Duration;

/// Something that waits between autonomous steps.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Never waits. Records the pauses it skipped.
#[derive(Clone, Debug, Default)]
pub struct NoPacing {
    skipped: Vec<Duration>,
}

impl NoPacing {
    /// Pauses requested so far, in order.
    #[must_use]
    pub fn skipped(&self) -> &[Duration] {
        &self.skipped
    }
}

impl Pacer for NoPacing {
    fn pause(&mut self, duration: Duration) {
        self.skipped.push(duration);
    }
}
