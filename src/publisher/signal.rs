//! Cooperative stop signalling for the flush worker.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// One-shot stop flag with an interruptible timed wait.
///
/// The worker checks it both as its loop condition and inside the periodic
/// wait; subscribers receive a reference during delivery so a sink feeding
/// something expensive can notice that shutdown has begun.
///
/// The flag never resets — a signalled publisher stays signalled, which is
/// why a stopped publisher cannot be restarted.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl StopSignal {
    /// A fresh, unsignalled signal. The publisher manages its own; a
    /// standalone one is handy for invoking a subscriber directly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wakes any in-progress wait immediately.
    pub(crate) fn signal(&self) {
        let mut stopped = self.stopped.lock();
        *stopped = true;
        self.condvar.notify_all();
    }

    /// True once [`Publisher::stop`](crate::Publisher::stop) has signalled.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock()
    }

    /// Sleeps for `timeout` unless the signal arrives first.
    ///
    /// Returns `true` when the wait ended because of the signal, `false` on
    /// an ordinary timeout. Spurious wakeups re-enter the wait against the
    /// original deadline.
    pub(crate) fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.condvar.wait_until(&mut stopped, deadline).timed_out() {
                return *stopped;
            }
        }
        true
    }
}
