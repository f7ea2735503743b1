//! Stepwise construction of a [`Publisher`].

use super::{DEFAULT_PUBLISH_DELAY, Publisher, Shared, signal::StopSignal};
use crate::severity::SeverityMask;
use crate::subscriber::Subscriber;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64};
use std::time::Duration;

/// Collects delay, filter, and initial subscribers before the engine's
/// shared state is frozen into its final shape.
pub struct PublisherBuilder {
    delay: Duration,
    mask: SeverityMask,
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl Default for PublisherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PublisherBuilder {
    /// All severities enabled and a 10 ms flush interval by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_PUBLISH_DELAY,
            mask: SeverityMask::ALL,
            subscribers: Vec::new(),
        }
    }

    /// Interval between flush cycles; adjustable later through
    /// [`Publisher::set_publish_delay`].
    #[must_use]
    pub const fn publish_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Severity filter; accepts a single [`Severity`](crate::Severity) or a
    /// combined mask.
    #[must_use]
    pub fn severities(mut self, mask: impl Into<SeverityMask>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Registers a delivery target up front; more can be added at runtime
    /// through [`Publisher::add_subscriber`].
    #[must_use]
    pub fn subscriber(mut self, subscriber: Arc<dyn Subscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// The worker is not started here; call [`Publisher::run`].
    #[must_use]
    pub fn build(self) -> Publisher {
        let micros = u64::try_from(self.delay.as_micros()).unwrap_or(u64::MAX);

        Publisher {
            shared: Arc::new(Shared {
                buffer: Mutex::new(Vec::new()),
                subscribers: Mutex::new(self.subscribers),
                mask: AtomicU8::new(self.mask.bits()),
                delay_micros: AtomicU64::new(micros),
                stop: StopSignal::new(),
                fault: Mutex::new(None),
            }),
            worker: None,
        }
    }
}
