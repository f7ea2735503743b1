//! The publishing engine: a locked entry buffer drained on a fixed interval
//! by a background worker that fans each batch out to every subscriber.

mod builder;
mod from_config;
mod signal;

pub use builder::PublisherBuilder;
pub use signal::StopSignal;

use crate::entry::Entry;
use crate::error::Error;
use crate::internal;
use crate::severity::{Severity, SeverityMask};
use crate::subscriber::Subscriber;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Flush interval used when neither the builder nor config says otherwise.
pub const DEFAULT_PUBLISH_DELAY: Duration = Duration::from_millis(10);

/// State shared between the publisher handle and the worker thread.
struct Shared {
    /// Entries awaiting the next flush; insertion order is delivery order.
    buffer: Mutex<Vec<Entry>>,
    /// Delivery targets in registration order. A lock of its own so that
    /// registration never serializes against writes; the flush cycle is the
    /// only place both locks are held, registry first, buffer second.
    subscribers: Mutex<Vec<Arc<dyn Subscriber>>>,
    /// Bits of the accepted severities, consulted on every write.
    mask: AtomicU8,
    /// Flush interval in microseconds, read at the top of every cycle so
    /// changes apply from the next wait onward.
    delay_micros: AtomicU64,
    stop: StopSignal,
    /// The delivery failure that ended the flush loop, surfaced by `stop`.
    fault: Mutex<Option<Error>>,
}

impl Shared {
    fn publish_delay(&self) -> Duration {
        Duration::from_micros(self.delay_micros.load(Ordering::Relaxed))
    }
}

/// In-process log publisher.
///
/// Producers call [`write`](Self::write) from any thread; a background
/// worker started by [`run`](Self::run) drains the accumulated entries
/// every [`publish_delay`](Self::publish_delay) and hands the batch to each
/// registered [`Subscriber`] in registration order.
///
/// There is no process-wide instance: the publisher is constructed and
/// owned by the entry point and shared by reference.
pub struct Publisher {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Publisher {
    /// Stepwise construction; see [`PublisherBuilder`].
    #[must_use]
    pub fn builder() -> PublisherBuilder {
        PublisherBuilder::new()
    }

    /// Appends one entry, unless `severity` is filtered out by the current
    /// mask — then nothing happens at all, no entry is created.
    ///
    /// Fire-and-forget: contends only briefly on the buffer lock and never
    /// waits on delivery, so it is safe on latency-sensitive paths.
    pub fn write(&self, severity: Severity, text: impl Into<String>) {
        if !self.severities().contains(severity) {
            return;
        }

        let entry = Entry::new(severity, text);
        self.shared.buffer.lock().push(entry);
    }

    /// Convenience overload serializing an error before delegating to
    /// [`write`](Self::write).
    pub fn write_error(&self, severity: Severity, error: &dyn std::error::Error) {
        self.write(severity, error.to_string());
    }

    pub fn debug(&self, text: impl Into<String>) {
        self.write(Severity::Debug, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.write(Severity::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.write(Severity::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.write(Severity::Error, text);
    }

    pub fn exception(&self, text: impl Into<String>) {
        self.write(Severity::Exception, text);
    }

    pub fn fatal(&self, text: impl Into<String>) {
        self.write(Severity::Fatal, text);
    }

    /// The severity filter currently applied to writes.
    #[must_use]
    pub fn severities(&self) -> SeverityMask {
        SeverityMask::from_bits(self.shared.mask.load(Ordering::Relaxed))
    }

    /// Replaces the severity filter. Takes effect on the next write; not
    /// retroactive to entries already buffered.
    pub fn set_severities(&self, mask: impl Into<SeverityMask>) {
        self.shared
            .mask
            .store(mask.into().bits(), Ordering::Relaxed);
    }

    /// The interval between flush cycles.
    #[must_use]
    pub fn publish_delay(&self) -> Duration {
        self.shared.publish_delay()
    }

    /// Adjusts the flush interval; applies from the worker's next wait.
    pub fn set_publish_delay(&self, delay: Duration) {
        let micros = u64::try_from(delay.as_micros()).unwrap_or(u64::MAX);
        self.shared.delay_micros.store(micros, Ordering::Relaxed);
    }

    /// Registers a delivery target. Safe at any time, including while a
    /// flush is in progress — the call serializes on the registry lock, so
    /// a subscriber added mid-flush misses the batch already in delivery
    /// and joins from the next cycle.
    pub fn add_subscriber(&self, subscriber: Arc<dyn Subscriber>) {
        self.shared.subscribers.lock().push(subscriber);
    }

    /// Removes every registered handle pointing at the same subscriber.
    /// One removed mid-flush still receives the batch already being
    /// delivered to it.
    pub fn remove_subscriber(&self, subscriber: &Arc<dyn Subscriber>) {
        self.shared
            .subscribers
            .lock()
            .retain(|s| !Arc::ptr_eq(s, subscriber));
    }

    /// How many delivery targets are registered right now.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }

    /// Entries buffered and not yet flushed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.shared.buffer.lock().len()
    }

    /// Spawns the background flush worker and stores its handle for
    /// [`stop`](Self::stop) to join. No worker is ever started implicitly.
    ///
    /// Must be called at most once per publisher: a second call replaces
    /// the stored handle and leaves the first worker running detached, and
    /// a stopped publisher cannot be restarted (the stop signal is
    /// one-shot).
    ///
    /// # Errors
    /// `Error::Io` when the worker thread cannot be spawned.
    pub fn run(&mut self) -> Result<(), Error> {
        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name("logcast-flush".into())
            .spawn(move || run_flush_loop(&shared))?;
        self.worker = Some(handle);
        Ok(())
    }

    /// Signals the worker and blocks until it has fully exited, so no flush
    /// can race with shutdown. Entries still buffered at this point are
    /// discarded, never delivered.
    ///
    /// Without a prior [`run`](Self::run) this only marks the publisher
    /// stopped.
    ///
    /// # Errors
    /// The delivery failure that ended the flush loop, if one occurred, or
    /// `Error::WorkerPanicked` when the worker did not exit cleanly.
    pub fn stop(&mut self) -> Result<(), Error> {
        self.shared.stop.signal();

        if let Some(worker) = self.worker.take() {
            worker.join().map_err(|_| Error::WorkerPanicked)?;
        }

        match self.shared.fault.lock().take() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        self.shared.stop.signal();
    }
}

fn run_flush_loop(shared: &Shared) {
    internal::debug("PUBLISHER", "Flush worker started");

    loop {
        // A stop during the wait is a controlled exit; the pending flush is
        // skipped and whatever sits in the buffer stays undelivered.
        if shared.stop.wait_timeout(shared.publish_delay()) {
            break;
        }

        if let Err(e) = flush_cycle(shared) {
            internal::error("PUBLISHER", &format!("Subscriber delivery failed: {e}"));
            *shared.fault.lock() = Some(e);
            break;
        }
    }

    internal::debug("PUBLISHER", "Flush worker stopped");
}

/// One flush cycle: both locks in fixed order, the buffered batch delivered
/// to every subscriber serially, the buffer cleared only after the last
/// delivery succeeds. Guards drop in reverse acquisition order on every
/// exit path, including the error return.
fn flush_cycle(shared: &Shared) -> Result<(), Error> {
    let subscribers = shared.subscribers.lock();
    let mut buffer = shared.buffer.lock();

    if buffer.is_empty() {
        return Ok(());
    }

    for subscriber in subscribers.iter() {
        subscriber.deliver(&buffer, &shared.stop)?;
    }

    buffer.clear();
    Ok(())
}
