//! Delivery targets for flushed batches.
//!
//! The console, file, and JSONL sinks are reference implementations; the
//! [`Subscriber`] trait lets applications add their own without touching
//! the engine.

mod console;
mod file;
mod json;

pub use console::ConsoleSubscriber;
pub use file::FileSubscriber;
pub use json::JsonSubscriber;

use crate::entry::Entry;
use crate::error::Error;
use crate::publisher::StopSignal;

/// `Send + Sync` because delivery runs on the flush worker while handles
/// are registered and removed from other threads.
pub trait Subscriber: Send + Sync {
    /// Receives one flush cycle's batch, in write order, exactly once.
    ///
    /// The batch is a read-only snapshot. The engine skips the call when a
    /// cycle drains nothing, but implementations must still tolerate an
    /// empty batch. Malformed markup in entry text is never a reason to
    /// fail. `stop` is signalled once shutdown begins; a sink feeding
    /// something expensive may consult it.
    ///
    /// # Errors
    /// I/O failure of the underlying target. The engine does not retry;
    /// the error aborts the cycle's remaining deliveries.
    fn deliver(&self, batch: &[Entry], stop: &StopSignal) -> Result<(), Error>;
}
