#![forbid(unsafe_code)]

//! `logcast` - Buffered log publishing with subscriber fan-out.
//!
//! Producers append severity-tagged, markup-annotated entries without ever
//! blocking on delivery; a background worker drains the buffer on a fixed
//! interval and hands each batch to every registered subscriber in order.
//!
//! - Bit-flag severity filtering, adjustable at runtime
//! - Inline `<color fg=.. bg=..>` markup, stripped or styled per sink
//! - Console, file, and JSONL reference subscribers
//! - TOML configuration for delay, filtering, and sink selection
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), logcast::Error> {
//! use logcast::{ConsoleSubscriber, Publisher, Severity};
//! use std::sync::Arc;
//!
//! let mut publisher = Publisher::builder()
//!     .severities(Severity::Debug | Severity::Info)
//!     .build();
//! publisher.add_subscriber(Arc::new(ConsoleSubscriber::new()));
//!
//! publisher.run()?;
//! publisher.write(Severity::Info, "Service <color fg=Green>online</color>");
//! publisher.stop()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
mod error;
pub mod internal;
pub mod markup;
pub mod publisher;
pub mod severity;
pub mod subscriber;

// Re-exports for convenience
pub use config::Config;
pub use entry::Entry;
pub use error::Error;
pub use markup::{Color, Segment, Style};
pub use publisher::{DEFAULT_PUBLISH_DELAY, Publisher, PublisherBuilder, StopSignal};
pub use severity::{Severity, SeverityMask};
pub use subscriber::{ConsoleSubscriber, FileSubscriber, JsonSubscriber, Subscriber};
