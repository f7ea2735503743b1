//! Publisher wiring from the TOML config surface.

use super::Publisher;
use crate::config::Config;
use crate::internal;
use crate::subscriber::{ConsoleSubscriber, FileSubscriber, JsonSubscriber};
use std::sync::Arc;

impl Publisher {
    /// Builds a publisher with the delay, severity filter, and sinks the
    /// config enables. The worker is not started; call
    /// [`Publisher::run`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        internal::debug("PUBLISHER", "Building publisher from config");

        let mut builder = Self::builder()
            .publish_delay(config.publisher.delay())
            .severities(config.publisher.parse_severities());

        let mut sinks: Vec<&str> = Vec::new();

        if config.console.enabled {
            builder = builder.subscriber(Arc::new(
                ConsoleSubscriber::new().colors(config.console.colors),
            ));
            sinks.push("console");
        }

        if config.file.enabled {
            let mut sink = FileSubscriber::new();
            if let Some(path) = &config.file.path {
                sink = sink.path(path);
            }
            builder = builder.subscriber(Arc::new(sink));
            sinks.push("file");
        }

        if config.json.enabled {
            let mut sink = JsonSubscriber::new();
            if let Some(path) = &config.json.path {
                sink = sink.path(path);
            }
            builder = builder.subscriber(Arc::new(sink));
            sinks.push("json");
        }

        if sinks.is_empty() {
            internal::warn("PUBLISHER", "No subscribers enabled");
        } else {
            internal::debug(
                "PUBLISHER",
                &format!("Subscribers enabled: [{}]", sinks.join(", ")),
            );
        }

        builder.build()
    }
}
