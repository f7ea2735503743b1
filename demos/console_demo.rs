//! Demonstration driver: console and file subscribers fed by several
//! producer threads writing every severity with inline markup.

use logcast::{ConsoleSubscriber, FileSubscriber, Publisher, Severity, SeverityMask};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), logcast::Error> {
    logcast::internal::init(SeverityMask::ALL);

    let mut publisher = Publisher::builder().build();
    publisher.add_subscriber(Arc::new(ConsoleSubscriber::new()));
    publisher.add_subscriber(Arc::new(FileSubscriber::new().path("console_demo.log")));
    publisher.run()?;

    thread::scope(|s| {
        for worker in 0..3 {
            let publisher = &publisher;
            s.spawn(move || {
                for round in 0..5 {
                    for severity in Severity::all() {
                        publisher.write(
                            severity,
                            format!(
                                "<color fg=Red>{severity}</color> / worker {worker} / \
                                 <color bg=Blue fg=Yellow>round {round}</color>"
                            ),
                        );
                    }
                    thread::sleep(Duration::from_millis(5));
                }
            });
        }
    });

    // Give the final batch one flush interval before shutting down
    thread::sleep(Duration::from_millis(50));
    publisher.stop()
}
