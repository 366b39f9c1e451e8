//! Console notification sink.

use taskflow_app::{Notification, NotificationSink};

/// Prints feedback messages to the terminal: successes to stdout,
/// errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Error(_) => eprintln!("{notification}"),
            _ => println!("{notification}"),
        }
    }
}
