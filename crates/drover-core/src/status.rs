//! Status reporting seam between the supervisor and its caller.
//!
//! The supervisor narrates lifecycle transitions through a
//! [`StatusReporter`] rather than printing directly, so hosts (CLI, UI,
//! tests) decide how messages surface.

use tracing::{error, info};

/// Receiver for human-readable supervisor status messages.
///
/// Three severities, plain text. `ok` marks a completed transition,
/// `error` a reported (non-fatal) condition; fatal conditions are returned
/// as errors instead of being reported here.
pub trait StatusReporter: Send + Sync {
    /// Informational progress message.
    fn info(&self, message: &str);
    /// Success confirmation.
    fn ok(&self, message: &str);
    /// Reported, non-fatal error condition.
    fn error(&self, message: &str);
}

/// Default reporter that forwards to the `tracing` subscriber.
///
/// `ok` maps to info level; there is no dedicated success level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn ok(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_reporter_is_usable_without_a_subscriber() {
        let reporter = TracingReporter;
        reporter.info("info");
        reporter.ok("ok");
        reporter.error("error");
    }
}
