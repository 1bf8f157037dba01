//! Default [`Notifier`] that routes notifications through `tracing`.

use crate::ports::Notifier;
use tracing::{info, warn};

/// Notifier for headless consumers: success goes to `info`, errors to
/// `warn`. A UI would substitute its own toast-backed implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "foodlink::notify", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "foodlink::notify", "{message}");
    }
}
