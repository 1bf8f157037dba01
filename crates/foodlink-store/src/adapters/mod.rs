//! Adapters binding the store's ports to concrete implementations.

pub mod gateway;
pub mod notifier;

pub use notifier::TracingNotifier;
