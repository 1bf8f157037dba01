//! # foodlink-store
//!
//! Donation store for the Foodlink client.
//!
//! ## Role in System
//!
//! - **State Container**: owns the four per-role donation lists
//!   (available, mine, assigned tasks, expired-for-recycling) and the
//!   process-wide loading flag. Single writer, any number of readers.
//! - **Orchestrator**: every fetch replaces a list wholesale with the
//!   server's snapshot; every mutation runs its declared refresh plan
//!   after success.
//! - **QR Confirmation**: scanned `"<id>:<token>"` text is validated
//!   locally (format, then membership in the relevant cached list)
//!   before any network round trip is spent on it.
//!
//! Failures never propagate to consumers as faults: they are converted
//! into one-shot notifications through the [`Notifier`] port, and the
//! loading flag is cleared on every path.

pub mod adapters;
pub mod domain;
pub mod handler;
pub mod ports;
pub mod store;

pub use adapters::*;
pub use domain::*;
pub use handler::*;
pub use ports::*;
pub use store::DonationStore;
