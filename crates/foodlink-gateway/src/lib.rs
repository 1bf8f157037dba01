//! # foodlink-gateway
//!
//! HTTP client for the remote donation service.
//!
//! ## Contract
//!
//! - One operation per donation action (list, accept, confirm, delete).
//! - Single attempt per invocation; retrying is fully delegated to the
//!   caller.
//! - List endpoints return `Vec<Donation>`; any non-array payload is
//!   coerced to the empty vector so a misbehaving server never poisons
//!   the caller's cache.
//! - Mutation failures surface as [`GatewayError::Remote`] carrying the
//!   optional human-readable `message` the server attached.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use config::{ConfigError, GatewayConfig};
pub use error::GatewayError;
pub use types::AvailableFilter;
