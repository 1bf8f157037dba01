//! # Foodlink Shared Types
//!
//! Domain entities shared across the gateway client, the donation store,
//! and the CLI.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-crate type lives here.
//! - **Server-shaped**: entities mirror the remote service's JSON; the
//!   client never invents fields, and cached lists are always a direct
//!   reflection of the last successful server response.
//! - **Opaque secrets**: the pickup confirmation token is carried by
//!   [`QrToken`], which never reveals the secret through `Debug` or
//!   `Display`.

pub mod entities;

pub use entities::*;
