//! Ports for the donation store.

pub mod outbound;

pub use outbound::{DonationApi, Notifier};
