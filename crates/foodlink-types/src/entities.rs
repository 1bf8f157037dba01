//! # Core Domain Entities
//!
//! Donation records and the opaque QR confirmation token, as exchanged
//! with the remote donation service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a donation, issued by the server.
///
/// Treated as an opaque string; the client never parses or generates ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DonationId(pub String);

impl DonationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DonationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle status of a donation.
///
/// Forward path: `Available → Accepted → PickedUp`.
/// Recycling path: `Available → Expired → AcceptedForRecycling → Recycled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Available,
    Accepted,
    PickedUp,
    Expired,
    AcceptedForRecycling,
    Recycled,
}

impl DonationStatus {
    /// Whether the donation is still claimable by an NGO.
    pub fn is_claimable(&self) -> bool {
        matches!(self, DonationStatus::Available)
    }

    /// Whether the donation has left the normal pickup path and is in
    /// the recycling flow.
    pub fn is_recycling(&self) -> bool {
        matches!(
            self,
            DonationStatus::Expired
                | DonationStatus::AcceptedForRecycling
                | DonationStatus::Recycled
        )
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DonationStatus::Available => "available",
            DonationStatus::Accepted => "accepted",
            DonationStatus::PickedUp => "picked_up",
            DonationStatus::Expired => "expired",
            DonationStatus::AcceptedForRecycling => "accepted_for_recycling",
            DonationStatus::Recycled => "recycled",
        };
        f.write_str(s)
    }
}

/// A donation record as returned by the remote service.
///
/// The pickup/recycle confirmation token is deliberately absent: it is
/// server-held and only ever reaches the client inside scanned QR text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Server-issued identifier.
    pub id: DonationId,
    /// Current lifecycle status.
    pub status: DonationStatus,
    /// Kind of food offered (e.g., "cooked", "produce", "bakery").
    pub food_type: String,
    /// Quantity in `unit`s.
    pub quantity: u32,
    /// Unit of measure for `quantity` (e.g., "kg", "meals").
    #[serde(default)]
    pub unit: String,
    /// Human-readable pickup address.
    pub pickup_location: String,
    /// Area PIN code used by the available-list filter.
    #[serde(default)]
    pub pickup_pin: String,
    /// When the donation expires and becomes recycling-eligible.
    pub expires_at: DateTime<Utc>,
    /// Display name of the donating restaurant.
    #[serde(default)]
    pub donor_name: String,
    /// Volunteer assigned for pickup, if any.
    #[serde(default)]
    pub assigned_volunteer: Option<String>,
}

/// Opaque, single-use confirmation token proven via QR scan.
///
/// The secret is never displayed: `Debug` and `Display` are redacted.
/// The only consumers of the raw value are the gateway request payloads.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrToken(String);

impl QrToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw secret, for gateway request serialization only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for QrToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QrToken(<redacted>)")
    }
}

impl fmt::Display for QrToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
