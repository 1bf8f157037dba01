//! Request and response payloads for the donation service.

use serde::{Deserialize, Serialize};

/// Optional filters for the available-donations listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableFilter {
    /// Restrict to donations in this area PIN code.
    pub pin: Option<String>,
    /// Restrict to a food type (e.g. "cooked", "bakery").
    pub food_type: Option<String>,
}

impl AvailableFilter {
    /// Query pairs for the GET request, omitting unset filters.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(pin) = self.pin.as_deref() {
            pairs.push(("pin", pin));
        }
        if let Some(food_type) = self.food_type.as_deref() {
            pairs.push(("food_type", food_type));
        }
        pairs
    }
}

/// Body for `POST /donations/{id}/accept`.
#[derive(Debug, Serialize)]
pub(crate) struct AcceptBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_id: Option<&'a str>,
}

/// Body for the confirm-pickup and confirm-recycle endpoints.
#[derive(Serialize)]
pub(crate) struct ConfirmBody<'a> {
    pub qr_token: &'a str,
}

/// Failure body shape: mutation endpoints may attach a reason.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiFailure {
    #[serde(default)]
    pub message: Option<String>,
}
