//! QR payload parsing.
//!
//! Scanned text has the form `"<donationId>:<token>"`. The split point
//! is the **first** colon: the token itself may contain further colons
//! and keeps them verbatim.

use super::errors::QrError;
use foodlink_types::{DonationId, QrToken};

/// A structurally valid scanned payload.
///
/// Structural validity says nothing about the token being correct; the
/// server re-validates it on confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct QrPayload {
    pub donation_id: DonationId,
    pub token: QrToken,
}

/// Parse raw scanner output into a [`QrPayload`].
///
/// Rejections short-circuit: empty input first, then a missing id or
/// token segment.
pub fn parse_scan(raw: &str) -> Result<QrPayload, QrError> {
    if raw.is_empty() {
        return Err(QrError::EmptyScan);
    }

    let (id, token) = raw.split_once(':').unwrap_or((raw, ""));
    if id.is_empty() || token.is_empty() {
        return Err(QrError::InvalidFormat);
    }

    Ok(QrPayload {
        donation_id: DonationId::new(id),
        token: QrToken::new(token),
    })
}
