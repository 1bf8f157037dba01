//! QR confirmation handler.
//!
//! Turns raw scanner output into a confirmation mutation, after cheap
//! local checks that give the user specific feedback before any network
//! round trip is spent.

use crate::domain::{qr, ConfirmOutcome, ListKind, QrError};
use crate::store::DonationStore;
use std::sync::Arc;
use tracing::debug;

/// Which confirmation flow a scan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanContext {
    /// Volunteer confirming a food pickup.
    Pickup,
    /// Waste partner confirming a recycling pickup.
    Recycle,
}

impl ScanContext {
    /// The cached list the scanned id must belong to.
    pub fn relevant_list(self) -> ListKind {
        match self {
            ScanContext::Pickup => ListKind::AssignedTasks,
            ScanContext::Recycle => ListKind::ExpiredRecycling,
        }
    }
}

/// Result of handling one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Rejected before any network call was made.
    RejectedLocally(QrError),
    /// The server confirmed the pickup; the relevant list was refreshed.
    Confirmed,
    /// The server rejected the confirmation (already notified).
    Rejected,
}

/// Handles scanned QR text against a store.
pub struct QrScanHandler {
    store: Arc<DonationStore>,
}

impl QrScanHandler {
    pub fn new(store: Arc<DonationStore>) -> Self {
        Self { store }
    }

    /// Validate and confirm one scan.
    ///
    /// Validation short-circuits on the first failure: empty text, then
    /// malformed `"<id>:<token>"` structure, then membership of the id
    /// in the context's cached list. Local rejections emit an error
    /// notification and never reach the network.
    pub async fn handle_scan(&self, raw: &str, context: ScanContext) -> ScanOutcome {
        let payload = match qr::parse_scan(raw) {
            Ok(payload) => payload,
            Err(e) => {
                self.store.notify_error(&e.to_string());
                return ScanOutcome::RejectedLocally(e);
            }
        };

        let list = context.relevant_list();
        if !self.store.contains(list, &payload.donation_id) {
            self.store.notify_error(&QrError::NoMatchingTask.to_string());
            return ScanOutcome::RejectedLocally(QrError::NoMatchingTask);
        }

        debug!(donation = %payload.donation_id, context = ?context, "scan matched cached task");

        let outcome = match context {
            ScanContext::Pickup => {
                self.store
                    .confirm_pickup(&payload.donation_id, &payload.token)
                    .await
            }
            ScanContext::Recycle => {
                self.store
                    .confirm_recycle(&payload.donation_id, &payload.token)
                    .await
            }
        };

        match outcome {
            ConfirmOutcome::Confirmed => {
                // One more refetch of the scanning context's list, on top
                // of the mutation's own refresh plan.
                self.store.refresh(list).await;
                ScanOutcome::Confirmed
            }
            // The mutation already reported the failure.
            ConfirmOutcome::Rejected => ScanOutcome::Rejected,
        }
    }
}
