//! Mutation catalogue: per-mutation notification texts and the explicit
//! post-mutation refresh plan.
//!
//! Keeping the refresh dependencies in one table makes them auditable
//! instead of being buried inside each mutation body.

use super::lists::ListKind;

/// Result of a confirmation-style mutation.
///
/// Distinguishes nothing finer than the caller needs: `Rejected` covers
/// both transport failures and business-rule rejections, and the
/// notification emitted alongside carries the distinction in prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The server applied the state transition.
    Confirmed,
    /// The mutation did not take effect; cached lists are unchanged.
    Rejected,
}

impl ConfirmOutcome {
    pub fn is_confirmed(self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed)
    }
}

/// Every state-changing donation action the store can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// NGO claims an available donation.
    Accept,
    /// Volunteer claims a pickup task.
    VolunteerAccept,
    /// Volunteer proves physical pickup via QR token.
    ConfirmPickup,
    /// Restaurant removes one of its own donations.
    Delete,
    /// Waste partner claims an expired donation.
    AcceptForRecycling,
    /// Waste partner proves recycling pickup via QR token.
    ConfirmRecycle,
}

impl MutationKind {
    /// Lists to refetch after this mutation succeeds.
    ///
    /// Confirming a pickup changes both the volunteer's and the owner's
    /// view, so it refreshes both.
    pub fn refresh_targets(self) -> &'static [ListKind] {
        match self {
            MutationKind::Accept => &[ListKind::Mine],
            MutationKind::VolunteerAccept => &[ListKind::AssignedTasks],
            MutationKind::ConfirmPickup => &[ListKind::AssignedTasks, ListKind::Mine],
            MutationKind::Delete => &[ListKind::Mine],
            MutationKind::AcceptForRecycling => &[ListKind::ExpiredRecycling],
            MutationKind::ConfirmRecycle => &[ListKind::ExpiredRecycling],
        }
    }

    /// Notification text on success.
    pub fn success_message(self) -> &'static str {
        match self {
            MutationKind::Accept => "Donation accepted!",
            MutationKind::VolunteerAccept => "Task accepted!",
            MutationKind::ConfirmPickup => "Pickup confirmed!",
            MutationKind::Delete => "Donation deleted!",
            MutationKind::AcceptForRecycling => "Accepted for recycling",
            MutationKind::ConfirmRecycle => "Recycled successfully",
        }
    }

    /// Fallback notification text when the server supplies no message.
    pub fn fallback_error(self) -> &'static str {
        match self {
            MutationKind::Accept => "Failed to accept donation",
            MutationKind::VolunteerAccept => "Failed to accept task",
            MutationKind::ConfirmPickup => "Invalid QR token",
            MutationKind::Delete => "Failed to delete donation",
            MutationKind::AcceptForRecycling => "Failed to accept for recycling",
            MutationKind::ConfirmRecycle => "Invalid QR token",
        }
    }
}
