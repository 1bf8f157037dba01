//! View-list identities.

use std::fmt;

/// The four independent view lists owned by the store.
///
/// Each is replaced wholesale on every successful fetch; stale entries
/// are discarded in favor of the server's current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Donations claimable by NGOs.
    Available,
    /// Donations created by the calling restaurant.
    Mine,
    /// Pickup tasks assigned to the calling volunteer.
    AssignedTasks,
    /// Expired donations awaiting recycling.
    ExpiredRecycling,
}

impl ListKind {
    /// Fixed notification text when fetching this list fails.
    pub fn fetch_error_message(self) -> &'static str {
        match self {
            ListKind::Available => "Failed to fetch available donations.",
            ListKind::Mine => "Failed to fetch your donations.",
            ListKind::AssignedTasks => "Failed to fetch volunteer tasks.",
            ListKind::ExpiredRecycling => "Failed to fetch expired donations.",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListKind::Available => "available",
            ListKind::Mine => "mine",
            ListKind::AssignedTasks => "assigned_tasks",
            ListKind::ExpiredRecycling => "expired_recycling",
        };
        f.write_str(s)
    }
}
