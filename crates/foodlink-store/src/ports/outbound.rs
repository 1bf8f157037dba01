//! Outbound (driven) ports for the donation store.
//!
//! These traits define the store's dependencies: the remote donation
//! service and the notification surface consumers render.

use async_trait::async_trait;
use foodlink_gateway::{AvailableFilter, GatewayError};
use foodlink_types::{Donation, DonationId, QrToken};

/// Remote donation service interface.
///
/// One call per donation action, single attempt, no retries; mirrors
/// the gateway client's contract so the HTTP implementation is a pure
/// delegation.
#[async_trait]
pub trait DonationApi: Send + Sync {
    /// Donations currently claimable, optionally filtered.
    async fn list_available(
        &self,
        filter: &AvailableFilter,
    ) -> Result<Vec<Donation>, GatewayError>;

    /// Donations created by the calling restaurant.
    async fn list_mine(&self) -> Result<Vec<Donation>, GatewayError>;

    /// Pickup tasks assigned to the calling volunteer.
    async fn list_assigned(&self) -> Result<Vec<Donation>, GatewayError>;

    /// Expired donations awaiting recycling.
    async fn list_expired(&self) -> Result<Vec<Donation>, GatewayError>;

    /// NGO claims a donation, optionally naming a volunteer.
    async fn accept(
        &self,
        id: &DonationId,
        volunteer_id: Option<&str>,
    ) -> Result<(), GatewayError>;

    /// Volunteer claims a pickup task.
    async fn volunteer_accept(&self, id: &DonationId) -> Result<(), GatewayError>;

    /// Prove physical pickup with the scanned token.
    async fn confirm_pickup(&self, id: &DonationId, token: &QrToken)
        -> Result<(), GatewayError>;

    /// Waste partner claims an expired donation.
    async fn accept_for_recycling(&self, id: &DonationId) -> Result<(), GatewayError>;

    /// Prove recycling pickup with the scanned token.
    async fn confirm_recycle(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError>;

    /// Restaurant deletes one of its own donations.
    async fn delete(&self, id: &DonationId) -> Result<(), GatewayError>;
}

/// One-shot notification surface.
///
/// Everything the store wants a human to see goes through here; no
/// error ever propagates past the store as a fault.
pub trait Notifier: Send + Sync {
    /// Report a completed action.
    fn success(&self, message: &str);

    /// Report a failed action.
    fn error(&self, message: &str);
}

/// Scripted API stub for tests: lists are served from configured
/// snapshots, mutations succeed or fail per flag, every call is
/// recorded in order.
#[cfg(test)]
pub(crate) struct ScriptedApi {
    pub mine: parking_lot::Mutex<Vec<Donation>>,
    pub tasks: parking_lot::Mutex<Vec<Donation>>,
    pub expired: parking_lot::Mutex<Vec<Donation>>,
    pub fail_mutations: std::sync::atomic::AtomicBool,
    pub fail_lists: std::sync::atomic::AtomicBool,
    pub mutation_error: parking_lot::Mutex<Option<String>>,
    calls: parking_lot::Mutex<Vec<String>>,
}

#[cfg(test)]
impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            mine: parking_lot::Mutex::new(Vec::new()),
            tasks: parking_lot::Mutex::new(Vec::new()),
            expired: parking_lot::Mutex::new(Vec::new()),
            fail_mutations: std::sync::atomic::AtomicBool::new(false),
            fail_lists: std::sync::atomic::AtomicBool::new(false),
            mutation_error: parking_lot::Mutex::new(None),
            calls: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn serve_list(
        &self,
        name: &str,
        list: &parking_lot::Mutex<Vec<Donation>>,
    ) -> Result<Vec<Donation>, GatewayError> {
        self.record(name);
        if self.fail_lists.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(GatewayError::Connection("refused".to_string()));
        }
        Ok(list.lock().clone())
    }

    fn mutation_result(&self, name: &str) -> Result<(), GatewayError> {
        self.record(name);
        if self.fail_mutations.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(GatewayError::Remote {
                status: 409,
                message: self.mutation_error.lock().clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[async_trait]
impl DonationApi for ScriptedApi {
    async fn list_available(
        &self,
        _filter: &AvailableFilter,
    ) -> Result<Vec<Donation>, GatewayError> {
        self.record("list_available");
        Ok(Vec::new())
    }

    async fn list_mine(&self) -> Result<Vec<Donation>, GatewayError> {
        self.serve_list("list_mine", &self.mine)
    }

    async fn list_assigned(&self) -> Result<Vec<Donation>, GatewayError> {
        self.serve_list("list_assigned", &self.tasks)
    }

    async fn list_expired(&self) -> Result<Vec<Donation>, GatewayError> {
        self.serve_list("list_expired", &self.expired)
    }

    async fn accept(
        &self,
        id: &DonationId,
        _volunteer_id: Option<&str>,
    ) -> Result<(), GatewayError> {
        self.mutation_result(&format!("accept:{id}"))
    }

    async fn volunteer_accept(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutation_result(&format!("volunteer_accept:{id}"))
    }

    async fn confirm_pickup(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        self.mutation_result(&format!("confirm_pickup:{id}:{}", token.expose()))
    }

    async fn accept_for_recycling(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutation_result(&format!("accept_for_recycling:{id}"))
    }

    async fn confirm_recycle(
        &self,
        id: &DonationId,
        token: &QrToken,
    ) -> Result<(), GatewayError> {
        self.mutation_result(&format!("confirm_recycle:{id}:{}", token.expose()))
    }

    async fn delete(&self, id: &DonationId) -> Result<(), GatewayError> {
        self.mutation_result(&format!("delete:{id}"))
    }
}

/// Notifier that records every message for assertions.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub successes: parking_lot::Mutex<Vec<String>>,
    pub errors: parking_lot::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }
}
