//! The donation store: cached view lists, loading flag, and the
//! fetch/mutation orchestration cycle.

use crate::domain::{ConfirmOutcome, ListKind, MutationKind};
use crate::ports::{DonationApi, Notifier};
use foodlink_gateway::AvailableFilter;
use foodlink_types::{Donation, DonationId, QrToken};
use parking_lot::RwLock;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// The four cached view lists.
#[derive(Debug, Clone, Default)]
struct ViewLists {
    available: Vec<Donation>,
    mine: Vec<Donation>,
    tasks: Vec<Donation>,
    expired: Vec<Donation>,
}

impl ViewLists {
    fn get(&self, kind: ListKind) -> &Vec<Donation> {
        match kind {
            ListKind::Available => &self.available,
            ListKind::Mine => &self.mine,
            ListKind::AssignedTasks => &self.tasks,
            ListKind::ExpiredRecycling => &self.expired,
        }
    }

    fn get_mut(&mut self, kind: ListKind) -> &mut Vec<Donation> {
        match kind {
            ListKind::Available => &mut self.available,
            ListKind::Mine => &mut self.mine,
            ListKind::AssignedTasks => &mut self.tasks,
            ListKind::ExpiredRecycling => &mut self.expired,
        }
    }
}

/// Clears the loading flag when dropped, so cleanup runs on every
/// path out of an operation.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Explicit state container mediating between consumers and the remote
/// donation service.
///
/// Single writer (the store itself), many readers: readers get cloned
/// snapshots, the lists are only ever swapped wholesale. The loading
/// flag is process-wide and not per-list; when operations overlap, the
/// last one to finish wins the visible `false`. Actions are serialized
/// by user affordances, not by the store.
pub struct DonationStore {
    api: Arc<dyn DonationApi>,
    notifier: Arc<dyn Notifier>,
    lists: RwLock<ViewLists>,
    loading: AtomicBool,
}

impl DonationStore {
    /// Create a store over the given service and notification surface.
    pub fn new(api: Arc<dyn DonationApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            lists: RwLock::new(ViewLists::default()),
            loading: AtomicBool::new(false),
        }
    }

    fn begin_loading(&self) -> LoadingGuard<'_> {
        self.loading.store(true, Ordering::SeqCst);
        LoadingGuard {
            flag: &self.loading,
        }
    }

    // === Read access ===

    /// Whether any store operation is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Snapshot of a cached list.
    pub fn list(&self, kind: ListKind) -> Vec<Donation> {
        self.lists.read().get(kind).clone()
    }

    /// Snapshot of the available-donations list.
    pub fn available(&self) -> Vec<Donation> {
        self.list(ListKind::Available)
    }

    /// Snapshot of the caller's own donations.
    pub fn mine(&self) -> Vec<Donation> {
        self.list(ListKind::Mine)
    }

    /// Snapshot of the volunteer's assigned tasks.
    pub fn tasks(&self) -> Vec<Donation> {
        self.list(ListKind::AssignedTasks)
    }

    /// Snapshot of the expired-for-recycling list.
    pub fn expired(&self) -> Vec<Donation> {
        self.list(ListKind::ExpiredRecycling)
    }

    /// Whether a donation id is present in a cached list.
    pub fn contains(&self, kind: ListKind, id: &DonationId) -> bool {
        self.lists.read().get(kind).iter().any(|d| &d.id == id)
    }

    pub(crate) fn notify_error(&self, message: &str) {
        self.notifier.error(message);
    }

    // === Fetches ===

    /// Fetch the available-donations list with the caller's filter.
    pub async fn fetch_available(&self, filter: &AvailableFilter) {
        let _guard = self.begin_loading();
        match self.api.list_available(filter).await {
            Ok(list) => self.replace(ListKind::Available, list),
            Err(e) => self.report_fetch_failure(ListKind::Available, &e),
        }
    }

    /// Fetch the caller's own donations.
    pub async fn fetch_mine(&self) {
        self.refresh(ListKind::Mine).await;
    }

    /// Fetch the volunteer's assigned pickup tasks.
    pub async fn fetch_tasks(&self) {
        self.refresh(ListKind::AssignedTasks).await;
    }

    /// Fetch the expired donations awaiting recycling.
    pub async fn fetch_expired(&self) {
        self.refresh(ListKind::ExpiredRecycling).await;
    }

    /// Fetch `kind` and replace the cached list on success.
    ///
    /// On failure the previous snapshot is left untouched and a fixed
    /// fallback message is reported.
    pub(crate) async fn refresh(&self, kind: ListKind) {
        let _guard = self.begin_loading();
        let result = match kind {
            ListKind::Available => self.api.list_available(&AvailableFilter::default()).await,
            ListKind::Mine => self.api.list_mine().await,
            ListKind::AssignedTasks => self.api.list_assigned().await,
            ListKind::ExpiredRecycling => self.api.list_expired().await,
        };
        match result {
            Ok(list) => self.replace(kind, list),
            Err(e) => self.report_fetch_failure(kind, &e),
        }
    }

    fn replace(&self, kind: ListKind, list: Vec<Donation>) {
        info!(list = %kind, count = list.len(), "replaced cached donation list");
        *self.lists.write().get_mut(kind) = list;
    }

    fn report_fetch_failure(&self, kind: ListKind, error: &foodlink_gateway::GatewayError) {
        warn!(list = %kind, error = %error, "donation list fetch failed");
        self.notifier.error(kind.fetch_error_message());
    }

    // === Mutations ===

    /// NGO accepts a donation, optionally assigning a volunteer.
    pub async fn accept(&self, id: &DonationId, volunteer_id: Option<&str>) {
        self.run_mutation(MutationKind::Accept, self.api.accept(id, volunteer_id))
            .await;
    }

    /// Volunteer claims a pickup task.
    pub async fn volunteer_accept(&self, id: &DonationId) {
        self.run_mutation(MutationKind::VolunteerAccept, self.api.volunteer_accept(id))
            .await;
    }

    /// Confirm a pickup with the scanned token.
    pub async fn confirm_pickup(&self, id: &DonationId, token: &QrToken) -> ConfirmOutcome {
        self.run_mutation(MutationKind::ConfirmPickup, self.api.confirm_pickup(id, token))
            .await
    }

    /// Restaurant deletes one of its own donations.
    pub async fn delete(&self, id: &DonationId) {
        self.run_mutation(MutationKind::Delete, self.api.delete(id))
            .await;
    }

    /// Waste partner claims an expired donation for recycling.
    pub async fn accept_for_recycling(&self, id: &DonationId) {
        self.run_mutation(
            MutationKind::AcceptForRecycling,
            self.api.accept_for_recycling(id),
        )
        .await;
    }

    /// Confirm a recycling pickup with the scanned token.
    pub async fn confirm_recycle(&self, id: &DonationId, token: &QrToken) -> ConfirmOutcome {
        self.run_mutation(
            MutationKind::ConfirmRecycle,
            self.api.confirm_recycle(id, token),
        )
        .await
    }

    /// Shared mutation cycle: loading flag, gateway call, notification,
    /// then the mutation's declared refresh targets in order.
    ///
    /// The refresh begins only after the mutation call resolves; the
    /// two steps are sequential, never concurrent.
    async fn run_mutation<F>(&self, kind: MutationKind, op: F) -> ConfirmOutcome
    where
        F: Future<Output = Result<(), foodlink_gateway::GatewayError>>,
    {
        let _guard = self.begin_loading();
        match op.await {
            Ok(()) => {
                info!(mutation = ?kind, "donation mutation applied");
                self.notifier.success(kind.success_message());
                for &target in kind.refresh_targets() {
                    self.refresh(target).await;
                }
                ConfirmOutcome::Confirmed
            }
            Err(e) => {
                warn!(mutation = ?kind, error = %e, "donation mutation failed");
                let message = e
                    .server_message()
                    .unwrap_or_else(|| kind.fallback_error());
                self.notifier.error(message);
                ConfirmOutcome::Rejected
            }
        }
    }
}
