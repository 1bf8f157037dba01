//! Store orchestration over the stub API: fetch/mutate cycles, refresh
//! plans, and loading-flag behavior under overlapping operations.

#![cfg(test)]

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::support::{donation, StubFixture};
use foodlink_types::{DonationId, DonationStatus};

#[tokio::test]
async fn fetch_then_mutate_then_refetch_cycle() {
    let f = StubFixture::new();
    *f.api.mine.lock() = vec![
        donation("d1", DonationStatus::Available),
        donation("d2", DonationStatus::Available),
    ];

    f.store.fetch_mine().await;
    assert_eq!(f.store.mine().len(), 2);

    // Delete succeeds server-side; the store refetches the snapshot the
    // server now holds.
    *f.api.mine.lock() = vec![donation("d2", DonationStatus::Available)];
    f.store.delete(&DonationId::new("d1")).await;

    assert_eq!(f.api.calls(), vec!["list_mine", "delete:d1", "list_mine"]);
    assert_eq!(f.store.mine().len(), 1);
    assert_eq!(f.store.mine()[0].id, DonationId::new("d2"));
    assert_eq!(f.notifier.successes.lock().as_slice(), ["Donation deleted!"]);
}

#[tokio::test]
async fn volunteer_accept_refreshes_only_the_task_list() {
    let f = StubFixture::new();
    *f.api.tasks.lock() = vec![donation("t1", DonationStatus::Accepted)];

    f.store.volunteer_accept(&DonationId::new("t1")).await;

    assert_eq!(f.api.calls(), vec!["volunteer_accept:t1", "list_assigned"]);
    assert_eq!(f.store.tasks().len(), 1);
    assert!(f.store.mine().is_empty());
}

#[tokio::test]
async fn accept_for_recycling_refreshes_the_expired_list() {
    let f = StubFixture::new();
    *f.api.expired.lock() = vec![donation("e1", DonationStatus::Expired)];

    f.store.accept_for_recycling(&DonationId::new("e1")).await;

    assert_eq!(
        f.api.calls(),
        vec!["accept_for_recycling:e1", "list_expired"]
    );
    assert_eq!(
        f.notifier.successes.lock().as_slice(),
        ["Accepted for recycling"]
    );
}

#[tokio::test]
async fn failed_mutation_leaves_cache_untouched() {
    let f = StubFixture::new();
    *f.api.mine.lock() = vec![donation("d1", DonationStatus::Available)];
    f.store.fetch_mine().await;

    f.api.fail_mutations.store(true, Ordering::SeqCst);
    *f.api.mutation_message.lock() = Some("Donation not found".to_string());
    f.store.delete(&DonationId::new("d1")).await;

    // The failed mutation triggered no refetch and changed nothing.
    assert_eq!(f.api.calls(), vec!["list_mine", "delete:d1"]);
    assert_eq!(f.store.mine().len(), 1);
    assert_eq!(f.notifier.errors.lock().as_slice(), ["Donation not found"]);
    assert!(!f.store.is_loading());
}

#[tokio::test]
async fn loading_flag_spans_inflight_operations() {
    let f = StubFixture::new();
    *f.api.delay.lock() = Some(Duration::from_millis(50));

    assert!(!f.store.is_loading());

    let store = Arc::clone(&f.store);
    let fetch = tokio::spawn(async move { store.fetch_mine().await });

    // Give the fetch a moment to pass its suspension point.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(f.store.is_loading());

    fetch.await.unwrap();
    assert!(!f.store.is_loading());
}

#[tokio::test]
async fn overlapping_operations_leave_loading_false_after_the_last_one() {
    let f = StubFixture::new();
    *f.api.delay.lock() = Some(Duration::from_millis(30));

    let store_a = Arc::clone(&f.store);
    let store_b = Arc::clone(&f.store);
    let (a, b) = tokio::join!(
        tokio::spawn(async move { store_a.fetch_mine().await }),
        tokio::spawn(async move { store_b.fetch_tasks().await }),
    );
    a.unwrap();
    b.unwrap();

    // Whichever cleanup ran last, the terminal state is not-loading.
    assert!(!f.store.is_loading());
}
