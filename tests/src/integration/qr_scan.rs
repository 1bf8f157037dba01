//! End-to-end QR confirmation flows: handler + store + stub API.

#![cfg(test)]

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::support::{donation, StubFixture};
use foodlink_store::{QrError, QrScanHandler, ScanContext, ScanOutcome};
use foodlink_types::DonationStatus;

#[tokio::test]
async fn pickup_scan_confirms_and_refreshes_both_views() {
    let f = StubFixture::new();
    *f.api.tasks.lock() = vec![donation("id1", DonationStatus::Accepted)];
    f.store.fetch_tasks().await;

    let handler = QrScanHandler::new(Arc::clone(&f.store));
    let outcome = handler.handle_scan("id1:tok", ScanContext::Pickup).await;

    assert_eq!(outcome, ScanOutcome::Confirmed);
    let calls = f.api.calls();
    assert!(calls.contains(&"confirm_pickup:id1:tok".to_string()));
    // The confirm-pickup plan touches both the tasks and owner views.
    assert!(calls.contains(&"list_mine".to_string()));
    assert_eq!(f.notifier.successes.lock().as_slice(), ["Pickup confirmed!"]);
}

#[tokio::test]
async fn recycle_scan_confirms_against_the_expired_list() {
    let f = StubFixture::new();
    *f.api.expired.lock() = vec![donation("e1", DonationStatus::AcceptedForRecycling)];
    f.store.fetch_expired().await;

    let handler = QrScanHandler::new(Arc::clone(&f.store));
    let outcome = handler.handle_scan("e1:tok", ScanContext::Recycle).await;

    assert_eq!(outcome, ScanOutcome::Confirmed);
    assert!(f
        .api
        .calls()
        .contains(&"confirm_recycle:e1:tok".to_string()));
    assert_eq!(
        f.notifier.successes.lock().as_slice(),
        ["Recycled successfully"]
    );
}

#[tokio::test]
async fn malformed_scans_never_reach_the_network() {
    let f = StubFixture::new();
    let handler = QrScanHandler::new(Arc::clone(&f.store));

    for (raw, expected) in [
        ("", QrError::EmptyScan),
        ("no-colon-here", QrError::InvalidFormat),
        (":token-only", QrError::InvalidFormat),
        ("id-only:", QrError::InvalidFormat),
    ] {
        let outcome = handler.handle_scan(raw, ScanContext::Pickup).await;
        assert_eq!(outcome, ScanOutcome::RejectedLocally(expected), "scan {raw:?}");
    }

    assert!(f.api.calls().is_empty());
    assert_eq!(f.notifier.errors.lock().len(), 4);
}

#[tokio::test]
async fn scan_for_unknown_task_is_rejected_before_the_network() {
    let f = StubFixture::new();
    *f.api.tasks.lock() = vec![donation("known", DonationStatus::Accepted)];
    f.store.fetch_tasks().await;

    let handler = QrScanHandler::new(Arc::clone(&f.store));
    let outcome = handler.handle_scan("unknown:tok", ScanContext::Pickup).await;

    assert_eq!(outcome, ScanOutcome::RejectedLocally(QrError::NoMatchingTask));
    // Only the priming fetch hit the API.
    assert_eq!(f.api.calls(), vec!["list_assigned"]);
}

#[tokio::test]
async fn server_rejected_scan_reports_invalid_token() {
    let f = StubFixture::new();
    *f.api.expired.lock() = vec![donation("e2", DonationStatus::Expired)];
    f.store.fetch_expired().await;

    f.api.fail_mutations.store(true, Ordering::SeqCst);
    let handler = QrScanHandler::new(Arc::clone(&f.store));
    let outcome = handler.handle_scan("e2:badtok", ScanContext::Recycle).await;

    assert_eq!(outcome, ScanOutcome::Rejected);
    assert_eq!(f.notifier.errors.lock().as_slice(), ["Invalid QR token"]);
    // List still reflects the last successful fetch.
    assert_eq!(f.store.expired().len(), 1);
}
