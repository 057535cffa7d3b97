mod common;

use std::time::Duration;

use arise_client::retry::fetch_results_with_retry;
use arise_client::{CancellationToken, ClientError, RetryPolicy};
use common::FakeBackend;
use tokio::time::Instant;
use uuid::Uuid;

#[tokio::test(start_paused = true)]
async fn backs_off_two_four_six_seconds() {
    let backend = FakeBackend::with(|s| s.pending_results = 3);
    let start = Instant::now();

    let result = fetch_results_with_retry(
        &backend,
        Uuid::new_v4(),
        &RetryPolicy::default(),
        &CancellationToken::new(),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(backend.state().result_calls, 4);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(12), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(13), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn stops_after_max_retries() {
    let backend = FakeBackend::with(|s| s.pending_results = 4);

    let err = fetch_results_with_retry(
        &backend,
        Uuid::new_v4(),
        &RetryPolicy::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(backend.state().result_calls, 4);
}

#[tokio::test(start_paused = true)]
async fn cancellation_interrupts_backoff() {
    let backend = FakeBackend::with(|s| s.pending_results = 10);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        trigger.cancel();
    });

    let err = fetch_results_with_retry(&backend, Uuid::new_v4(), &RetryPolicy::default(), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Cancelled));
    // Attempts at 0s and 2s; the wait before the third is cut short.
    assert_eq!(backend.state().result_calls, 2);
}

#[test]
fn only_transient_errors_retry() {
    assert!(ClientError::NotFound("x".into()).is_retryable());
    assert!(ClientError::Api { status: 503, message: String::new() }.is_retryable());
    assert!(ClientError::Api { status: 429, message: String::new() }.is_retryable());
    assert!(!ClientError::Api { status: 422, message: String::new() }.is_retryable());
    assert!(!ClientError::Cancelled.is_retryable());
}
