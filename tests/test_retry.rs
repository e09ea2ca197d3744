//! Retry wrapper behavior: transient failures burn budget, non-transient
//! failures abort immediately, exhaustion names the attempt count.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use voter_checkin_example::infra::retry::with_retry;

fn is_transport(e: &anyhow::Error) -> bool {
    e.to_string().contains("transport")
}

#[tokio::test]
async fn transient_failures_retry_until_success() {
    let attempts = AtomicU32::new(0);

    let result = with_retry(3, Duration::from_millis(1), is_transport, || {
        let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n < 3 {
                Err(anyhow::anyhow!("transport glitch"))
            } else {
                Ok("signature")
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), "signature");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn non_transient_failure_aborts_on_first_attempt() {
    let attempts = AtomicU32::new(0);

    let result: anyhow::Result<&str> = with_retry(3, Duration::from_millis(1), is_transport, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(anyhow::anyhow!("ledger rejected the transaction")) }
    })
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("ledger rejected"));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_budget_names_the_attempt_count() {
    let attempts = AtomicU32::new(0);

    let result: anyhow::Result<&str> = with_retry(3, Duration::from_millis(1), is_transport, || {
        attempts.fetch_add(1, Ordering::SeqCst);
        async { Err(anyhow::anyhow!("transport down")) }
    })
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed after 3 attempts"));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
