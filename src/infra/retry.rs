// Bounded fixed-delay retry for transient transport failures.

use std::future::Future;
use std::time::Duration;

/// Attempt budget for one submission.
pub const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause between attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Runs `op` up to `max_attempts` times, sleeping `delay` between attempts,
/// retrying only while `is_transient` holds for the error.
///
/// A non-transient error aborts immediately with the remaining budget unused;
/// exhausting the budget yields a terminal error naming the attempt count.
pub async fn with_retry<T, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    is_transient: impl Fn(&anyhow::Error) -> bool,
    mut op: F,
) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_transient(&e) && attempt < max_attempts => {
                println!("RPC request failed (attempt {}): {}", attempt, e);
                tokio::time::sleep(delay).await;
            }
            Err(e) if is_transient(&e) => {
                return Err(anyhow::anyhow!("failed after {} attempts: {}", attempt, e));
            }
            Err(e) => return Err(e),
        }
    }
}
