//! Cooperative waiting on top of the tokio clock.

use std::time::Duration;

use tokio::time::{Instant, sleep};

/// Polls `predicate` every `poll` until it holds or `timeout` elapses.
/// Returns whether the predicate held.
///
/// The predicate is checked once up front, so a zero timeout still observes
/// the current state. Sleeping between polls suspends the task; other work
/// on the runtime proceeds in the meantime.
pub async fn wait_until(timeout: Duration, poll: Duration, predicate: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if predicate() {
            return true;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return false;
        }
        sleep(remaining.min(poll)).await;
    }
}
