//! Page liveness
//!
//! Navigation away cancels the scope; a load still in flight then
//! resolves to `None` instead of handing its result to an unmounted
//! view. Wraps `tokio_util`'s `CancellationToken`.

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Liveness scope for one mounted page.
#[derive(Debug, Clone, Default)]
pub struct PageScope {
    token: CancellationToken,
}

impl PageScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child scope cancelled together with this one.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Cancel the scope (teardown).
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run a load under this scope. Returns `None` when the scope was
    /// cancelled before the load finished; the result must then be
    /// dropped, never applied.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            _ = self.token.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn live_scope_passes_results_through() {
        let scope = PageScope::new();
        assert_eq!(scope.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn cancelled_scope_drops_results() {
        let scope = PageScope::new();
        scope.cancel();
        assert_eq!(scope.run(async { 7 }).await, None);
    }

    #[tokio::test]
    async fn cancel_mid_flight_wins() {
        let scope = PageScope::new();
        let inner = scope.clone();
        let handle = tokio::spawn(async move {
            inner
                .run(async {
                    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                    7
                })
                .await
        });
        tokio::task::yield_now().await;
        scope.cancel();
        assert_eq!(handle.await.unwrap(), None);
    }

    #[tokio::test]
    async fn child_scope_follows_parent() {
        let scope = PageScope::new();
        let child = scope.child();
        scope.cancel();
        assert!(child.is_cancelled());
    }
}
