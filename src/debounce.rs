use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Generation-counter gate used for both input debouncing and superseding
/// in-flight fetches.
///
/// Every `arm` invalidates all previously issued tokens. A task that armed
/// the gate sleeps for the quiet window and commits only if its token is
/// still current, so a burst of keystrokes coalesces into a single commit
/// carrying the last value. The same check drops responses that were
/// overtaken by a newer request, so stale results never overwrite fresh ones.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Invalidate outstanding tokens and issue a new one.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Sleep out the quiet window, then report whether `token` survived it.
    pub async fn wait(&self, token: u64, window: Duration) -> bool {
        tokio::time::sleep(window).await;
        self.is_current(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(20);

    #[tokio::test]
    async fn lone_token_commits_after_quiet_window() {
        let debouncer = Debouncer::default();
        let token = debouncer.arm();
        assert!(debouncer.wait(token, WINDOW).await);
    }

    #[tokio::test]
    async fn rapid_arms_commit_only_the_last_token() {
        let debouncer = Debouncer::default();
        let mut handles = Vec::new();
        let mut last_token = 0;
        for _ in 0..5 {
            let token = debouncer.arm();
            last_token = token;
            let debouncer = debouncer.clone();
            handles.push(tokio::spawn(
                async move { (token, debouncer.wait(token, WINDOW).await) },
            ));
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        let mut committed = Vec::new();
        for handle in handles {
            let (token, ok) = handle.await.unwrap();
            if ok {
                committed.push(token);
            }
        }
        // Exactly one commit per quiet period, carrying the final value.
        assert_eq!(committed, vec![last_token]);
    }

    #[tokio::test]
    async fn token_goes_stale_when_superseded_mid_flight() {
        let debouncer = Debouncer::default();
        let first = debouncer.arm();
        assert!(debouncer.is_current(first));
        let second = debouncer.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
