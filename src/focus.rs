//! deferred focus moves after navigation
//!
//! A [`Debouncer`] holds at most one pending action. Scheduling a new one
//! aborts whatever was pending, so only the latest navigation ever moves
//! focus.

use std::{future::Future, sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::AbortHandle};

use crate::document::Document;

/// element that receives focus once a view has rendered
pub const PRIMARY_CONTAINER_ID: &str = "primary-app-container";

/// delay between a path change and the focus move
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<AbortHandle>,
}

impl Debouncer {
    /// run `action` after `delay`, cancelling any action still waiting
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        self.pending = Some(task.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Default)]
pub struct FocusManager {
    debouncer: Debouncer,
}

impl FocusManager {
    /// move focus to the primary container of `document` once the delay
    /// elapses, unless another path change supersedes this one first
    pub fn schedule<D>(&mut self, document: Arc<Mutex<D>>, path: &str)
    where
        D: Document + Send + 'static,
    {
        let path = path.to_string();
        self.debouncer.schedule(FOCUS_DELAY, async move {
            let mut document = document.lock().await;
            if document.focus(PRIMARY_CONTAINER_ID) {
                tracing::debug!(%path, "focused primary container");
            } else {
                tracing::debug!(%path, "primary container not rendered, focus unchanged");
            }
        });
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_latest_action_runs() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::default();

        for label in ["a", "b", "c"] {
            let fired = fired.clone();
            debouncer.schedule(Duration::from_millis(50), async move {
                fired.lock().await.push(label);
            });
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(*fired.lock().await, vec!["c"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_out_actions_all_run() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::default();

        for _ in 0..3 {
            let count = count.clone();
            debouncer.schedule(Duration::from_millis(50), async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(80)).await;
        }

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_debouncer_cancels_pending_work() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let mut debouncer = Debouncer::default();
            let count = count.clone();
            debouncer.schedule(Duration::from_millis(50), async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
            assert!(debouncer.is_pending());
        }

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
