//! Observable state shared by every presenter.

use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use conference_core::error::Result;

/// Outcome of the last mutating action, consumed once by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum OperationResult {
    Success(String),
    Error(String),
}

impl OperationResult {
    pub fn message(&self) -> &str {
        match self {
            OperationResult::Success(message) | OperationResult::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }
}

struct StateInner {
    component: &'static str,
    in_flight: Mutex<usize>,
    is_loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
    operation_result: watch::Sender<Option<OperationResult>>,
    image_upload_progress: watch::Sender<Option<f32>>,
}

/// Loading, error, result and upload-progress cells of one presenter.
///
/// Each cell is a `watch` channel, so views can either read the current
/// value or await changes. Cloning shares the same cells.
#[derive(Clone)]
pub struct OperationState {
    inner: Arc<StateInner>,
}

impl OperationState {
    pub fn new(component: &'static str) -> Self {
        Self {
            inner: Arc::new(StateInner {
                component,
                in_flight: Mutex::new(0),
                is_loading: watch::Sender::new(false),
                error: watch::Sender::new(None),
                operation_result: watch::Sender::new(None),
                image_upload_progress: watch::Sender::new(None),
            }),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.inner.is_loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.error.borrow().clone()
    }

    pub fn operation_result(&self) -> Option<OperationResult> {
        self.inner.operation_result.borrow().clone()
    }

    pub fn image_upload_progress(&self) -> Option<f32> {
        *self.inner.image_upload_progress.borrow()
    }

    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.inner.is_loading.subscribe()
    }

    pub fn watch_error(&self) -> watch::Receiver<Option<String>> {
        self.inner.error.subscribe()
    }

    pub fn watch_operation_result(&self) -> watch::Receiver<Option<OperationResult>> {
        self.inner.operation_result.subscribe()
    }

    pub fn watch_image_upload_progress(&self) -> watch::Receiver<Option<f32>> {
        self.inner.image_upload_progress.subscribe()
    }

    pub fn clear_error(&self) {
        self.inner.error.send_replace(None);
    }

    pub fn clear_operation_result(&self) {
        self.inner.operation_result.send_replace(None);
    }

    /// Marks an operation as in flight and clears the previous error.
    ///
    /// `is_loading` stays true until every outstanding guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.clear_error();
        LoadingGuard::acquire(Arc::clone(&self.inner))
    }

    pub fn succeed(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("[{}] {}", self.inner.component, message);
        self.inner
            .operation_result
            .send_replace(Some(OperationResult::Success(message)));
    }

    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("[{}] {}", self.inner.component, message);
        self.inner.error.send_replace(Some(message));
    }

    /// Runs one repository call under the presenter contract.
    ///
    /// On success `operation_result` receives `success`; on failure `error`
    /// receives `"{failure}: {cause}"` and `operation_result` is untouched.
    ///
    /// The call runs on its own task, so dropping the returned future only
    /// gives up the result: the mutation and its state updates still land.
    pub async fn run<T, F>(&self, success: &str, failure: &str, call: F) -> Option<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let loading = self.begin();
        let state = self.clone();
        let success = success.to_string();
        let failure = failure.to_string();
        self.detach(async move {
            let _loading = loading;
            match call.await {
                Ok(value) => {
                    state.succeed(success);
                    Some(value)
                }
                Err(e) => {
                    state.fail(format!("{}: {}", failure, e));
                    None
                }
            }
        })
        .await
        .flatten()
    }

    /// Spawns `task` and waits for it without tying its lifetime to the
    /// caller. A panicking task is reported through `error`.
    pub async fn detach<T, F>(&self, task: F) -> Option<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        match tokio::spawn(task).await {
            Ok(value) => Some(value),
            Err(e) => {
                self.fail(format!("Operation aborted: {}", e));
                None
            }
        }
    }

    /// Starts reporting upload progress; progress returns to absent when
    /// the returned guard is dropped.
    pub fn begin_upload(&self) -> UploadProgress {
        self.clear_error();
        self.inner.image_upload_progress.send_replace(Some(0.0));
        UploadProgress {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// RAII marker for one in-flight operation.
pub struct LoadingGuard {
    inner: Arc<StateInner>,
}

impl LoadingGuard {
    fn acquire(inner: Arc<StateInner>) -> Self {
        {
            let mut in_flight = inner.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            *in_flight += 1;
            inner.is_loading.send_replace(true);
        }
        Self { inner }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut in_flight = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.inner.is_loading.send_replace(false);
        }
    }
}

/// RAII handle for an image upload's progress cell.
pub struct UploadProgress {
    inner: Arc<StateInner>,
}

impl UploadProgress {
    pub fn report(&self, fraction: f32) {
        self.inner
            .image_upload_progress
            .send_replace(Some(fraction.clamp(0.0, 1.0)));
    }
}

impl Drop for UploadProgress {
    fn drop(&mut self) {
        self.inner.image_upload_progress.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_core::error::ConferenceError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_success_sets_result_only() {
        let state = OperationState::new("Test");
        let value = state
            .run("Thing created successfully", "Failed to create thing", async {
                Ok::<_, ConferenceError>(7)
            })
            .await;

        assert_eq!(value, Some(7));
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(
            state.operation_result(),
            Some(OperationResult::Success("Thing created successfully".into()))
        );
    }

    #[tokio::test]
    async fn test_run_failure_sets_error_and_keeps_result() {
        let state = OperationState::new("Test");
        state.succeed("Thing created successfully");

        let value: Option<()> = state
            .run("Thing deleted successfully", "Failed to delete thing", async {
                Err(ConferenceError::not_found("Thing", "t1"))
            })
            .await;

        assert_eq!(value, None);
        assert_eq!(
            state.error().as_deref(),
            Some("Failed to delete thing: Thing not found: t1")
        );
        assert_eq!(
            state.operation_result().unwrap().message(),
            "Thing created successfully"
        );
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_completes_after_caller_gives_up() {
        let state = OperationState::new("Test");
        let (tx, rx) = tokio::sync::oneshot::channel();
        let call = async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tx.send(());
            Ok::<_, ConferenceError>(())
        };

        let waited = tokio::time::timeout(
            Duration::from_millis(200),
            state.run("Thing saved successfully", "Failed to save thing", call),
        )
        .await;
        assert!(waited.is_err());
        assert!(state.is_loading());

        rx.await.unwrap();
        state.watch_loading().wait_for(|l| !l).await.unwrap();
        assert_eq!(
            state.operation_result().unwrap().message(),
            "Thing saved successfully"
        );
    }

    #[test]
    fn test_loading_tracks_overlapping_operations() {
        let state = OperationState::new("Test");
        let first = state.begin();
        let second = state.begin();
        assert!(state.is_loading());

        drop(first);
        assert!(state.is_loading());
        drop(second);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let state = OperationState::new("Test");
        state.fail("boom");
        let _guard = state.begin();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_upload_progress_resets_on_drop() {
        let state = OperationState::new("Test");
        {
            let progress = state.begin_upload();
            assert_eq!(state.image_upload_progress(), Some(0.0));
            progress.report(0.5);
            assert_eq!(state.image_upload_progress(), Some(0.5));
        }
        assert_eq!(state.image_upload_progress(), None);
    }

    #[test]
    fn test_clear_operation_result_leaves_error() {
        let state = OperationState::new("Test");
        state.succeed("done");
        state.fail("boom");
        state.clear_operation_result();
        assert_eq!(state.operation_result(), None);
        assert_eq!(state.error().as_deref(), Some("boom"));
    }
}
