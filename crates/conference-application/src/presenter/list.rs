//! Presenter-side mirror of a repository list.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use conference_core::entity::{Entity, sort_for_display};
use conference_core::observable::{ListStream, Snapshot};

use super::state::OperationState;

/// Holds the latest snapshot received from a repository stream.
///
/// A background task forwards every published snapshot into a local `watch`
/// cell. The task is aborted when the `ListState` is dropped or restarted.
pub struct ListState<T: Entity> {
    items: Arc<watch::Sender<Snapshot<T>>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Entity> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(watch::Sender::new(Snapshot {
                version: 0,
                items: Arc::new(Vec::new()),
            })),
            task: Mutex::new(None),
        }
    }

    pub fn items(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items.borrow().items)
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.items.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Snapshot<T>> {
        self.items.subscribe()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.items.borrow().items.iter().find(|item| item.id() == id).cloned()
    }

    /// (Re)starts forwarding `stream` into this list.
    ///
    /// `state` reports loading until the first snapshot arrives. If the
    /// stream ends before delivering anything, `error` receives
    /// `"{failure}: repository closed"`.
    pub fn subscribe(&self, mut stream: ListStream<T>, state: &OperationState, failure: &str) {
        let loading = state.begin();
        let state = state.clone();
        let failure = failure.to_string();
        let sender = Arc::clone(&self.items);

        let handle = tokio::spawn(async move {
            let mut loading = Some(loading);
            while let Some(snapshot) = stream.next().await {
                sender.send_replace(in_display_order(snapshot));
                loading.take();
            }
            if let Some(_loading) = loading.take() {
                state.fail(format!("{}: repository closed", failure));
            }
            tracing::debug!("[ListState] {} stream ended", T::KIND);
        });

        let previous = self
            .task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

impl<T: Entity> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Drop for ListState<T> {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
        }
    }
}

/// Repositories already publish sorted lists; only re-sort when one doesn't.
fn in_display_order<T: Entity>(snapshot: Snapshot<T>) -> Snapshot<T> {
    let sorted = snapshot
        .items
        .is_sorted_by(|a, b| a.display_order(b) != Ordering::Greater);
    if sorted {
        return snapshot;
    }
    let mut items = snapshot.items.as_ref().clone();
    sort_for_display(&mut items);
    Snapshot {
        version: snapshot.version,
        items: Arc::new(items),
    }
}
