//! Replayable list snapshots.
//!
//! A repository owns one [`SnapshotPublisher`] and hands out [`ListStream`]s.
//! Each stream yields the latest snapshot immediately and then one snapshot
//! per publication. Slow subscribers skip straight to the newest snapshot;
//! the `version` field lets them tell how many publications they missed.

use std::sync::Arc;
use tokio::sync::watch;

/// One published state of a repository collection.
#[derive(Debug)]
pub struct Snapshot<T> {
    /// Monotonic publication counter; the initial state is version 0.
    pub version: u64,
    /// The full, sorted collection.
    pub items: Arc<Vec<T>>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Write side of a snapshot channel.
pub struct SnapshotPublisher<T> {
    sender: watch::Sender<Snapshot<T>>,
}

impl<T> SnapshotPublisher<T> {
    /// Creates a publisher whose initial snapshot (version 0) is `items`.
    pub fn new(items: Vec<T>) -> Self {
        let (sender, _) = watch::channel(Snapshot {
            version: 0,
            items: Arc::new(items),
        });
        Self { sender }
    }

    /// Replaces the current collection and notifies every subscriber.
    ///
    /// Returns the version assigned to the new snapshot.
    pub fn publish(&self, items: Vec<T>) -> u64 {
        let mut version = 0;
        self.sender.send_modify(|snapshot| {
            snapshot.version += 1;
            snapshot.items = Arc::new(items);
            version = snapshot.version;
        });
        version
    }

    /// Returns the latest snapshot without subscribing.
    pub fn current(&self) -> Snapshot<T> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> ListStream<T> {
        ListStream {
            receiver: self.sender.subscribe(),
            replayed: false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Read side of a snapshot channel.
///
/// Cloning a stream yields an independent subscriber that starts again from
/// the latest snapshot.
pub struct ListStream<T> {
    receiver: watch::Receiver<Snapshot<T>>,
    replayed: bool,
}

impl<T> Clone for ListStream<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
            replayed: false,
        }
    }
}

impl<T> ListStream<T> {
    /// Returns the latest snapshot without waiting.
    pub fn current(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next snapshot.
    ///
    /// The first call returns the latest snapshot immediately. Returns `None`
    /// once the owning repository has been dropped.
    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        if !self.replayed {
            self.replayed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
