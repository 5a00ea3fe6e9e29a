//! Generic in-memory collection backing every repository.
//!
//! The store owns one sorted `Vec<T>` and publishes it through a
//! [`SnapshotPublisher`]. All mutations go through a single FIFO write lock,
//! held across the simulated latency and the read-modify-sort-publish
//! sequence, so snapshots appear in the order mutations were issued.

use conference_core::config::{ConferenceConfig, LatencySettings, Operation};
use conference_core::entity::{Entity, sort_for_display};
use conference_core::error::{ConferenceError, Result};
use conference_core::observable::{ListStream, Snapshot, SnapshotPublisher};
use tokio::sync::Mutex;

/// Behavior knobs shared by all in-memory repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub latency: LatencySettings,
    /// Run `Entity::validate` before storing a record.
    pub validate: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            latency: LatencySettings::none(),
            validate: true,
        }
    }
}

impl StoreSettings {
    pub fn from_config(config: &ConferenceConfig) -> Self {
        Self {
            latency: config.latency.clone(),
            validate: config.validation.enabled,
        }
    }
}

pub struct InMemoryStore<T: Entity> {
    publisher: SnapshotPublisher<T>,
    write_lock: Mutex<()>,
    settings: StoreSettings,
}

impl<T: Entity> InMemoryStore<T> {
    /// Creates a store holding `items` in display order.
    ///
    /// Seed items are trusted and not validated.
    pub fn new(mut items: Vec<T>, settings: StoreSettings) -> Self {
        sort_for_display(&mut items);
        Self {
            publisher: SnapshotPublisher::new(items),
            write_lock: Mutex::new(()),
            settings,
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn subscribe(&self) -> ListStream<T> {
        self.publisher.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.publisher.current()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.publisher
            .current()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Records matching `predicate`, in display order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.publisher
            .current()
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Sleeps for the configured latency of `operation`.
    pub async fn simulate_latency(&self, operation: Operation) {
        let delay = self.settings.latency.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn check(&self, item: &T) -> Result<()> {
        if self.settings.validate {
            item.validate()?;
        }
        Ok(())
    }

    /// Applies `apply` to a copy of the collection under the write lock.
    ///
    /// On `Ok` the copy is sorted and published; on `Err` nothing changes.
    pub async fn mutate<R, F>(&self, operation: Operation, apply: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let _guard = self.write_lock.lock().await;
        self.simulate_latency(operation).await;

        let mut items = self.publisher.current().items.as_ref().clone();
        let outcome = apply(&mut items)?;
        sort_for_display(&mut items);
        let version = self.publisher.publish(items);

        tracing::debug!(
            entity = T::KIND,
            ?operation,
            version,
            "[InMemoryStore] published snapshot"
        );
        Ok(outcome)
    }

    /// Appends a record and returns its id.
    pub async fn insert(&self, item: T) -> Result<String> {
        self.check(&item)?;
        self.mutate(Operation::Create, move |items| {
            if items.iter().any(|existing| existing.id() == item.id()) {
                return Err(ConferenceError::conflict(T::KIND, item.id()));
            }
            let id = item.id().to_string();
            items.push(item);
            Ok(id)
        })
        .await
    }

    /// Replaces the first record whose id matches.
    pub async fn replace(&self, item: T) -> Result<()> {
        self.check(&item)?;
        self.mutate(Operation::Update, move |items| {
            let slot = items
                .iter_mut()
                .find(|existing| existing.id() == item.id())
                .ok_or_else(|| ConferenceError::not_found(T::KIND, item.id()))?;
            *slot = item;
            Ok(())
        })
        .await
    }

    /// Removes every record whose id matches.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.mutate(Operation::Delete, |items| {
            let before = items.len();
            items.retain(|existing| existing.id() != id);
            if items.len() == before {
                return Err(ConferenceError::not_found(T::KIND, id));
            }
            Ok(())
        })
        .await
    }
}
