//! Shared behavior of the records owned by repositories.

use std::cmp::Ordering;

use crate::error::Result;

/// A value record that a repository owns and publishes as a sorted list.
///
/// Every implementor is an immutable value: repositories replace whole
/// records on update and never hand out references into their storage.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages ("Session", ...).
    const KIND: &'static str;

    /// The unique identifier of this record within its collection.
    fn id(&self) -> &str;

    /// Order in which records appear in published snapshots.
    ///
    /// Sorting is stable, so records that compare equal keep insertion order.
    fn display_order(&self, other: &Self) -> Ordering;

    /// Checks the record's own invariants.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Sorts a list of records into display order.
pub fn sort_for_display<T: Entity>(items: &mut [T]) {
    items.sort_by(|a, b| a.display_order(b));
}
