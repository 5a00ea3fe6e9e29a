//! Identifier generation for new records.

use uuid::Uuid;

/// Generates a new record id of the form `{prefix}_{uuid}`.
///
/// Random v4 UUIDs keep ids unique across rapid creation and clock skew.
pub fn new_entity_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
