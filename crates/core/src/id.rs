//! Prefixed unique-id generation.
//!
//! Record ids carry a short prefix naming the collection they belong to
//! (`user_…`, `ticket_…`) so they stay greppable in raw document dumps. The
//! unique part is a v4 UUID rather than a wall-clock timestamp, so ids
//! created in the same millisecond cannot collide.

use uuid::Uuid;

/// Generates a new id of the form `{prefix}_{uuid}`.
pub fn generate(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
