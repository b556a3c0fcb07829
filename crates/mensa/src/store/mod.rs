//! Cached document store.
//!
//! Wraps the raw blob transport with a per-document, time-bounded read cache
//! so repository calls do not hit the remote service on every access.

mod cached;
mod clock;

pub use cached::CachedDocumentStore;
pub use clock::{Clock, SystemClock};
