//! Store seams and the primary blob document.
//!
//! The remote service exposes exactly two primitives per document id: fetch
//! the latest full snapshot and replace the document wholesale. There are no
//! partial updates, no version tokens and no conflict detection. The traits
//! here model that surface; the cached implementation lives in the `mensa`
//! crate.

mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::{BlobStore, DocumentStore};
pub use types::PrimaryDocument;
