use async_trait::async_trait;
use serde_json::Value;

use super::Result;

/// Raw transport to the remote blob-hosting service.
///
/// One JSON value per document id, transferred in full on every call. The
/// trait deliberately mirrors the remote surface: no partial reads, no
/// conditional writes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetches the latest full snapshot of a document.
    async fn read(&self, document_id: &str) -> Result<Value>;

    /// Replaces a document wholesale.
    async fn write(&self, document_id: &str, document: &Value) -> Result<()>;
}

/// Typed access to one document.
///
/// Implementations are bound to a single document id and handle the
/// JSON-to-domain conversion. Callers run read-modify-write cycles through
/// this trait: read the whole document, mutate it in memory, write the whole
/// document back.
#[async_trait]
pub trait DocumentStore<D>: Send + Sync {
    /// Reads the current document.
    async fn read(&self) -> Result<D>;

    /// Replaces the document.
    async fn write(&self, document: &D) -> Result<()>;
}
