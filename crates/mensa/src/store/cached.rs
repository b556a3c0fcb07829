//! TTL-cached decorator over the blob transport.
//!
//! One instance is bound to one document id and owns its cache entry
//! outright; there is no process-global cache state. Reads within the TTL
//! window are served from memory without a remote call. A successful write
//! refreshes the cache from the value just sent, never by re-reading remote
//! state.
//!
//! No lock spans a whole read-modify-write cycle. Two callers that each
//! read, mutate in memory and write back can interleave at any await point,
//! and the later completed write silently replaces the earlier one
//! (last-writer-wins, no conflict detection). That matches the remote
//! service's own contract, which offers no version token to check against.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use mensa_core::store::{BlobStore, DocumentStore, Result, StoreError};

use super::clock::{Clock, SystemClock};

/// A cached snapshot with its fetch time.
#[derive(Debug, Clone)]
struct CacheEntry<D> {
    value: D,
    fetched_at: Instant,
}

/// TTL-cached typed store for a single document.
///
/// # Type Parameters
///
/// * `D` - The document type stored under this id
/// * `S` - The underlying blob transport
/// * `C` - The time source (defaults to wall-clock time)
pub struct CachedDocumentStore<D, S, C = SystemClock> {
    remote: Arc<S>,
    document_id: String,
    ttl: Duration,
    clock: C,
    cache: RwLock<Option<CacheEntry<D>>>,
}

impl<D, S> CachedDocumentStore<D, S> {
    /// Creates a cached store bound to one document id.
    pub fn new(remote: Arc<S>, document_id: impl Into<String>, ttl: Duration) -> Self {
        Self::with_clock(remote, document_id, ttl, SystemClock)
    }
}

impl<D, S, C> CachedDocumentStore<D, S, C> {
    /// Creates a cached store with an explicit time source.
    pub fn with_clock(
        remote: Arc<S>,
        document_id: impl Into<String>,
        ttl: Duration,
        clock: C,
    ) -> Self {
        Self {
            remote,
            document_id: document_id.into(),
            ttl,
            clock,
            cache: RwLock::new(None),
        }
    }

    /// The document id this store is bound to.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

#[async_trait]
impl<D, S, C> DocumentStore<D> for CachedDocumentStore<D, S, C>
where
    D: Serialize + DeserializeOwned + Clone + Send + Sync,
    S: BlobStore + 'static,
    C: Clock + 'static,
{
    async fn read(&self) -> Result<D> {
        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.as_ref() {
                if self.clock.now().duration_since(entry.fetched_at) < self.ttl {
                    tracing::trace!(document_id = %self.document_id, "Cache hit for document");
                    return Ok(entry.value.clone());
                }
            }
        }

        tracing::trace!(document_id = %self.document_id, "Cache miss for document");
        let raw = self.remote.read(&self.document_id).await?;
        let value: D = serde_json::from_value(raw).map_err(|e| StoreError::Parse(e.to_string()))?;

        let mut cache = self.cache.write().await;
        *cache = Some(CacheEntry {
            value: value.clone(),
            fetched_at: self.clock.now(),
        });
        Ok(value)
    }

    async fn write(&self, document: &D) -> Result<()> {
        let raw =
            serde_json::to_value(document).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.remote.write(&self.document_id, &raw).await?;

        // The write succeeded, so the value just sent is the latest remote
        // state until someone else writes.
        let mut cache = self.cache.write().await;
        *cache = Some(CacheEntry {
            value: document.clone(),
            fetched_at: self.clock.now(),
        });

        tracing::debug!(document_id = %self.document_id, "Document written, cache refreshed");
        Ok(())
    }
}
