//! Cafeteria staff repository.

use std::sync::Arc;

use mensa_core::account::{default_workers, Worker};
use mensa_core::store::{DocumentStore, PrimaryDocument, Result};

/// Read-only repository for staff credentials inside the primary document.
pub struct WorkerRepository<S> {
    store: Arc<S>,
}

impl<S> WorkerRepository<S>
where
    S: DocumentStore<PrimaryDocument>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// First worker whose email matches case-insensitively, if any.
    ///
    /// When the stored worker list is empty the built-in default list
    /// substitutes for it before searching. The trigger is "stored list is
    /// empty", not "lookup missed": a non-empty stored list is searched as
    /// is, even when it does not contain the email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Worker>> {
        let document = self.store.read().await?;
        let workers = if document.workers.is_empty() {
            default_workers()
        } else {
            document.workers
        };
        let needle = email.to_lowercase();
        Ok(workers
            .into_iter()
            .find(|w| w.email.to_lowercase() == needle))
    }
}
