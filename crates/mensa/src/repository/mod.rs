//! Entity repositories over the primary document.
//!
//! Users, workers and tickets are logical collections carved out of one
//! shared blob document. Every accessor follows the same cycle: read the
//! whole document through the cached store, scan or mutate the relevant list
//! in memory, write the whole document back. Absence ("not found") is a
//! normal successful result, never an error; transport and decode failures
//! propagate to the caller.

mod tickets;
mod users;
mod workers;

pub use tickets::TicketRepository;
pub use users::UserRepository;
pub use workers::WorkerRepository;

use std::sync::Arc;

use mensa_core::store::{DocumentStore, PrimaryDocument};

/// Bundle of the three repositories sharing one cached store.
pub struct Database<S> {
    pub users: UserRepository<S>,
    pub workers: WorkerRepository<S>,
    pub tickets: TicketRepository<S>,
}

impl<S> Database<S>
where
    S: DocumentStore<PrimaryDocument>,
{
    /// Creates the repository bundle over one shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            workers: WorkerRepository::new(store.clone()),
            tickets: TicketRepository::new(store),
        }
    }
}


#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use mensa_core::store::{DocumentStore, PrimaryDocument, Result};

    /// In-memory document store for repository tests.
    pub struct InMemoryPrimaryStore {
        document: RwLock<PrimaryDocument>,
    }

    impl InMemoryPrimaryStore {
        pub fn new(document: PrimaryDocument) -> Self {
            Self {
                document: RwLock::new(document),
            }
        }

        pub fn empty() -> Self {
            Self::new(PrimaryDocument::default())
        }
    }

    #[async_trait]
    impl DocumentStore<PrimaryDocument> for InMemoryPrimaryStore {
        async fn read(&self) -> Result<PrimaryDocument> {
            Ok(self.document.read().await.clone())
        }

        async fn write(&self, document: &PrimaryDocument) -> Result<()> {
            *self.document.write().await = document.clone();
            Ok(())
        }
    }
}
