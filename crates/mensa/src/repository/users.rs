//! User account repository.

use std::sync::Arc;

use chrono::Utc;

use mensa_core::account::{NewUser, User, UserUpdate};
use mensa_core::id;
use mensa_core::store::{DocumentStore, PrimaryDocument, Result};

/// Repository for customer accounts inside the primary document.
pub struct UserRepository<S> {
    store: Arc<S>,
}

impl<S> UserRepository<S>
where
    S: DocumentStore<PrimaryDocument>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All user accounts.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.store.read().await?.users)
    }

    /// First account whose email matches case-insensitively, if any.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let needle = email.to_lowercase();
        let users = self.get_all().await?;
        Ok(users.into_iter().find(|u| u.email.to_lowercase() == needle))
    }

    /// Creates an account and returns the stored record.
    ///
    /// No uniqueness check against existing emails happens here; callers are
    /// expected to have looked the email up first.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut document = self.store.read().await?;
        let user = User {
            id: id::generate("user"),
            email: new_user.email,
            password: new_user.password,
            name: new_user.name,
            is_student: new_user.is_student,
            balance: new_user.balance,
            created_at: Utc::now(),
        };
        document.users.push(user.clone());
        self.store.write(&document).await?;
        tracing::debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Merges partial fields over an existing account.
    ///
    /// Returns `Ok(None)` when the id is unknown; nothing is written then.
    pub async fn update(&self, id: &str, update: UserUpdate) -> Result<Option<User>> {
        let mut document = self.store.read().await?;
        let Some(user) = document.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        update.apply(user);
        let updated = user.clone();
        self.store.write(&document).await?;
        tracing::debug!(user_id = %updated.id, "User updated");
        Ok(Some(updated))
    }
}
