//! Registration and login flows over the repositories.
//!
//! Credentials are opaque strings compared verbatim; password hashing and
//! token issuance are out of scope for this system. What matters here is
//! that returned profiles never carry the stored password.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use mensa_core::account::{NewUser, User, Worker};
use mensa_core::store::{DocumentStore, PrimaryDocument, Result};

use crate::repository::{UserRepository, WorkerRepository};

/// A user account with the password stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_student: bool,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            is_student: user.is_student,
            balance: user.balance,
            created_at: user.created_at,
        }
    }
}

/// A staff member with the password stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerProfile {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<Worker> for WorkerProfile {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            email: worker.email,
            name: worker.name,
        }
    }
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Registered(UserProfile),
    EmailTaken,
}

/// Outcome of a login attempt. A missing account and a wrong password are
/// deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(UserProfile),
    InvalidCredentials,
}

/// Outcome of a staff login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerLoginOutcome {
    Success(WorkerProfile),
    InvalidCredentials,
}

/// Registration and login over the shared primary store.
pub struct AuthService<S> {
    users: UserRepository<S>,
    workers: WorkerRepository<S>,
    student_email_domain: String,
}

impl<S> AuthService<S>
where
    S: DocumentStore<PrimaryDocument>,
{
    pub fn new(store: Arc<S>, student_email_domain: impl Into<String>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            workers: WorkerRepository::new(store),
            student_email_domain: student_email_domain.into(),
        }
    }

    /// Registers a new account.
    ///
    /// The duplicate-email check is a lookup, not a stored constraint: two
    /// concurrent registrations of the same email can still both land.
    /// Student status is derived from the configured email domain suffix.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterOutcome> {
        if self.users.find_by_email(email).await?.is_some() {
            return Ok(RegisterOutcome::EmailTaken);
        }
        let is_student = email
            .to_lowercase()
            .ends_with(&self.student_email_domain.to_lowercase());
        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
                is_student,
                balance: 0.0,
            })
            .await?;
        tracing::info!(user_id = %user.id, is_student, "Account registered");
        Ok(RegisterOutcome::Registered(user.into()))
    }

    /// Customer login by email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        match self.users.find_by_email(email).await? {
            Some(user) if user.password == password => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(LoginOutcome::Success(user.into()))
            }
            _ => Ok(LoginOutcome::InvalidCredentials),
        }
    }

    /// Staff login by email and password.
    pub async fn worker_login(&self, email: &str, password: &str) -> Result<WorkerLoginOutcome> {
        match self.workers.find_by_email(email).await? {
            Some(worker) if worker.password == password => {
                tracing::info!(worker_id = %worker.id, "Worker logged in");
                Ok(WorkerLoginOutcome::Success(worker.into()))
            }
            _ => Ok(WorkerLoginOutcome::InvalidCredentials),
        }
    }

    /// Fresh profile for an already-authenticated email, if the account
    /// still exists.
    pub async fn refresh_profile(&self, email: &str) -> Result<Option<UserProfile>> {
        Ok(self.users.find_by_email(email).await?.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing::InMemoryPrimaryStore;

    const STUDENT_DOMAIN: &str = "@stu.kau.edu.sa";

    fn service() -> AuthService<InMemoryPrimaryStore> {
        AuthService::new(Arc::new(InMemoryPrimaryStore::empty()), STUDENT_DOMAIN)
    }

    #[tokio::test]
    async fn test_register_detects_student_email() {
        let auth = service();

        let outcome = auth
            .register("amal@STU.KAU.EDU.SA", "pw", "Amal")
            .await
            .unwrap();

        let RegisterOutcome::Registered(profile) = outcome else {
            panic!("expected registration to succeed");
        };
        assert!(profile.is_student);
        assert_eq!(profile.balance, 0.0);
    }

    #[tokio::test]
    async fn test_register_non_student_email() {
        let auth = service();

        let outcome = auth.register("staff@kau.edu.sa", "pw", "Sara").await.unwrap();

        let RegisterOutcome::Registered(profile) = outcome else {
            panic!("expected registration to succeed");
        };
        assert!(!profile.is_student);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let auth = service();
        auth.register("a@b.com", "pw", "Amal").await.unwrap();

        // Case-insensitive duplicate detection.
        let outcome = auth.register("A@B.COM", "other", "Impostor").await.unwrap();
        assert_eq!(outcome, RegisterOutcome::EmailTaken);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let auth = service();
        auth.register("a@b.com", "pw", "Amal").await.unwrap();

        let outcome = auth.login("a@b.com", "wrong").await.unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_with_unknown_email() {
        let auth = service();

        let outcome = auth.login("nobody@b.com", "pw").await.unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_success_strips_password() {
        let auth = service();
        auth.register("a@b.com", "pw", "Amal").await.unwrap();

        let outcome = auth.login("a@b.com", "pw").await.unwrap();
        let LoginOutcome::Success(profile) = outcome else {
            panic!("expected login to succeed");
        };
        assert_eq!(profile.email, "a@b.com");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
    }

    #[tokio::test]
    async fn test_worker_login_against_default_list() {
        let auth = service();

        let outcome = auth
            .worker_login("worker@kau.edu.sa", "worker123")
            .await
            .unwrap();
        let WorkerLoginOutcome::Success(profile) = outcome else {
            panic!("expected worker login to succeed");
        };
        assert_eq!(profile.id, "worker1");

        let rejected = auth
            .worker_login("worker@kau.edu.sa", "wrong")
            .await
            .unwrap();
        assert_eq!(rejected, WorkerLoginOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_refresh_profile() {
        let auth = service();
        auth.register("a@b.com", "pw", "Amal").await.unwrap();

        let profile = auth.refresh_profile("a@b.com").await.unwrap();
        assert_eq!(profile.map(|p| p.name), Some("Amal".to_string()));

        let missing = auth.refresh_profile("gone@b.com").await.unwrap();
        assert!(missing.is_none());
    }
}
