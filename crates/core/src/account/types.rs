use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered customer account.
///
/// Stored inside the primary document with camelCase field names. The
/// password is an opaque string compared verbatim; accounts are never
/// hard-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_student: bool,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_student: bool,
    pub balance: f64,
}

/// Partial update for an existing user. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub is_student: Option<bool>,
    pub balance: Option<f64>,
}

impl UserUpdate {
    /// Merges the set fields over an existing record.
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(is_student) = self.is_student {
            user.is_student = is_student;
        }
        if let Some(balance) = self.balance {
            user.balance = balance;
        }
    }
}

/// A cafeteria staff member.
///
/// Workers are read-only in this system: there is no create path, the list
/// is edited out of band directly in the stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// The built-in worker list used whenever the stored collection is empty.
///
/// The substitution happens at read time, every time the stored list is
/// empty. It is not a one-time seeding and nothing is written back.
pub fn default_workers() -> Vec<Worker> {
    vec![Worker {
        id: "worker1".to_string(),
        email: "worker@kau.edu.sa".to_string(),
        password: "worker123".to_string(),
        name: "Cafeteria Worker".to_string(),
    }]
}
