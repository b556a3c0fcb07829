use serde::{Deserialize, Serialize};

use crate::account::{User, Worker};
use crate::ticket::Ticket;

/// The primary blob document: accounts, staff credentials and tickets.
///
/// All three collections live in one remote document and are read and
/// written together. Lists absent from the stored JSON deserialize as empty,
/// matching documents created before a collection existed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryDocument {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}
