//! Customer accounts and cafeteria staff credentials.

mod types;

pub use types::{default_workers, NewUser, User, UserUpdate, Worker};
