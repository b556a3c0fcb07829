//! mensa - Cached blob-document store for the cafeteria app.
//!
//! The remote blob-hosting service is the single source of truth; this crate
//! wraps it with a per-document TTL cache, carves entity repositories out of
//! the primary document, and resolves calendar-keyed menus with the
//! override-then-weekly-template fallback.

pub mod auth;
pub mod cli;
pub mod config;
pub mod menu;
pub mod remote;
pub mod repository;
pub mod store;

pub use config::Config;
pub use menu::MenuService;
pub use remote::JsonBinClient;
pub use repository::Database;
pub use store::CachedDocumentStore;
