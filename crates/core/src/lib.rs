//! mensa_core - Domain types and store seams for the mensa project.
//!
//! Everything the cafeteria app persists lives in two JSON blob documents on
//! a remote hosting service: a primary document with accounts, staff
//! credentials and redemption tickets, and a menu document with date-keyed
//! overrides plus a weekly template. This crate defines those documents, the
//! records inside them, and the traits the concrete store implementations
//! plug into.

pub mod account;
pub mod id;
pub mod menu;
pub mod store;
pub mod ticket;
