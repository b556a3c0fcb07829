//! Meal redemption tickets.

mod types;

pub use types::{NewTicket, Ticket};
