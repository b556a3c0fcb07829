//! Redemption ticket repository.

use std::sync::Arc;

use chrono::Utc;

use mensa_core::id;
use mensa_core::store::{DocumentStore, PrimaryDocument, Result};
use mensa_core::ticket::{NewTicket, Ticket};

/// Repository for redemption tickets inside the primary document.
pub struct TicketRepository<S> {
    store: Arc<S>,
}

impl<S> TicketRepository<S>
where
    S: DocumentStore<PrimaryDocument>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All tickets.
    pub async fn get_all(&self) -> Result<Vec<Ticket>> {
        Ok(self.store.read().await?.tickets)
    }

    /// Tickets belonging to one user.
    pub async fn get_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>> {
        let tickets = self.get_all().await?;
        Ok(tickets.into_iter().filter(|t| t.user_id == user_id).collect())
    }

    /// Ticket by id, if any.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Ticket>> {
        let tickets = self.get_all().await?;
        Ok(tickets.into_iter().find(|t| t.id == id))
    }

    /// Creates an unused ticket and returns the stored record.
    pub async fn create(&self, new_ticket: NewTicket) -> Result<Ticket> {
        let mut document = self.store.read().await?;
        let ticket = Ticket {
            id: id::generate("ticket"),
            user_id: new_ticket.user_id,
            used: false,
            used_at: None,
            created_at: Utc::now(),
            extra: new_ticket.extra,
        };
        document.tickets.push(ticket.clone());
        self.store.write(&document).await?;
        tracing::debug!(ticket_id = %ticket.id, user_id = %ticket.user_id, "Ticket created");
        Ok(ticket)
    }

    /// Marks a ticket as used and stamps `used_at`.
    ///
    /// Returns `Ok(None)` when the id is unknown. A second call on the same
    /// ticket is not rejected; it re-stamps `used_at`. Callers that need
    /// exactly-once redemption must check `used` before calling.
    pub async fn mark_as_used(&self, id: &str) -> Result<Option<Ticket>> {
        let mut document = self.store.read().await?;
        let Some(ticket) = document.tickets.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        ticket.used = true;
        ticket.used_at = Some(Utc::now());
        let updated = ticket.clone();
        self.store.write(&document).await?;
        tracing::debug!(ticket_id = %updated.id, "Ticket marked as used");
        Ok(Some(updated))
    }
}
