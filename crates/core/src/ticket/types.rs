use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A meal redemption ticket.
///
/// `user_id` references a user but the reference is not enforced. Tickets
/// are created once and never deleted; `used` transitions false to true via
/// mark-as-used. Caller-supplied fields beyond the known set (meal name,
/// price, pickup slot, …) are carried opaquely in `extra` and round-trip
/// through the stored document untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a new ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub user_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
