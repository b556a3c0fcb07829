use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The reserved key holding the weekly template inside the menu document.
pub const WEEKLY_KEY: &str = "__weekly__";

/// A single day's menu. The content is caller-defined and passes through the
/// store untouched.
pub type DayMenu = serde_json::Value;

/// The weekly default menu, indexed by day of week (0 = Sunday … 6 =
/// Saturday). Read and replaced as a whole, never per-day.
pub type WeeklyTemplate = BTreeMap<u8, DayMenu>;

/// The menu blob document.
///
/// Date-keyed overrides (`YYYY-MM-DD`) live at the top level of the stored
/// JSON; the weekly template sits beside them under the reserved
/// `__weekly__` key. The named field captures the reserved key during
/// deserialization, so it can never leak into the override map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(
        rename = "__weekly__",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly: Option<WeeklyTemplate>,
    #[serde(flatten)]
    pub overrides: BTreeMap<String, DayMenu>,
}

/// Day-of-week index (0 = Sunday) for a `YYYY-MM-DD` date key.
///
/// The key is parsed as a plain calendar date with no timezone attached, so
/// the computed weekday is identical on every host regardless of its
/// configured timezone. Returns `None` for keys that are not valid dates.
pub fn weekday_index(date_key: &str) -> Option<u8> {
    let date = NaiveDate::parse_from_str(date_key, "%Y-%m-%d").ok()?;
    Some(date.weekday().num_days_from_sunday() as u8)
}
