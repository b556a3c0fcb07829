//! Calendar-keyed menu data.

mod types;

pub use types::{weekday_index, DayMenu, MenuDocument, WeeklyTemplate, WEEKLY_KEY};
