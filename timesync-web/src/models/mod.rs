pub mod calendar;
pub mod employee;
pub mod history;
pub mod holiday;
pub mod pagination;
pub mod team;

pub use calendar::{CalendarEvent, CalendarFeed};
pub use employee::Employee;
pub use history::{FieldChange, HistoryRecord};
pub use holiday::{ActionMessage, HolidayStatus, StatusUpdate};
pub use pagination::Paginated;
pub use team::Team;

use serde::Deserialize;

/// Accepts a JSON string or number; blanks and anything else map to `None`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
