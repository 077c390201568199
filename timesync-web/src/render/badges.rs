use askama::Template;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::FieldChange;

/// Bootstrap colour for a history action.
pub fn action_badge_class(action: &str) -> &'static str {
    match action {
        "create" => "success",
        "update" => "primary",
        "delete" => "danger",
        "register" => "info",
        _ => "secondary",
    }
}

struct ChangeLine {
    field: String,
    old: String,
    new: String,
}

#[derive(Template)]
#[template(path = "rows/changes.html")]
struct ChangesTemplate {
    changes: Vec<ChangeLine>,
}

pub const NO_CHANGES: &str = "No changes recorded";

/// Per-field change list: `FIELD NAME: old → new`.
pub fn format_changes(changes: Option<&BTreeMap<String, FieldChange>>) -> Result<String, askama::Error> {
    let Some(changes) = changes.filter(|c| !c.is_empty()) else {
        return Ok(NO_CHANGES.to_string());
    };

    ChangesTemplate {
        changes: changes
            .iter()
            .map(|(field, change)| ChangeLine {
                field: field.replace('_', " ").to_uppercase(),
                old: display_value(change.old.as_ref()),
                new: display_value(change.new.as_ref()),
            })
            .collect(),
    }
    .render()
}

/// Falsy values (null, empty string, false, zero) read as `None`.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(false)) => "None".to_string(),
        Some(Value::String(s)) if s.is_empty() => "None".to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
