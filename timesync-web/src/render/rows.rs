use askama::Template;
use chrono::{DateTime, Local};

use super::badges::{action_badge_class, format_changes};
use crate::models::{Employee, HistoryRecord, Team};

/// Placeholder the backend leaves in the profile-edit route.
pub const SLUG_PLACEHOLDER: &str = "PLACEHOLDER";

pub struct Badge {
    pub tone: &'static str,
    pub text: String,
}

impl Badge {
    fn new(tone: &'static str, text: String) -> Self {
        Self { tone, text }
    }
}

/// Page-dependent inputs for row rendering.
#[derive(Debug, Clone, Default)]
pub struct RowContext {
    /// Profile-edit route containing [`SLUG_PLACEHOLDER`].
    pub update_profile_url: Option<String>,
    /// Path of the current page, sent back as `?next=`.
    pub current_path: String,
}

pub struct EmployeeRow {
    pub name: String,
    pub badges: Vec<Badge>,
    pub edit_url: String,
}

#[derive(Template)]
#[template(path = "rows/employees.html")]
struct EmployeesTemplate<'a> {
    rows: &'a [EmployeeRow],
}

pub struct TeamRow {
    pub name: String,
    pub badges: Vec<Badge>,
}

#[derive(Template)]
#[template(path = "rows/teams.html")]
struct TeamsTemplate<'a> {
    rows: &'a [TeamRow],
}

pub struct HistoryRow {
    pub timestamp: String,
    pub action: String,
    pub tone: &'static str,
    pub changed_by: String,
    pub summary: String,
    pub changes_html: String,
}

#[derive(Template)]
#[template(path = "rows/history.html")]
struct HistoryTemplate<'a> {
    rows: &'a [HistoryRow],
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl EmployeeRow {
    pub fn from_record(employee: &Employee, ctx: &RowContext) -> Self {
        let mut badges = Vec::new();
        if let Some(role) = present(employee.role.as_deref()) {
            badges.push(Badge::new("secondary", format!("Role: {}", role)));
        }
        if let Some(id) = present(employee.employee_id.as_deref()) {
            badges.push(Badge::new("info", format!("Employee ID: {}", id)));
        }

        let edit_url = match (ctx.update_profile_url.as_deref(), present(employee.user_slug.as_deref())) {
            (Some(template), Some(slug)) => format!(
                "{}?next={}",
                template.replace(SLUG_PLACEHOLDER, slug),
                urlencoding::encode(&ctx.current_path)
            ),
            _ => String::new(),
        };

        Self {
            name: employee.full_name(),
            badges,
            edit_url,
        }
    }
}

impl TeamRow {
    pub fn from_record(team: &Team) -> Self {
        let approver = present(team.holiday_approver_name.as_deref()).unwrap_or("-");
        let department = present(team.department_name.as_deref()).unwrap_or("-");

        Self {
            name: team.name.clone(),
            badges: vec![
                Badge::new("secondary", format!("Holiday Approver: {}", approver)),
                Badge::new("info", format!("Department: {}", department)),
                Badge::new("primary", format!("Members: {}", team.employee_count.unwrap_or(0))),
            ],
        }
    }
}

impl HistoryRow {
    pub fn from_record(record: &HistoryRecord) -> Result<Self, askama::Error> {
        Ok(Self {
            timestamp: local_timestamp(&record.timestamp),
            action: record.action.clone(),
            tone: action_badge_class(&record.action),
            changed_by: present(record.changed_by.as_deref())
                .unwrap_or("System")
                .to_string(),
            summary: record.change_summary.clone().unwrap_or_default(),
            changes_html: match &record.changes {
                Some(changes) if !changes.is_empty() => format_changes(Some(changes))?,
                _ => String::new(),
            },
        })
    }
}

/// RFC 3339 timestamps are shown in local time; anything else verbatim.
pub fn local_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local).format("%d/%m/%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn employee_rows(records: &[Employee], ctx: &RowContext) -> Result<String, askama::Error> {
    let rows: Vec<EmployeeRow> = records
        .iter()
        .map(|employee| EmployeeRow::from_record(employee, ctx))
        .collect();
    EmployeesTemplate { rows: &rows }.render()
}

pub fn team_rows(records: &[Team]) -> Result<String, askama::Error> {
    let rows: Vec<TeamRow> = records.iter().map(TeamRow::from_record).collect();
    TeamsTemplate { rows: &rows }.render()
}

pub fn history_rows(records: &[HistoryRecord]) -> Result<String, askama::Error> {
    let rows = records
        .iter()
        .map(HistoryRow::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    HistoryTemplate { rows: &rows }.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(role: Option<&str>, slug: Option<&str>) -> Employee {
        Employee {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: role.map(str::to_string),
            employee_id: Some("E-7".to_string()),
            user_slug: slug.map(str::to_string),
        }
    }

    #[test]
    fn test_employee_row_badges_and_edit_link() {
        let ctx = RowContext {
            update_profile_url: Some("/users/PLACEHOLDER/profile/edit/".to_string()),
            current_path: "/companies/acme/teams/5/".to_string(),
        };
        let row = EmployeeRow::from_record(&employee(Some("Manager"), Some("jane-doe")), &ctx);

        assert_eq!(row.name, "Jane Doe");
        assert_eq!(row.badges.len(), 2);
        assert_eq!(row.badges[0].text, "Role: Manager");
        assert_eq!(
            row.edit_url,
            "/users/jane-doe/profile/edit/?next=%2Fcompanies%2Facme%2Fteams%2F5%2F"
        );
    }

    #[test]
    fn test_employee_row_skips_blank_role_and_missing_slug() {
        let row = EmployeeRow::from_record(&employee(Some("  "), None), &RowContext::default());
        assert_eq!(row.badges.len(), 1);
        assert!(row.edit_url.is_empty());
    }

    #[test]
    fn test_team_row_placeholders() {
        let row = TeamRow::from_record(&Team {
            name: "Night shift".to_string(),
            holiday_approver_name: None,
            department_name: Some("Ops".to_string()),
            employee_count: None,
        });

        let texts: Vec<&str> = row.badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Holiday Approver: -", "Department: Ops", "Members: 0"]
        );
    }

    #[test]
    fn test_history_row_defaults() {
        let row = HistoryRow::from_record(&HistoryRecord {
            timestamp: "not a date".to_string(),
            action: "delete".to_string(),
            changed_by: None,
            change_summary: Some("Removed team".to_string()),
            changes: None,
        })
        .unwrap();

        assert_eq!(row.timestamp, "not a date");
        assert_eq!(row.tone, "danger");
        assert_eq!(row.changed_by, "System");
        assert!(row.changes_html.is_empty());
    }

    #[test]
    fn test_rows_escape_record_text() {
        let html = team_rows(&[Team {
            name: "<script>alert(1)</script>".to_string(),
            holiday_approver_name: None,
            department_name: None,
            employee_count: Some(3),
        }])
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("Members: 3"));
    }
}
