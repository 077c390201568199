use serde::de::DeserializeOwned;

use crate::models::{Employee, HistoryRecord, Team};
use crate::render::rows::{self, RowContext};

/// A list endpoint plus how its page fragment looks.
pub trait Resource: Send + Sync {
    type Record: DeserializeOwned + Send;

    fn name(&self) -> &'static str;

    /// Element that receives the rows.
    fn container_id(&self) -> &'static str;

    /// Element that receives the page links.
    fn pagination_id(&self) -> &'static str;

    fn loading_message(&self) -> &'static str;

    fn empty_message(&self) -> &'static str;

    fn error_message(&self) -> &'static str;

    fn render_rows(&self, records: &[Self::Record], ctx: &RowContext)
        -> Result<String, askama::Error>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeesResource;

impl Resource for EmployeesResource {
    type Record = Employee;

    fn name(&self) -> &'static str {
        "employees"
    }

    fn container_id(&self) -> &'static str {
        "employees-list"
    }

    fn pagination_id(&self) -> &'static str {
        "employees-pagination"
    }

    fn loading_message(&self) -> &'static str {
        "Loading employees..."
    }

    fn empty_message(&self) -> &'static str {
        "No employees found"
    }

    fn error_message(&self) -> &'static str {
        "Error loading employees"
    }

    fn render_rows(&self, records: &[Employee], ctx: &RowContext) -> Result<String, askama::Error> {
        rows::employee_rows(records, ctx)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamsResource;

impl Resource for TeamsResource {
    type Record = Team;

    fn name(&self) -> &'static str {
        "teams"
    }

    fn container_id(&self) -> &'static str {
        "teams-list"
    }

    fn pagination_id(&self) -> &'static str {
        "teams-pagination"
    }

    fn loading_message(&self) -> &'static str {
        "Loading teams..."
    }

    fn empty_message(&self) -> &'static str {
        "No teams found"
    }

    fn error_message(&self) -> &'static str {
        "Error loading teams"
    }

    fn render_rows(&self, records: &[Team], _ctx: &RowContext) -> Result<String, askama::Error> {
        rows::team_rows(records)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryResource;

impl Resource for HistoryResource {
    type Record = HistoryRecord;

    fn name(&self) -> &'static str {
        "history"
    }

    fn container_id(&self) -> &'static str {
        "history-list"
    }

    fn pagination_id(&self) -> &'static str {
        "history-pagination"
    }

    fn loading_message(&self) -> &'static str {
        "Loading history..."
    }

    fn empty_message(&self) -> &'static str {
        "No history records found"
    }

    fn error_message(&self) -> &'static str {
        "Error loading history"
    }

    fn render_rows(
        &self,
        records: &[HistoryRecord],
        _ctx: &RowContext,
    ) -> Result<String, askama::Error> {
        rows::history_rows(records)
    }
}
