use super::{alert_on_error, csrf::require_csrf_token, ActionOutcome};
use crate::page::Page;
use crate::services::ApiClient;
use timesync_core::AppError;

pub const CONFIRM_DELETE_ABSENCE: &str = "Are you sure you want to delete this absence?";

pub async fn delete_absence(
    api: &ApiClient,
    page: &dyn Page,
    absence_id: &str,
) -> Result<ActionOutcome, AppError> {
    if !page.confirm(CONFIRM_DELETE_ABSENCE) {
        return Ok(ActionOutcome::Cancelled);
    }

    let token =
        require_csrf_token(page).map_err(|e| alert_on_error(page, "delete_absence", e))?;

    let reply = api
        .delete_absence(absence_id, &token)
        .await
        .map_err(|e| alert_on_error(page, "delete_absence", e))?;

    tracing::info!(absence_id, "Absence deleted");
    if let Some(message) = reply.message.as_deref() {
        page.alert(message);
    }
    page.reload();

    Ok(ActionOutcome::Reloaded)
}
