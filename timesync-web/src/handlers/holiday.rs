use super::{alert_on_error, csrf::require_csrf_token, ActionOutcome};
use crate::models::{HolidayStatus, StatusUpdate};
use crate::page::Page;
use crate::services::ApiClient;
use timesync_core::AppError;

pub const REVIEW_REASON_FIELD: &str = "id_review_reason";

pub const INVALID_ACTION_MESSAGE: &str = "Invalid action requested.";

pub const REASON_REQUIRED_MESSAGE: &str =
    "A review reason is required when denying a holiday request.";

/// Click on a `.holiday-status-button` carrying `data-holiday-id` and
/// `data-action`.
///
/// Order of checks: action, confirmation, denial reason, CSRF token. A
/// request is only sent once all of them pass.
pub async fn update_holiday_status(
    api: &ApiClient,
    page: &dyn Page,
    holiday_id: &str,
    action: &str,
) -> Result<ActionOutcome, AppError> {
    let status = action.parse::<HolidayStatus>().map_err(|reason| {
        tracing::error!(%reason, "Rejected holiday action");
        page.alert(INVALID_ACTION_MESSAGE);
        AppError::Validation(INVALID_ACTION_MESSAGE.to_string())
    })?;

    let Some(question) = status.confirm_message() else {
        return Ok(ActionOutcome::Ignored);
    };
    if !page.confirm(question) {
        return Ok(ActionOutcome::Cancelled);
    }

    let reason = page
        .field_value(REVIEW_REASON_FIELD)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    if status.requires_reason() && reason.is_none() {
        page.alert(REASON_REQUIRED_MESSAGE);
        page.focus(REVIEW_REASON_FIELD);
        return Err(AppError::Validation(REASON_REQUIRED_MESSAGE.to_string()));
    }

    let token =
        require_csrf_token(page).map_err(|e| alert_on_error(page, "update_holiday_status", e))?;

    let update = StatusUpdate {
        status,
        review_reason: reason,
    };

    let reply = api
        .update_holiday_status(holiday_id, &update, &token)
        .await
        .map_err(|e| alert_on_error(page, "update_holiday_status", e))?;

    tracing::info!(holiday_id, status = %status, "Holiday status updated");
    if let Some(message) = reply.message.as_deref() {
        page.alert(message);
    }
    page.reload();

    Ok(ActionOutcome::Reloaded)
}
