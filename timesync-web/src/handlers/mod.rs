//! Click handlers for the mutating actions and the calendar.
//!
//! Every handler reports failures to the user through [`Page::alert`] and
//! also returns them, so hosts and tests can observe what happened.

pub mod absence;
pub mod calendar;
pub mod csrf;
pub mod holiday;
pub mod logout;

pub use absence::delete_absence;
pub use calendar::{event_details, load_events, show_event_details};
pub use csrf::{csrf_token, require_csrf_token, MISSING_CSRF_MESSAGE};
pub use holiday::update_holiday_status;
pub use logout::logout;

use crate::page::Page;
use timesync_core::AppError;

/// What a handler did after the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation.
    Cancelled,
    /// Nothing to submit for this action.
    Ignored,
    Reloaded,
    Redirected(String),
}

/// Logs `err`, shows its user-facing text and hands it back.
pub(crate) fn alert_on_error(page: &dyn Page, action: &str, err: AppError) -> AppError {
    match &err {
        AppError::Transport(_) | AppError::Decode(_) => {
            tracing::error!(action, error = %err, "Action failed")
        }
        _ => tracing::warn!(action, error = %err, "Action rejected"),
    }
    page.alert(&err.user_message());
    err
}
