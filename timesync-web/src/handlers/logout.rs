use super::{alert_on_error, csrf::require_csrf_token, ActionOutcome};
use crate::page::Page;
use crate::services::ApiClient;
use timesync_core::AppError;

/// Signs the session out and sends the browser to the login route.
pub async fn logout(api: &ApiClient, page: &dyn Page) -> Result<ActionOutcome, AppError> {
    let token = require_csrf_token(page).map_err(|e| alert_on_error(page, "logout", e))?;

    api.sign_out(&token)
        .await
        .map_err(|e| alert_on_error(page, "logout", e))?;

    let login = api.settings().urls.login.clone();
    tracing::info!(redirect = %login, "Signed out");
    page.redirect(&login);

    Ok(ActionOutcome::Redirected(login))
}
