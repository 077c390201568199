//! HTTP client for the portal's REST backend.
//!
//! Wraps `reqwest` with the configured base URL, a session cookie store and
//! request-id propagation. Mutating calls carry the CSRF token header.

use crate::config::ApiSettings;
use crate::models::{ActionMessage, CalendarFeed, Paginated, StatusUpdate};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use timesync_core::csrf::{CsrfToken, CSRF_HEADER};
use timesync_core::error::ErrorBody;
use timesync_core::observability::TracedClientExt;
use timesync_core::AppError;

/// Message used when a list endpoint answers with a non-success status.
pub const LIST_FAILURE_MESSAGE: &str = "Network response was not ok";

pub struct ApiClient {
    client: Client,
    settings: ApiSettings,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Resolves an endpoint path against the base URL. Absolute URLs pass
    /// through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `GET <endpoint>?page=<page>`.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        page: u32,
    ) -> Result<Paginated<T>, AppError> {
        let url = self.url(endpoint);

        let response = self
            .client
            .traced_get(&url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Failed to send GET request");
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "List request rejected");
            return Err(AppError::Http {
                status,
                message: LIST_FAILURE_MESSAGE.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `DELETE /api/absences/{id}/delete/`.
    pub async fn delete_absence(
        &self,
        absence_id: &str,
        token: &CsrfToken,
    ) -> Result<ActionMessage, AppError> {
        let url = self.url(&format!(
            "{}{}/delete/",
            self.settings.urls.absences, absence_id
        ));

        let response = self
            .client
            .traced_delete(&url)
            .header(CSRF_HEADER, token.header_value())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        action_message(response, |status| match status {
            StatusCode::FORBIDDEN => "You do not have permission to delete this absence.",
            StatusCode::NOT_FOUND => "Absence not found.",
            _ => "Failed to delete absence.",
        })
        .await
    }

    /// `PATCH /api/holidays/{id}/update-status/`.
    pub async fn update_holiday_status(
        &self,
        holiday_id: &str,
        update: &StatusUpdate,
        token: &CsrfToken,
    ) -> Result<ActionMessage, AppError> {
        let url = self.url(&format!(
            "{}{}/update-status/",
            self.settings.urls.holidays, holiday_id
        ));

        let response = self
            .client
            .traced_patch(&url)
            .header(CSRF_HEADER, token.header_value())
            .json(update)
            .send()
            .await?;

        action_message(response, |_| {
            "An error occurred while processing your request."
        })
        .await
    }

    /// `POST <sign_out>`. Only the status matters; the body is discarded.
    pub async fn sign_out(&self, token: &CsrfToken) -> Result<(), AppError> {
        let url = self.url(&self.settings.urls.sign_out);

        let response = self
            .client
            .traced_post(&url)
            .header(CSRF_HEADER, token.header_value())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: ErrorBody::parse(&body)
                .message()
                .unwrap_or_else(|| "Failed to logout. Please try again.".to_string()),
        })
    }

    /// `GET /api/events/?start=&end=`.
    pub async fn calendar_events(&self, start: &str, end: &str) -> Result<CalendarFeed, AppError> {
        let url = self.url(&self.settings.urls.events);

        let response = self
            .client
            .traced_get(&url)
            .query(&[("start", start), ("end", end)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Http {
                status,
                message: ErrorBody::parse(&body)
                    .message()
                    .unwrap_or_else(|| status.to_string()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Decodes `{message}` on success, otherwise turns `{error}` into an
/// `AppError::Http`, using `fallback` when the body has no message.
async fn action_message<F>(response: Response, fallback: F) -> Result<ActionMessage, AppError>
where
    F: Fn(StatusCode) -> &'static str,
{
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }

    let message = ErrorBody::parse(&body)
        .message()
        .unwrap_or_else(|| fallback(status).to_string());

    tracing::warn!(status = %status, message = %message, "Action rejected by backend");

    Err(AppError::Http { status, message })
}
