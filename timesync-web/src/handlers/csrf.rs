use crate::page::Page;
use timesync_core::csrf::{CsrfToken, CSRF_INPUT_NAME, CSRF_META_NAME};
use timesync_core::AppError;

pub const MISSING_CSRF_MESSAGE: &str =
    "Security token not found. Please refresh the page and try again.";

/// The page's CSRF token: `<meta name="csrf-token">` first, then the hidden
/// `csrfmiddlewaretoken` input.
pub fn csrf_token(page: &dyn Page) -> Option<CsrfToken> {
    CsrfToken::first_of([
        page.meta_content(CSRF_META_NAME),
        page.hidden_input(CSRF_INPUT_NAME),
    ])
}

pub fn require_csrf_token(page: &dyn Page) -> Result<CsrfToken, AppError> {
    csrf_token(page).ok_or_else(|| {
        tracing::error!("CSRF token not found");
        AppError::MissingPrerequisite(MISSING_CSRF_MESSAGE.to_string())
    })
}
