//! HTML fragments injected into the page.
//!
//! Everything goes through askama templates, so record text is escaped.

pub mod badges;
pub mod pagination;
pub mod rows;

pub use badges::{action_badge_class, format_changes};
pub use pagination::{parse_page, render_pagination, PageControl, Pagination};

use askama::Template;
use timesync_core::AppError;

#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate<'a> {
    class: &'a str,
    text: &'a str,
}

/// One-line status block: `loading`, `no-data` or `error`. A failed render
/// is logged and yields an empty block.
pub fn status_html(class: &str, text: &str) -> String {
    StatusTemplate { class, text }
        .render()
        .map_err(render_error)
        .unwrap_or_default()
}

pub(crate) fn render_error(err: askama::Error) -> AppError {
    tracing::error!(error = %err, "Template rendering failed");
    AppError::Render(err.to_string())
}
