//! Scroll to the element named by `?scroll=<id>`, below the sticky header.

use std::time::Duration;

use crate::page::Page;

pub const SCROLL_PARAM: &str = "scroll";

/// Height of the sticky header.
pub const HEADER_OFFSET: f64 = 100.0;

/// Wait before scrolling so the page has finished layout.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Value of the `scroll` query parameter, if present and non-empty.
pub fn scroll_target(query: &str) -> Option<String> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.trim_start_matches('?')).ok()?;

    pairs
        .into_iter()
        .find(|(key, _)| key == SCROLL_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

pub fn scroll_offset(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Returns the position scrolled to, or `None` when there was no target or
/// the element does not exist.
pub async fn scroll_from_location(page: &dyn Page) -> Option<f64> {
    let target = scroll_target(&page.location_query())?;

    tokio::time::sleep(SCROLL_DELAY).await;

    let Some(top) = page.element_top(&target) else {
        tracing::debug!(element = %target, "Scroll target not found");
        return None;
    };

    let offset = scroll_offset(top, page.scroll_y());
    page.scroll_to(offset);
    Some(offset)
}
