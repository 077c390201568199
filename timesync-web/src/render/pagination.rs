use askama::Template;
use timesync_core::AppError;

use crate::models::Paginated;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

impl PageControl {
    pub fn label(&self) -> &'static str {
        match self {
            PageControl::First => "&laquo; First",
            PageControl::Previous => "Previous",
            PageControl::Next => "Next",
            PageControl::Last => "Last &raquo;",
        }
    }
}

/// Page position derived from a paginated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

struct LinkView {
    label: &'static str,
    page: u32,
    enabled: bool,
}

#[derive(Template)]
#[template(path = "pagination.html")]
struct PaginationTemplate {
    before: Vec<LinkView>,
    after: Vec<LinkView>,
    current_page: u32,
    total_pages: u32,
}

impl Pagination {
    /// `None` when everything fits on one page, or when `count`/`page_size`
    /// is missing.
    pub fn from_response<T>(data: &Paginated<T>) -> Option<Self> {
        let count = data.count?;
        let page_size = u64::from(data.page_size.filter(|size| *size > 0)?);

        if count <= data.results.len() as u64 {
            return None;
        }

        let total_pages = u32::try_from(count.div_ceil(page_size)).unwrap_or(u32::MAX);

        Some(Self {
            current_page: data.current_page.unwrap_or(1),
            total_pages,
        })
    }

    /// Target page of a control, or `None` when the control is disabled.
    pub fn target(&self, control: PageControl) -> Option<u32> {
        let on_first = self.current_page <= 1;
        let on_last = self.current_page >= self.total_pages;

        match control {
            PageControl::First => (!on_first).then_some(1),
            PageControl::Previous => (!on_first).then(|| self.current_page - 1),
            PageControl::Next => (!on_last).then(|| self.current_page + 1),
            PageControl::Last => (!on_last).then_some(self.total_pages),
        }
    }

    pub fn is_enabled(&self, control: PageControl) -> bool {
        self.target(control).is_some()
    }

    /// Hands the control's target page to `load`. Disabled controls do
    /// nothing. Returns whether `load` was invoked.
    pub fn click<F: FnOnce(u32)>(&self, control: PageControl, load: F) -> bool {
        match self.target(control) {
            Some(page) => {
                load(page);
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        let view = |control: PageControl| LinkView {
            label: control.label(),
            page: self.target(control).unwrap_or(0),
            enabled: self.is_enabled(control),
        };

        PaginationTemplate {
            before: vec![view(PageControl::First), view(PageControl::Previous)],
            after: vec![view(PageControl::Next), view(PageControl::Last)],
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
        .render()
    }
}

/// Reads a link's `data-page` the way `parseInt` does: leading digits only,
/// anything else is not a page.
pub fn parse_page(data_page: &str) -> Option<u32> {
    let trimmed = data_page.trim_start();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Writes page links for `data` into `element_id`, or clears it when no
/// pagination is needed. Returns the pagination that was rendered.
pub fn render_pagination<T>(
    page: &dyn Page,
    element_id: &str,
    data: &Paginated<T>,
) -> Result<Option<Pagination>, AppError> {
    let Some(pagination) = Pagination::from_response(data) else {
        page.set_inner_html(element_id, "");
        return Ok(None);
    };

    let html = pagination.to_html().map_err(super::render_error)?;
    page.set_inner_html(element_id, &html);

    Ok(Some(pagination))
}
