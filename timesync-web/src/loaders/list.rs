//! Generic paginated list loader.
//!
//! `load(page)` shows a loading block, fetches `?page=<page>` and renders
//! either rows plus page links, a "no data" block, or an inline error.
//! Each call takes a new generation; a response is only rendered if no newer
//! call started while it was in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use timesync_core::AppError;

use super::resources::Resource;
use crate::page::Page;
use crate::render::rows::RowContext;
use crate::render::{parse_page, render_pagination, status_html, Pagination};
use crate::services::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows were rendered; `pagination` is `None` when everything fit.
    Rendered {
        rows: usize,
        pagination: Option<Pagination>,
    },
    Empty,
    /// A newer load started before this one resolved; nothing was rendered.
    Stale,
}

pub struct ListLoader<R: Resource> {
    api: Arc<ApiClient>,
    page: Arc<dyn Page>,
    resource: R,
    endpoint: String,
    update_profile_url: Option<String>,
    generation: AtomicU64,
}

impl<R: Resource> ListLoader<R> {
    pub fn new(api: Arc<ApiClient>, page: Arc<dyn Page>, resource: R, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            page,
            resource,
            endpoint: endpoint.into(),
            update_profile_url: None,
            generation: AtomicU64::new(0),
        }
    }

    /// Adds an edit link to each row, built from a route containing
    /// `PLACEHOLDER`.
    pub fn with_update_profile_url(mut self, url: impl Into<String>) -> Self {
        self.update_profile_url = Some(url.into());
        self
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn load(&self, page_number: u32) -> Result<LoadOutcome, AppError> {
        let container = self.resource.container_id();
        if !self.page.has_element(container) {
            tracing::error!(resource = self.resource.name(), container, "List container missing");
            return Err(AppError::MissingPrerequisite(format!(
                "Element #{} not found",
                container
            )));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.page.set_inner_html(
            container,
            &status_html("loading", self.resource.loading_message()),
        );

        let result = self
            .api
            .fetch_page::<R::Record>(&self.endpoint, page_number)
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                resource = self.resource.name(),
                page = page_number,
                generation,
                "Discarding stale response"
            );
            return Ok(LoadOutcome::Stale);
        }

        let data = match result {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(
                    resource = self.resource.name(),
                    page = page_number,
                    error = %e,
                    "Failed to load list"
                );
                self.show_error();
                return Err(e);
            }
        };

        if data.is_empty() {
            self.page.set_inner_html(
                container,
                &status_html("no-data", self.resource.empty_message()),
            );
            return Ok(LoadOutcome::Empty);
        }

        let ctx = RowContext {
            update_profile_url: self.update_profile_url.clone(),
            current_path: self.page.location_path(),
        };

        let html = match self.resource.render_rows(&data.results, &ctx) {
            Ok(html) => html,
            Err(e) => {
                self.show_error();
                return Err(crate::render::render_error(e));
            }
        };
        self.page.set_inner_html(container, &html);

        let pagination = render_pagination(self.page.as_ref(), self.resource.pagination_id(), &data)?;

        tracing::debug!(
            resource = self.resource.name(),
            page = page_number,
            rows = data.results.len(),
            "List rendered"
        );

        Ok(LoadOutcome::Rendered {
            rows: data.results.len(),
            pagination,
        })
    }

    /// Click on a rendered page link carrying `data-page`. Links without a
    /// numeric page are ignored.
    pub async fn follow_link(&self, data_page: &str) -> Option<Result<LoadOutcome, AppError>> {
        let target = parse_page(data_page)?;
        Some(self.load(target).await)
    }

    fn show_error(&self) {
        self.page.set_inner_html(
            self.resource.container_id(),
            &status_html("error", self.resource.error_message()),
        );
    }
}
