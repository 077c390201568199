pub mod config;
pub mod handlers;
pub mod loaders;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
pub mod widgets;

use config::{get_configuration, Settings};
use loaders::{EmployeesResource, HistoryResource, ListLoader, TeamsResource};
use page::Page;
use services::ApiClient;
use std::sync::Arc;
use timesync_core::observability::init_tracing;
use timesync_core::AppError;

/// Shared state for the scripts running on one page
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub page: Arc<dyn Page>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, page: Arc<dyn Page>) -> Result<Self, AppError> {
        let api = Arc::new(ApiClient::new(settings.api.clone())?);
        Ok(Self {
            api,
            page,
            settings: Arc::new(settings),
        })
    }

    /// Loads configuration, installs logging and builds the state.
    pub fn bootstrap(page: Arc<dyn Page>) -> Result<Self, AppError> {
        let settings = get_configuration().map_err(|e| {
            eprintln!("Failed to read configuration: {}", e);
            e
        })?;

        init_tracing(&settings.logging.service_name, &settings.logging.level);

        tracing::info!(base_url = %settings.api.base_url, "Page scripts initialised");
        Self::new(settings, page)
    }

    pub fn employees_loader(&self) -> ListLoader<EmployeesResource> {
        let urls = &self.settings.api.urls;
        ListLoader::new(
            self.api.clone(),
            self.page.clone(),
            EmployeesResource,
            urls.employees.clone(),
        )
        .with_update_profile_url(urls.update_profile.clone())
    }

    pub fn teams_loader(&self) -> ListLoader<TeamsResource> {
        ListLoader::new(
            self.api.clone(),
            self.page.clone(),
            TeamsResource,
            self.settings.api.urls.teams.clone(),
        )
    }

    pub fn history_loader(&self) -> ListLoader<HistoryResource> {
        ListLoader::new(
            self.api.clone(),
            self.page.clone(),
            HistoryResource,
            self.settings.api.urls.history.clone(),
        )
    }
}
