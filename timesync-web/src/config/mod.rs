use serde::Deserialize;
use std::path::PathBuf;
use timesync_core::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    /// Origin of the backend, e.g. `http://localhost:8000`.
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub urls: ApiUrls,
}

/// Endpoint paths, relative to `base_url` unless absolute.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiUrls {
    pub employees: String,
    pub teams: String,
    pub history: String,
    /// Profile edit route; `PLACEHOLDER` is replaced with the user slug.
    pub update_profile: String,
    pub absences: String,
    pub holidays: String,
    pub events: String,
    pub sign_out: String,
    pub login: String,
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self {
            employees: "/api/employees/".to_string(),
            teams: "/api/teams/".to_string(),
            history: "/api/history/".to_string(),
            update_profile: "/users/PLACEHOLDER/profile/edit/".to_string(),
            absences: "/api/absences/".to_string(),
            holidays: "/api/holidays/".to_string(),
            events: "/api/events/".to_string(),
            sign_out: "/sign-out/".to_string(),
            login: "/login/".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoggingSettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            level: default_log_level(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_service_name() -> String {
    "timesync-web".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: default_timeout_seconds(),
            urls: ApiUrls::default(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir()
        .map_err(|e| AppError::ConfigError(config_io_error(e)))?;

    // Check if we're already in timesync-web directory or need to navigate to it
    let configuration_directory: PathBuf = if base_path.ends_with("timesync-web") {
        base_path.join("config")
    } else {
        base_path.join("timesync-web").join("config")
    };

    timesync_core::config::load_settings(&configuration_directory)
}

fn config_io_error(err: std::io::Error) -> timesync_core::config::ConfigError {
    timesync_core::config::ConfigError::Foreign(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = ApiUrls::default();
        assert_eq!(urls.sign_out, "/sign-out/");
        assert_eq!(urls.login, "/login/");
        assert!(urls.update_profile.contains("PLACEHOLDER"));
    }

    #[test]
    fn test_partial_urls_fall_back_to_defaults() {
        let settings: ApiSettings = serde_json::from_str(
            r#"{"base_url":"http://backend","urls":{"employees":"/companies/acme/teams/5/employees/"}}"#,
        )
        .unwrap();

        assert_eq!(settings.timeout_seconds, 30);
        assert_eq!(settings.urls.employees, "/companies/acme/teams/5/employees/");
        assert_eq!(settings.urls.teams, "/api/teams/");
    }
}
