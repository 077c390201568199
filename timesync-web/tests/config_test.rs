use timesync_web::config::get_configuration;

mod common;

#[test]
fn test_base_configuration_loads() {
    let settings = get_configuration().expect("Failed to read configuration");

    assert_eq!(settings.api.urls.employees, "/api/employees/");
    assert_eq!(settings.api.urls.sign_out, "/sign-out/");
    assert_eq!(settings.api.timeout_seconds, 30);
    assert_eq!(settings.logging.service_name, "timesync-web");
}

#[test]
fn test_app_state_builds_loaders_from_settings() {
    let settings = get_configuration().expect("Failed to read configuration");
    let page = common::FakePage::new();

    let state = timesync_web::AppState::new(settings, page).unwrap();

    assert_eq!(state.teams_loader().endpoint(), "/api/teams/");
    assert_eq!(state.history_loader().endpoint(), "/api/history/");
    assert_eq!(state.employees_loader().endpoint(), "/api/employees/");
}
