#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use timesync_web::config::ApiSettings;
use timesync_web::page::Page;
use timesync_web::services::ApiClient;
use wiremock::MockServer;

pub const TEST_CSRF_TOKEN: &str = "test-csrf-token";

#[derive(Default)]
struct PageState {
    elements: HashSet<String>,
    html: HashMap<String, String>,
    text: HashMap<String, String>,
    values: HashMap<String, String>,
    hidden: HashSet<String>,
    disabled: HashSet<String>,
    checked: HashSet<String>,
    classes: HashSet<(String, String)>,
    meta: HashMap<String, String>,
    hidden_inputs: HashMap<String, String>,
    tops: HashMap<String, f64>,
    scroll_y: f64,
    scrolled_to: Option<f64>,
    path: String,
    query: String,
    alerts: Vec<String>,
    confirms: Vec<String>,
    confirm_answer: bool,
    focused: Option<String>,
    reloads: usize,
    redirects: Vec<String>,
}

/// In-memory page that records every call made through [`Page`].
pub struct FakePage {
    state: Mutex<PageState>,
}

impl FakePage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(PageState {
                confirm_answer: true,
                path: "/".to_string(),
                ..Default::default()
            }),
        })
    }

    fn state(&self) -> std::sync::MutexGuard<'_, PageState> {
        self.state.lock().expect("page state poisoned")
    }

    pub fn with_elements(self: Arc<Self>, ids: &[&str]) -> Arc<Self> {
        self.state()
            .elements
            .extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn with_meta_csrf(self: Arc<Self>, token: &str) -> Arc<Self> {
        self.state()
            .meta
            .insert("csrf-token".to_string(), token.to_string());
        self
    }

    pub fn with_hidden_csrf(self: Arc<Self>, token: &str) -> Arc<Self> {
        self.state()
            .hidden_inputs
            .insert("csrfmiddlewaretoken".to_string(), token.to_string());
        self
    }

    pub fn with_value(self: Arc<Self>, id: &str, value: &str) -> Arc<Self> {
        {
            let mut state = self.state();
            state.elements.insert(id.to_string());
            state.values.insert(id.to_string(), value.to_string());
        }
        self
    }

    pub fn with_path(self: Arc<Self>, path: &str) -> Arc<Self> {
        self.state().path = path.to_string();
        self
    }

    pub fn with_query(self: Arc<Self>, query: &str) -> Arc<Self> {
        self.state().query = query.to_string();
        self
    }

    pub fn with_element_top(self: Arc<Self>, id: &str, top: f64, scroll_y: f64) -> Arc<Self> {
        {
            let mut state = self.state();
            state.tops.insert(id.to_string(), top);
            state.scroll_y = scroll_y;
        }
        self
    }

    /// Simulates the user typing into a field.
    pub fn set_value_for_test(&self, id: &str, value: &str) {
        self.state()
            .values
            .insert(id.to_string(), value.to_string());
    }

    pub fn answer_confirms(&self, answer: bool) {
        self.state().confirm_answer = answer;
    }

    pub fn html(&self, id: &str) -> String {
        self.state().html.get(id).cloned().unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.state().text.get(id).cloned()
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.state().values.get(id).cloned()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        !self.state().hidden.contains(id)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.state().disabled.contains(id)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.state().checked.contains(id)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.state()
            .classes
            .contains(&(id.to_string(), class.to_string()))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.state().confirms.clone()
    }

    pub fn focused(&self) -> Option<String> {
        self.state().focused.clone()
    }

    pub fn reloads(&self) -> usize {
        self.state().reloads
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state().redirects.clone()
    }

    pub fn scrolled_to(&self) -> Option<f64> {
        self.state().scrolled_to
    }
}

impl Page for FakePage {
    fn has_element(&self, element_id: &str) -> bool {
        self.state().elements.contains(element_id)
    }

    fn set_inner_html(&self, element_id: &str, html: &str) {
        self.state()
            .html
            .insert(element_id.to_string(), html.to_string());
    }

    fn append_html(&self, element_id: &str, html: &str) {
        self.state()
            .html
            .entry(element_id.to_string())
            .or_default()
            .push_str(html);
    }

    fn remove_element(&self, element_id: &str) {
        let mut state = self.state();
        state.elements.remove(element_id);
        state.hidden.insert(element_id.to_string());
    }

    fn set_text(&self, element_id: &str, text: &str) {
        self.state()
            .text
            .insert(element_id.to_string(), text.to_string());
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        let mut state = self.state();
        if visible {
            state.hidden.remove(element_id);
        } else {
            state.hidden.insert(element_id.to_string());
        }
    }

    fn set_disabled(&self, element_id: &str, disabled: bool) {
        let mut state = self.state();
        if disabled {
            state.disabled.insert(element_id.to_string());
        } else {
            state.disabled.remove(element_id);
        }
    }

    fn set_checked(&self, element_id: &str, checked: bool) {
        let mut state = self.state();
        if checked {
            state.checked.insert(element_id.to_string());
        } else {
            state.checked.remove(element_id);
        }
    }

    fn field_value(&self, element_id: &str) -> Option<String> {
        self.state().values.get(element_id).cloned()
    }

    fn set_value(&self, element_id: &str, value: &str) {
        self.state()
            .values
            .insert(element_id.to_string(), value.to_string());
    }

    fn set_class(&self, element_id: &str, class: &str, enabled: bool) {
        let key = (element_id.to_string(), class.to_string());
        let mut state = self.state();
        if enabled {
            state.classes.insert(key);
        } else {
            state.classes.remove(&key);
        }
    }

    fn focus(&self, element_id: &str) {
        self.state().focused = Some(element_id.to_string());
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        self.state().meta.get(name).cloned()
    }

    fn hidden_input(&self, name: &str) -> Option<String> {
        self.state().hidden_inputs.get(name).cloned()
    }

    fn element_top(&self, element_id: &str) -> Option<f64> {
        self.state().tops.get(element_id).copied()
    }

    fn scroll_y(&self) -> f64 {
        self.state().scroll_y
    }

    fn scroll_to(&self, top: f64) {
        self.state().scrolled_to = Some(top);
    }

    fn location_path(&self) -> String {
        self.state().path.clone()
    }

    fn location_query(&self) -> String {
        self.state().query.clone()
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state();
        state.confirms.push(message.to_string());
        state.confirm_answer
    }

    fn reload(&self) {
        self.state().reloads += 1;
    }

    fn redirect(&self, url: &str) {
        self.state().redirects.push(url.to_string());
    }
}

pub fn api_client(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(ApiSettings::new(server.uri())).expect("Failed to build API client"))
}
