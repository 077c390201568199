//! Checkbox rendering for a multi-value select, with a "Select All" row.
//!
//! Options are identified by their value, never by position.

use askama::Template;
use std::collections::HashSet;

use super::WidgetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "widgets/option.html")]
struct OptionTemplate<'a> {
    value: &'a str,
    label: &'a str,
    checked: bool,
}

#[derive(Template)]
#[template(path = "widgets/select_all.html")]
struct SelectAllTemplate {
    checked: bool,
}

type ChangeListener = Box<dyn Fn(&[String]) + Send + Sync>;

pub struct MultiSelect {
    options: Vec<SelectOption>,
    selected: HashSet<String>,
    listeners: Vec<ChangeListener>,
}

impl MultiSelect {
    /// Later options repeating an earlier value are dropped.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let mut seen = HashSet::new();
        let options = options
            .into_iter()
            .filter(|option| seen.insert(option.value.clone()))
            .collect();

        Self {
            options,
            selected: HashSet::new(),
            listeners: Vec::new(),
        }
    }

    /// Pre-selects values, e.g. from the bound form field.
    pub fn with_selected<I, S>(mut self, values: I) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            self.ensure_known(&value)?;
            self.selected.insert(value);
        }
        Ok(self)
    }

    /// Registers a listener called with the selection after every change.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Selected values in option order.
    pub fn selected(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| self.selected.contains(&option.value))
            .map(|option| option.value.clone())
            .collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    pub fn select_all_checked(&self) -> bool {
        !self.options.is_empty()
            && self
                .options
                .iter()
                .all(|option| self.selected.contains(&option.value))
    }

    /// Row checkbox click. Returns whether the selection changed; a value is
    /// never stored twice.
    pub fn toggle(&mut self, value: &str, checked: bool) -> Result<bool, WidgetError> {
        self.ensure_known(value)?;

        let changed = if checked {
            self.selected.insert(value.to_string())
        } else {
            self.selected.remove(value)
        };

        self.notify();
        Ok(changed)
    }

    /// "Select All" click: selects everything unless everything already is,
    /// in which case it clears the selection.
    pub fn click_select_all(&mut self) {
        let select = !self.select_all_checked();
        self.set_all(select);
    }

    pub fn set_all(&mut self, selected: bool) {
        if selected {
            self.selected = self.options.iter().map(|o| o.value.clone()).collect();
        } else {
            self.selected.clear();
        }
        self.notify();
    }

    pub fn render_option(&self, value: &str) -> Result<String, WidgetError> {
        let option = self
            .options
            .iter()
            .find(|option| option.value == value)
            .ok_or_else(|| WidgetError::UnknownOption(value.to_string()))?;

        Ok(OptionTemplate {
            value: &option.value,
            label: &option.label,
            checked: self.is_selected(&option.value),
        }
        .render()?)
    }

    pub fn render_select_all(&self) -> Result<String, WidgetError> {
        Ok(SelectAllTemplate {
            checked: self.select_all_checked(),
        }
        .render()?)
    }

    /// Drop-down body: the "Select All" row followed by every option.
    pub fn render(&self) -> Result<String, WidgetError> {
        let mut html = self.render_select_all()?;
        for option in &self.options {
            html.push_str(&self.render_option(&option.value)?);
        }
        Ok(html)
    }

    fn ensure_known(&self, value: &str) -> Result<(), WidgetError> {
        if self.options.iter().any(|option| option.value == value) {
            Ok(())
        } else {
            Err(WidgetError::UnknownOption(value.to_string()))
        }
    }

    fn notify(&self) {
        let selection = self.selected();
        tracing::debug!(selected = selection.len(), "Multi-select changed");
        for listener in &self.listeners {
            listener(&selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> MultiSelect {
        MultiSelect::new(vec![
            SelectOption::new("1", "Day shift"),
            SelectOption::new("2", "Night shift"),
            SelectOption::new("3", "Weekend"),
        ])
    }

    #[test]
    fn test_select_all_tracks_individual_toggles() {
        let mut select = teams();
        for value in ["1", "2"] {
            select.toggle(value, true).unwrap();
            assert!(!select.select_all_checked());
        }
        select.toggle("3", true).unwrap();
        assert!(select.select_all_checked());

        select.toggle("2", false).unwrap();
        assert!(!select.select_all_checked());
        assert_eq!(select.selected(), vec!["1", "3"]);
    }

    #[test]
    fn test_duplicate_toggle_does_not_change_selection() {
        let mut select = teams();
        assert!(select.toggle("1", true).unwrap());
        assert!(!select.toggle("1", true).unwrap());
        assert_eq!(select.selected(), vec!["1"]);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let mut select = teams();
        assert_eq!(
            select.toggle("9", true),
            Err(WidgetError::UnknownOption("9".to_string()))
        );
        assert!(teams().with_selected(["4"]).is_err());
    }

    #[test]
    fn test_select_all_click_flips_between_all_and_none() {
        let mut select = teams().with_selected(["1"]).unwrap();
        select.click_select_all();
        assert_eq!(select.selected().len(), 3);
        select.click_select_all();
        assert!(select.selected().is_empty());
    }

    #[test]
    fn test_repeated_option_values_are_kept_once() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("1", "Day shift"),
            SelectOption::new("1", "Day shift (copy)"),
            SelectOption::new("2", "Night shift"),
        ]);
        assert_eq!(select.options().len(), 2);

        select.set_all(true);
        assert_eq!(select.selected(), vec!["1", "2"]);
        assert!(select.select_all_checked());

        select.click_select_all();
        assert!(select.selected().is_empty());
        assert!(!select.select_all_checked());
    }

    #[test]
    fn test_empty_options_never_report_all_selected() {
        assert!(!MultiSelect::new(Vec::new()).select_all_checked());
    }

    #[test]
    fn test_rendered_rows_reflect_selection() {
        let select = teams().with_selected(["1", "2", "3"]).unwrap();
        let html = select.render().unwrap();
        assert_eq!(html.matches(" checked").count(), 4);
        assert!(html.contains("Night shift"));
    }
}
