use std::sync::Arc;

use crate::page::Page;

pub const FILLED_CLASS: &str = "input-filled";

/// Keeps `input-filled` on an `.input-box` while its input holds text.
pub struct FloatingLabel {
    page: Arc<dyn Page>,
    input_id: String,
    box_id: String,
}

impl FloatingLabel {
    /// Attaches and applies the initial state, which covers autofill.
    pub fn attach(page: Arc<dyn Page>, input_id: impl Into<String>, box_id: impl Into<String>) -> Self {
        let label = Self {
            page,
            input_id: input_id.into(),
            box_id: box_id.into(),
        };
        if label.is_filled() {
            label.page.set_class(&label.box_id, FILLED_CLASS, true);
        }
        label
    }

    pub fn on_input(&self) {
        self.page
            .set_class(&self.box_id, FILLED_CLASS, self.is_filled());
    }

    pub fn on_blur(&self) {
        if !self.is_filled() {
            self.page.set_class(&self.box_id, FILLED_CLASS, false);
        }
    }

    fn is_filled(&self) -> bool {
        self.page
            .field_value(&self.input_id)
            .is_some_and(|value| !value.trim().is_empty())
    }
}
