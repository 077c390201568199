//! The host page surface.
//!
//! Every component reads and writes the DOM exclusively through [`Page`]. A
//! browser host maps these calls onto `document`/`window`; tests use an
//! in-memory implementation. Element arguments are element ids unless named
//! otherwise.

pub trait Page: Send + Sync {
    fn has_element(&self, element_id: &str) -> bool;

    fn set_inner_html(&self, element_id: &str, html: &str);

    fn append_html(&self, element_id: &str, html: &str);

    fn remove_element(&self, element_id: &str);

    fn set_text(&self, element_id: &str, text: &str);

    fn set_visible(&self, element_id: &str, visible: bool);

    fn set_disabled(&self, element_id: &str, disabled: bool);

    fn set_checked(&self, element_id: &str, checked: bool);

    /// Current value of an input, select or textarea.
    fn field_value(&self, element_id: &str) -> Option<String>;

    fn set_value(&self, element_id: &str, value: &str);

    fn set_class(&self, element_id: &str, class: &str, enabled: bool);

    fn focus(&self, element_id: &str);

    /// `content` of `<meta name="...">`.
    fn meta_content(&self, name: &str) -> Option<String>;

    /// Value of `<input type="hidden" name="...">`.
    fn hidden_input(&self, name: &str) -> Option<String>;

    /// Top edge of an element relative to the viewport.
    fn element_top(&self, element_id: &str) -> Option<f64>;

    fn scroll_y(&self) -> f64;

    fn scroll_to(&self, top: f64);

    fn location_path(&self) -> String;

    /// Query string of the current location, with or without the leading `?`.
    fn location_query(&self) -> String;

    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;

    fn reload(&self);

    fn redirect(&self, url: &str);
}
