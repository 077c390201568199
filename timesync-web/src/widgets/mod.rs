//! Interactive widgets that keep their own state and mirror it onto the page.

pub mod floating_label;
pub mod formset;
pub mod hover_menu;
pub mod multi_select;
pub mod scroll;

pub use floating_label::FloatingLabel;
pub use formset::{FormsetElements, FormsetManager};
pub use hover_menu::{HoverMenu, Region};
pub use multi_select::{MultiSelect, SelectOption};
pub use scroll::scroll_from_location;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unknown block: {0}")]
    UnknownBlock(u32),

    #[error("Required element #{0} is missing")]
    MissingElement(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<askama::Error> for WidgetError {
    fn from(err: askama::Error) -> Self {
        WidgetError::Render(err.to_string())
    }
}
