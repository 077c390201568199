use std::sync::Arc;

use crate::page::Page;

pub const HOVERED_CLASS: &str = "hovered";

/// Where the pointer is, relative to the drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Toggle,
    Menu,
    Outside,
}

/// Navbar drop-down that opens on hover.
pub struct HoverMenu {
    page: Arc<dyn Page>,
    menu_id: String,
    avatar_id: String,
    open: bool,
}

impl HoverMenu {
    pub fn new(page: Arc<dyn Page>, menu_id: impl Into<String>, avatar_id: impl Into<String>) -> Self {
        Self {
            page,
            menu_id: menu_id.into(),
            avatar_id: avatar_id.into(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pointer_over(&mut self, region: Region) {
        if region != Region::Outside {
            self.set_open(true);
        }
    }

    /// Pointer left the toggle or the menu. `entered` is where it went.
    pub fn pointer_out(&mut self, entered: Region) {
        if entered == Region::Outside {
            self.set_open(false);
        }
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.page.set_visible(&self.menu_id, open);
        self.page.set_class(&self.avatar_id, HOVERED_CLASS, open);
    }
}
