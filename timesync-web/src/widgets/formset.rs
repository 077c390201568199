//! Repeatable "week" blocks of the rotation schedule form.
//!
//! New blocks are cloned from the empty-form template with `__prefix__`
//! replaced by the next form index. Removing a block that has a `-DELETE`
//! field marks it for server-side deletion and hides it; any other block is
//! removed outright. `TOTAL_FORMS` counts every block ever added, hidden or
//! not, and never decreases.

use askama::Template;
use std::sync::Arc;

use super::WidgetError;
use crate::page::Page;

pub const PREFIX_TOKEN: &str = "__prefix__";

pub const MIN_WEEKS_MESSAGE: &str = "You must have at least 1 rotation week.";

/// Element ids the manager needs on the page.
#[derive(Debug, Clone)]
pub struct FormsetElements {
    pub container: String,
    pub rotation_weeks: String,
    pub total_forms: String,
    pub update_button: String,
    pub message: String,
    /// Formset prefix, `blocks` for `blocks-TOTAL_FORMS`.
    pub prefix: String,
}

impl Default for FormsetElements {
    fn default() -> Self {
        Self {
            container: "formset-container".to_string(),
            rotation_weeks: "id_rotation_weeks".to_string(),
            total_forms: "id_blocks-TOTAL_FORMS".to_string(),
            update_button: "update-button".to_string(),
            message: "message-container".to_string(),
            prefix: "blocks".to_string(),
        }
    }
}

/// Whether the markup carries a field whose `name` ends in `-DELETE`.
/// Attribute values may be double- or single-quoted.
fn has_delete_field(html: &str) -> bool {
    html.match_indices("name=").any(|(at, attr)| {
        let preceded_by_space = html[..at].ends_with(char::is_whitespace);
        let tail = &html[at + attr.len()..];

        let Some(quote @ ('"' | '\'')) = tail.chars().next() else {
            return false;
        };
        let value = &tail[1..];

        preceded_by_space
            && value
                .find(quote)
                .is_some_and(|end| value[..end].ends_with("-DELETE"))
    })
}

#[derive(Template)]
#[template(path = "widgets/block.html")]
struct BlockTemplate<'a> {
    block_id: &'a str,
    header_id: &'a str,
    header: &'a str,
    body: &'a str,
}

#[derive(Debug, Clone)]
struct Block {
    index: u32,
    has_delete_field: bool,
    hidden: bool,
}

pub struct FormsetManager {
    page: Arc<dyn Page>,
    elements: FormsetElements,
    template: String,
    blocks: Vec<Block>,
    total_forms: u32,
}

impl FormsetManager {
    /// Takes over a formset whose first `existing` blocks were rendered by
    /// the server, then numbers them and syncs the rotation weeks.
    pub fn attach(
        page: Arc<dyn Page>,
        elements: FormsetElements,
        template: impl Into<String>,
        existing: u32,
    ) -> Result<Self, WidgetError> {
        for id in [
            &elements.container,
            &elements.rotation_weeks,
            &elements.total_forms,
            &elements.update_button,
            &elements.message,
        ] {
            if !page.has_element(id) {
                tracing::error!(element = %id, "Formset element missing");
                return Err(WidgetError::MissingElement(id.clone()));
            }
        }

        let total_forms = page
            .field_value(&elements.total_forms)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(existing)
            .max(existing);

        let blocks = (0..existing)
            .map(|index| Block {
                index,
                has_delete_field: true,
                hidden: false,
            })
            .collect();

        let manager = Self {
            page,
            elements,
            template: template.into(),
            blocks,
            total_forms,
        };
        manager.refresh();
        Ok(manager)
    }

    pub fn block_id(&self, index: u32) -> String {
        format!("{}-{}-block", self.elements.prefix, index)
    }

    pub fn header_id(&self, index: u32) -> String {
        format!("{}-{}-header", self.elements.prefix, index)
    }

    fn delete_field_id(&self, index: u32) -> String {
        format!("id_{}-{}-DELETE", self.elements.prefix, index)
    }

    pub fn total_forms(&self) -> u32 {
        self.total_forms
    }

    /// Form indexes of the blocks still shown, in page order.
    pub fn visible_blocks(&self) -> Vec<u32> {
        self.blocks
            .iter()
            .filter(|block| !block.hidden)
            .map(|block| block.index)
            .collect()
    }

    /// Appends a block cloned from the template. Returns its form index.
    pub fn add_block(&mut self) -> Result<u32, WidgetError> {
        let index = self.total_forms;
        let body = self.template.replace(PREFIX_TOKEN, &index.to_string());
        let has_delete_field = has_delete_field(&body);

        let block_id = self.block_id(index);
        let header_id = self.header_id(index);
        let header = format!("Week {}", self.visible_blocks().len() + 1);

        let html = BlockTemplate {
            block_id: &block_id,
            header_id: &header_id,
            header: &header,
            body: &body,
        }
        .render()?;

        self.page.append_html(&self.elements.container, &html);
        self.blocks.push(Block {
            index,
            has_delete_field,
            hidden: false,
        });

        self.total_forms += 1;
        self.page
            .set_value(&self.elements.total_forms, &self.total_forms.to_string());

        self.refresh();
        Ok(index)
    }

    /// Removes the visible block with form index `index`.
    pub fn remove_block(&mut self, index: u32) -> Result<(), WidgetError> {
        let position = self
            .blocks
            .iter()
            .position(|block| block.index == index && !block.hidden)
            .ok_or(WidgetError::UnknownBlock(index))?;

        let block_id = self.block_id(index);
        if self.blocks[position].has_delete_field {
            self.page.set_checked(&self.delete_field_id(index), true);
            self.page.set_visible(&block_id, false);
            self.blocks[position].hidden = true;
        } else {
            self.page.remove_element(&block_id);
            self.blocks.remove(position);
        }

        self.refresh();
        Ok(())
    }

    /// Renumbers visible blocks and syncs the rotation weeks field and the
    /// submit control. Returns the visible count.
    pub fn refresh(&self) -> usize {
        let visible = self.visible_blocks();

        for (position, index) in visible.iter().enumerate() {
            self.page
                .set_text(&self.header_id(*index), &format!("Week {}", position + 1));
        }

        let count = visible.len();
        self.page
            .set_value(&self.elements.rotation_weeks, &count.to_string());

        if count == 0 {
            self.page.set_disabled(&self.elements.update_button, true);
            self.page.set_text(&self.elements.message, MIN_WEEKS_MESSAGE);
            self.page.set_visible(&self.elements.message, true);
        } else {
            self.page.set_disabled(&self.elements.update_button, false);
            self.page.set_visible(&self.elements.message, false);
        }

        count
    }
}
