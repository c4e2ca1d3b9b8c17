use anyhow::{Context, Result};
use std::path::Path;

use helpdesk_core::comments::dto::CommentBlock;
use helpdesk_core::page::{ButtonBar, HostPage, Lookup, Region};
use helpdesk_core::ui::ButtonSpec;

use super::dto::{PageSnapshot, SnapshotButton};

const COMMENTS_TARGET: &str = "#udp_Comments";
const EDITOR_TARGET: &str = "#tinymce";

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid page snapshot")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page snapshot {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl HostPage for PageSnapshot {
    fn comment_blocks(&self) -> Lookup<Vec<CommentBlock>> {
        Lookup::from_option(self.comments.clone(), COMMENTS_TARGET)
    }

    fn field_value(&self, id: &str) -> Lookup<String> {
        Lookup::from_option(self.fields.get(id).cloned(), id)
    }

    fn set_field_value(&mut self, id: &str, value: &str) -> Lookup<()> {
        let Some(field) = self.fields.get_mut(id) else {
            return Lookup::missing(id);
        };
        *field = value.to_string();
        Lookup::Found(())
    }

    fn editor_html(&self) -> Lookup<String> {
        Lookup::from_option(self.editor.clone(), EDITOR_TARGET)
    }

    fn set_editor_html(&mut self, html: &str) -> Lookup<()> {
        let Some(editor) = self.editor.as_mut() else {
            return Lookup::missing(EDITOR_TARGET);
        };
        *editor = html.to_string();
        Lookup::Found(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id) || self.fields.contains_key(id)
    }

    fn add_button(&mut self, bar: ButtonBar, button: &ButtonSpec) -> Lookup<()> {
        let entry = SnapshotButton {
            bar,
            id: button.id.to_string(),
            label: button.label.to_string(),
            class: button.class().to_string(),
        };

        match bar {
            ButtonBar::Dialog if self.dialog_open => self.buttons.insert(0, entry),
            ButtonBar::CommentEditor if self.editor.is_some() => self.buttons.push(entry),
            ButtonBar::Dialog => return Lookup::missing(".ui-dialog-buttonset"),
            ButtonBar::CommentEditor => return Lookup::missing("#comment_editor_container"),
        }

        self.elements.insert(button.id.to_string());
        Lookup::Found(())
    }

    fn insert_summary_panel(&mut self, markup: &str) -> Lookup<()> {
        if self.comments.is_none() {
            return Lookup::missing(COMMENTS_TARGET);
        }
        self.panel = Some(markup.to_string());
        for region in [Region::SummaryBox, Region::KeyPoints] {
            self.elements.insert(region.element_id().to_string());
        }
        Lookup::Found(())
    }

    fn set_region_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, text.to_string());
    }

    fn set_region_html(&mut self, region: Region, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn notify(&mut self, message: &str) {
        log::warn!("User notification: {}", message);
        self.notifications.push(message.to_string());
    }
}
