use std::collections::{BTreeMap, HashMap, HashSet};

use super::dto::{ButtonBar, Lookup, Region};
use super::handler::HostPage;
use crate::comments::dto::CommentBlock;
use crate::ui::buttons::ButtonSpec;

/// In-memory page for exercising the flows.
#[derive(Default)]
pub struct FakePage {
    pub comments: Option<Vec<CommentBlock>>,
    pub fields: BTreeMap<String, String>,
    pub editor: Option<String>,
    pub dialog_open: bool,
    pub elements: HashSet<String>,
    pub buttons: Vec<(ButtonBar, String)>,
    pub panel: Option<String>,
    pub regions: HashMap<Region, String>,
    pub notifications: Vec<String>,
}

impl FakePage {
    pub fn with_comments(comments: Vec<CommentBlock>) -> Self {
        Self {
            comments: Some(comments),
            dialog_open: true,
            ..Default::default()
        }
    }

    pub fn field(mut self, id: &str, value: &str) -> Self {
        self.fields.insert(id.to_string(), value.to_string());
        self
    }

    pub fn editor(mut self, html: &str) -> Self {
        self.editor = Some(html.to_string());
        self
    }

    pub fn button_ids(&self) -> Vec<&str> {
        self.buttons.iter().map(|(_, id)| id.as_str()).collect()
    }
}

impl HostPage for FakePage {
    fn comment_blocks(&self) -> Lookup<Vec<CommentBlock>> {
        Lookup::from_option(self.comments.clone(), "#udp_Comments")
    }

    fn field_value(&self, id: &str) -> Lookup<String> {
        Lookup::from_option(self.fields.get(id).cloned(), id)
    }

    fn set_field_value(&mut self, id: &str, value: &str) -> Lookup<()> {
        match self.fields.get_mut(id) {
            Some(field) => {
                *field = value.to_string();
                Lookup::Found(())
            }
            None => Lookup::missing(id),
        }
    }

    fn editor_html(&self) -> Lookup<String> {
        Lookup::from_option(self.editor.clone(), "#tinymce")
    }

    fn set_editor_html(&mut self, html: &str) -> Lookup<()> {
        match self.editor.as_mut() {
            Some(editor) => {
                *editor = html.to_string();
                Lookup::Found(())
            }
            None => Lookup::missing("#tinymce"),
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id) || self.fields.contains_key(id)
    }

    fn add_button(&mut self, bar: ButtonBar, button: &ButtonSpec) -> Lookup<()> {
        let present = match bar {
            ButtonBar::Dialog => self.dialog_open,
            ButtonBar::CommentEditor => self.editor.is_some(),
        };
        if !present {
            return Lookup::missing(format!("{:?} button bar", bar));
        }
        self.elements.insert(button.id.to_string());
        self.buttons.push((bar, button.id.to_string()));
        Lookup::Found(())
    }

    fn insert_summary_panel(&mut self, markup: &str) -> Lookup<()> {
        if self.comments.is_none() {
            return Lookup::missing("#udp_Comments");
        }
        self.panel = Some(markup.to_string());
        self.elements.insert(Region::SummaryBox.element_id().to_string());
        self.elements.insert(Region::KeyPoints.element_id().to_string());
        Lookup::Found(())
    }

    fn set_region_text(&mut self, region: Region, text: &str) {
        self.regions.insert(region, text.to_string());
    }

    fn set_region_html(&mut self, region: Region, html: &str) {
        self.regions.insert(region, html.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
