use super::dto::{ButtonBar, Lookup, Region};
use super::render::TextSink;
use crate::comments::dto::CommentBlock;
use crate::ui::buttons::ButtonSpec;

/// Everything the assistant reads from or writes to the helpdesk page.
///
/// Reads return [`Lookup`] so an absent element is an ordinary outcome.
/// Field ids are the host application's element ids without the `#`.
pub trait HostPage {
    /// Comment blocks of the ticket's comment container, most recent first.
    fn comment_blocks(&self) -> Lookup<Vec<CommentBlock>>;

    /// Value of an input, or the text of a label.
    fn field_value(&self, id: &str) -> Lookup<String>;

    fn set_field_value(&mut self, id: &str, value: &str) -> Lookup<()>;

    /// Markup currently in the rich-text comment editor.
    fn editor_html(&self) -> Lookup<String>;

    fn set_editor_html(&mut self, html: &str) -> Lookup<()>;

    fn has_element(&self, id: &str) -> bool;

    fn add_button(&mut self, bar: ButtonBar, button: &ButtonSpec) -> Lookup<()>;

    /// Insert the summary panel ahead of the comment history.
    fn insert_summary_panel(&mut self, markup: &str) -> Lookup<()>;

    fn set_region_text(&mut self, region: Region, text: &str);

    fn set_region_html(&mut self, region: Region, html: &str);

    /// Tell the user something went wrong.
    fn notify(&mut self, message: &str);
}

/// A panel region of a page used as a [`TextSink`].
pub struct RegionSink<'a, P: HostPage + ?Sized> {
    page: &'a mut P,
    region: Region,
}

impl<'a, P: HostPage + ?Sized> RegionSink<'a, P> {
    pub fn new(page: &'a mut P, region: Region) -> Self {
        Self { page, region }
    }
}

impl<P: HostPage + ?Sized> TextSink for RegionSink<'_, P> {
    fn set_text(&mut self, text: &str) {
        self.page.set_region_text(self.region, text);
    }

    fn set_html(&mut self, html: &str) {
        self.page.set_region_html(self.region, html);
    }
}
