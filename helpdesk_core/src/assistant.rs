use std::time::Duration;

use crate::ai::handler::Capabilities;
use crate::comments::body::normalize_body;
use crate::comments::extract_comments;
use crate::helpers::utils::format_number;
use crate::page::watcher::{wait_for_element, wait_for_removal, PresenceReceiver};
use crate::page::{ButtonBar, HostPage, Lookup, Region, RegionSink};
use crate::summarizer::handler::SUMMARY_FAILED;
use crate::summarizer::helpers::prepare_comments_for_summarizer;
use crate::summarizer::SummaryService;
use crate::template::{TemplateEngine, TemplateKind, TemplateSet};
use crate::ticket::{refresh_ticket_data, TicketData};
use crate::ui::buttons::{
    action_for, editor_buttons, extract_button, ButtonAction, EDITOR_BUTTONS_MARKER,
    EXTRACT_BUTTON_ID,
};
use crate::ui::panel::summary_panel_html;

pub const TIMESHEET_COMMENT_FIELD: &str = "txt_tr_comments";
pub const TIMESHEET_DURATION_FIELD: &str = "txt_tr_duration";
pub const EDITOR_MISSING: &str = "Comment editor not found.";

/// Wires the page, the AI capabilities and the templates together.
#[derive(Clone)]
pub struct Assistant {
    summaries: SummaryService,
    templates: Option<TemplateSet>,
    engine: TemplateEngine,
}

impl Assistant {
    /// `templates` is `None` when the template file could not be loaded; the
    /// editor buttons are then never installed.
    pub fn new(
        capabilities: Capabilities,
        templates: Option<TemplateSet>,
        engine: TemplateEngine,
        stream_delay: Duration,
    ) -> Self {
        Self {
            summaries: SummaryService::new(capabilities, stream_delay),
            templates,
            engine,
        }
    }

    /// Ticket dialog opened: add the extract button and read the ticket data.
    pub fn open_ticket<P: HostPage + ?Sized>(&self, page: &mut P) -> Option<TicketData> {
        self.install_extract_button(page);
        refresh_ticket_data(page).found()
    }

    pub fn install_extract_button<P: HostPage + ?Sized>(&self, page: &mut P) -> bool {
        if page.has_element(EXTRACT_BUTTON_ID) {
            return false;
        }

        match page.add_button(ButtonBar::Dialog, &extract_button()) {
            Lookup::Found(()) => {
                log::info!("Extract & Summarise button added.");
                true
            }
            Lookup::Missing { target } => {
                log::info!("Could not find {}. install_extract_button", target);
                false
            }
        }
    }

    /// Add the comment editor buttons unless they are already there.
    pub fn install_template_buttons<P: HostPage + ?Sized>(&self, page: &mut P) -> bool {
        if self.templates.is_none() {
            log::info!("Templates unavailable, editor buttons are not installed");
            return false;
        }
        if page.has_element(EDITOR_BUTTONS_MARKER) {
            return false;
        }

        for button in editor_buttons() {
            if page
                .add_button(ButtonBar::CommentEditor, &button)
                .or_log("install_template_buttons")
                .is_none()
            {
                return false;
            }
        }
        true
    }

    /// Install the editor buttons every time the comment editor shows up.
    /// Returns how many times they were installed once the host stops reporting.
    pub async fn watch_comment_editor<P, T>(
        &self,
        page: &mut P,
        editor: &mut PresenceReceiver<T>,
    ) -> usize
    where
        P: HostPage + ?Sized,
        T: Clone,
    {
        let mut installs = 0;

        while wait_for_element(editor).await.is_some() {
            if self.install_template_buttons(page) {
                installs += 1;
            }
            if !wait_for_removal(editor).await {
                break;
            }
        }

        installs
    }

    /// Summarise the whole comment history into a panel above it.
    pub async fn extract_and_summarise<P: HostPage + ?Sized>(&self, page: &mut P) {
        log::info!("Extract & Summarise comments clicked");

        if page.has_element(Region::SummaryBox.element_id()) {
            log::info!("AI summary already present, no need to add another one.");
            return;
        }

        let Some(blocks) = page.comment_blocks().or_log("extract_and_summarise") else {
            return;
        };

        let comments = extract_comments(&blocks);
        if comments.is_empty() {
            log::info!("No comments found. extract_and_summarise");
            return;
        }

        let input = prepare_comments_for_summarizer(&comments);

        if page
            .insert_summary_panel(&summary_panel_html())
            .or_log("extract_and_summarise")
            .is_none()
        {
            return;
        }

        self.summaries
            .generate_summary(&input, &mut RegionSink::new(page, Region::SummaryBox))
            .await;
        self.summaries
            .generate_key_points(&input, &mut RegionSink::new(page, Region::KeyPoints))
            .await;
    }

    /// Replace the editor content with the filled template.
    pub fn apply_template<P: HostPage + ?Sized>(
        &self,
        page: &mut P,
        ticket: &TicketData,
        kind: TemplateKind,
    ) -> bool {
        let Some(templates) = &self.templates else {
            log::info!("Templates unavailable, cannot apply {:?}", kind);
            return false;
        };

        let filled = self.engine.fill(templates.get(kind), &ticket.to_bag());

        match page.set_editor_html(&filled) {
            Lookup::Found(()) => true,
            Lookup::Missing { target } => {
                log::info!("Could not find {}. apply_template", target);
                page.notify(EDITOR_MISSING);
                false
            }
        }
    }

    /// Fill the timesheet description and duration from the comment being written.
    pub async fn fill_timesheet<P: HostPage + ?Sized>(&self, page: &mut P) {
        let comment = match page.editor_html() {
            Lookup::Found(html) => normalize_body(&html),
            Lookup::Missing { target } => {
                log::info!("Could not find {}. fill_timesheet", target);
                page.notify(EDITOR_MISSING);
                return;
            }
        };

        if !page.has_element(TIMESHEET_COMMENT_FIELD) {
            log::info!("Could not find {}. fill_timesheet", TIMESHEET_COMMENT_FIELD);
            return;
        }

        match self.summaries.single_line_summary(&comment).await {
            Ok(summary) => {
                page.set_field_value(TIMESHEET_COMMENT_FIELD, &summary)
                    .or_log("fill_timesheet");
            }
            Err(e) => {
                page.notify(SUMMARY_FAILED);
                log::error!("Single line summary failed: {}", e);
                return;
            }
        }

        if let Some(hours) = self.summaries.estimate_duration(&comment).await {
            page.set_field_value(TIMESHEET_DURATION_FIELD, &format_number(hours))
                .or_log("fill_timesheet");
        }
    }

    /// Run whatever the button with `id` does. `false` for ids that are not ours.
    pub async fn click<P: HostPage + ?Sized>(
        &self,
        page: &mut P,
        ticket: &TicketData,
        id: &str,
    ) -> bool {
        let Some(action) = action_for(id) else {
            log::warn!("No action bound to button {}", id);
            return false;
        };

        match action {
            ButtonAction::ExtractAndSummarise => self.extract_and_summarise(page).await,
            ButtonAction::FillTimesheet => self.fill_timesheet(page).await,
            ButtonAction::ApplyTemplate(kind) => {
                self.apply_template(page, ticket, kind);
            }
        }
        true
    }
}
