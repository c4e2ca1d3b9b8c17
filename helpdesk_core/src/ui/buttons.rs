use crate::template::TemplateKind;

pub const BUTTON_CLASS: &str = "ui-button ui-corner-all ui-widget";

pub const EXTRACT_BUTTON_ID: &str = "extract-btn";
pub const SINGLE_LINE_SUMMARY_ID: &str = "single-line-summary";
pub const THIRD_STRIKE_ID: &str = "first-strike";
pub const SECOND_STRIKE_ID: &str = "second-strike";
pub const CLOSURE_ID: &str = "closure";

/// Presence of this id means the editor buttons are already installed.
pub const EDITOR_BUTTONS_MARKER: &str = THIRD_STRIKE_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    ExtractAndSummarise,
    FillTimesheet,
    ApplyTemplate(TemplateKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub action: ButtonAction,
}

impl ButtonSpec {
    pub fn class(&self) -> &'static str {
        BUTTON_CLASS
    }
}

pub fn extract_button() -> ButtonSpec {
    ButtonSpec {
        id: EXTRACT_BUTTON_ID,
        label: "Extract & Summarise Comments",
        action: ButtonAction::ExtractAndSummarise,
    }
}

/// The comment editor buttons, in display order.
pub fn editor_buttons() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec {
            id: SINGLE_LINE_SUMMARY_ID,
            label: "Fill time",
            action: ButtonAction::FillTimesheet,
        },
        ButtonSpec {
            id: THIRD_STRIKE_ID,
            label: "3rd Strike",
            action: ButtonAction::ApplyTemplate(TemplateKind::ThirdStrike),
        },
        ButtonSpec {
            id: SECOND_STRIKE_ID,
            label: "2nd Strike",
            action: ButtonAction::ApplyTemplate(TemplateKind::SecondStrike),
        },
        ButtonSpec {
            id: CLOSURE_ID,
            label: "Closure",
            action: ButtonAction::ApplyTemplate(TemplateKind::Closure),
        },
    ]
}

/// The action behind a button id, if it is one of ours.
pub fn action_for(id: &str) -> Option<ButtonAction> {
    std::iter::once(extract_button())
        .chain(editor_buttons())
        .find(|button| button.id == id)
        .map(|button| button.action)
}
