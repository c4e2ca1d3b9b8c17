use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use helpdesk_core::comments::dto::CommentBlock;
use helpdesk_core::page::{ButtonBar, Region};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotButton {
    pub bar: ButtonBar,
    pub id: String,
    pub label: String,
    pub class: String,
}

/// The parts of a ticket page the assistant reads or changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSnapshot {
    /// `None` when the comment container is not on the page.
    pub comments: Option<Vec<CommentBlock>>,
    /// Input values and label texts by element id.
    pub fields: BTreeMap<String, String>,
    /// Rich-text editor content, `None` while the editor is closed.
    pub editor: Option<String>,
    pub dialog_open: bool,
    pub elements: BTreeSet<String>,
    pub buttons: Vec<SnapshotButton>,
    pub panel: Option<String>,
    pub regions: HashMap<Region, String>,
    pub notifications: Vec<String>,
}
