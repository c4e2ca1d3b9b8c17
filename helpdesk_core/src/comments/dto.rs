use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    CustomerFacing,
    Internal,
    WorkNote,
}

impl Visibility {
    /// Maps the bracketed legend marker. Anything unrecognised is customer facing.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("IO") => Visibility::Internal,
            Some("WN") => Visibility::WorkNote,
            _ => Visibility::CustomerFacing,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::CustomerFacing => write!(f, "Customer facing"),
            Visibility::Internal => write!(f, "Internal"),
            Visibility::WorkNote => write!(f, "Work note"),
        }
    }
}

/// What a legend yields once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Legend {
    pub author: String,
    pub date: Option<NaiveDateTime>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentRecord {
    pub date: Option<NaiveDateTime>,
    pub author: String,
    pub visibility: Visibility,
    pub content: String,
}

impl CommentRecord {
    pub fn is_customer_facing(&self) -> bool {
        self.visibility == Visibility::CustomerFacing
    }
}

/// Raw comment block as found on the page. Either part may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentBlock {
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl CommentBlock {
    pub fn new(legend: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            legend: Some(legend.into()),
            body: Some(body.into()),
        }
    }
}
