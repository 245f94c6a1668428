//! Side-project detail records

use serde::{Deserialize, Serialize};

use super::ExternalLink;

/// One entry in the side-project overlay.
///
/// Without a link the title renders as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideProjectRecord {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    /// Technology labels in display order
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, rename = "href")]
    pub link: Option<ExternalLink>,
}

impl SideProjectRecord {
    pub fn new(title: impl Into<String>, blurb: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blurb: blurb.into(),
            stack: Vec::new(),
            link: None,
        }
    }
}
