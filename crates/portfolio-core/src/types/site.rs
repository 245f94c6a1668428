//! Site-wide content: hero, metadata, footer and demo overlays

use serde::{Deserialize, Serialize};

use super::ExternalLink;

/// Document title and description handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Hero and footer content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Owner name, shown as the hero heading and in the footer
    pub owner: String,
    pub tagline: String,
    /// Contact link, usually `mailto:`; navigates in place
    pub contact: String,
    /// Résumé document, opened in a new context
    #[serde(default)]
    pub resume: Option<ExternalLink>,
    #[serde(default)]
    pub footer_credit: String,
    pub meta: PageMeta,
}

/// Content of a demo-video overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoContent {
    pub heading: String,
    /// Video asset path; playback is left to the host
    pub video: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub link: Option<DemoLink>,
}

/// Call-to-action link under a demo video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoLink {
    pub label: String,
    pub href: ExternalLink,
}
