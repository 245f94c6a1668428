//! Featured-work card records

use serde::{Deserialize, Serialize};

use super::{ExternalLink, ModalKey};

/// Where a card goes when clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardTarget {
    /// Opens the link in a new viewing context
    Link { link: ExternalLink },
    /// Opens the named overlay
    Modal { key: ModalKey },
}

impl CardTarget {
    /// The overlay this target opens, if any
    pub fn modal(&self) -> Option<ModalKey> {
        match self {
            CardTarget::Modal { key } => Some(*key),
            CardTarget::Link { .. } => None,
        }
    }
}

/// One entry in the featured-work grid.
///
/// `title` is the card identity and is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CardToml")]
pub struct CardRecord {
    pub title: String,
    pub description: String,
    /// Static image asset path
    pub image: String,
    /// Labels in display order; duplicates allowed
    pub tags: Vec<String>,
    pub target: CardTarget,
}

/// On-disk card shape: both `href` and `modal` are optional
#[derive(Deserialize)]
struct CardToml {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    modal: Option<ModalKey>,
}

impl From<CardToml> for CardRecord {
    fn from(raw: CardToml) -> Self {
        // modal wins over href; a card with neither links to "#"
        let target = match (raw.modal, raw.href) {
            (Some(key), _) => CardTarget::Modal { key },
            (None, Some(href)) => CardTarget::Link {
                link: ExternalLink::new(href),
            },
            (None, None) => CardTarget::Link {
                link: ExternalLink::new("#"),
            },
        };

        Self {
            title: raw.title,
            description: raw.description,
            image: raw.image,
            tags: raw.tags,
            target,
        }
    }
}

impl CardRecord {
    /// Card that opens an overlay
    pub fn with_modal(title: impl Into<String>, key: ModalKey) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            target: CardTarget::Modal { key },
        }
    }

    /// Card that links out
    pub fn with_link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            target: CardTarget::Link {
                link: ExternalLink::new(href),
            },
        }
    }

    pub fn modal(&self) -> Option<ModalKey> {
        self.target.modal()
    }
}
