//! Pure view model: what the page shows for a given catalog and state.

use serde::Serialize;

use super::ViewState;
use crate::catalog::Catalog;
use crate::types::{CardTarget, DemoLink, ExternalLink, ModalKey, PageMeta, SideProjectRecord};

/// Heading for the side-project overlay when no card names it
const SIDE_PROJECTS_HEADING: &str = "Side Projects";

/// Everything on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub meta: PageMeta,
    pub hero: HeroView,
    pub cards: Vec<CardView>,
    /// Present iff a modal is open
    pub overlay: Option<OverlayView>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub name: String,
    pub tagline: String,
    pub contact_href: String,
    pub resume: Option<ExternalLink>,
}

/// One grid card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub trigger: CardTrigger,
}

/// How a card reacts to a click
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardTrigger {
    /// A button that opens the overlay
    Modal { key: ModalKey },
    /// A wrapper link opened in a new context
    Link { link: ExternalLink },
}

/// The single open overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayView {
    SideProjects {
        heading: String,
        items: Vec<SideProjectRecord>,
    },
    Demo {
        key: ModalKey,
        heading: String,
        /// Absent when the catalog has no content for this key
        video: Option<String>,
        caption: String,
        link: Option<DemoLink>,
    },
}

impl OverlayView {
    pub fn key(&self) -> ModalKey {
        match self {
            OverlayView::SideProjects { .. } => ModalKey::Side,
            OverlayView::Demo { key, .. } => *key,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            OverlayView::SideProjects { heading, .. } | OverlayView::Demo { heading, .. } => {
                heading
            }
        }
    }
}

/// Footer parts; the year is filled in by the host clock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub owner: String,
    pub credit: String,
}

impl FooterView {
    pub fn text(&self, year: i32) -> String {
        if self.credit.is_empty() {
            format!("© {} {}", year, self.owner)
        } else {
            format!("© {} {} • {}", year, self.owner, self.credit)
        }
    }
}

/// Render the page for `state`.
///
/// Deterministic: the same catalog and state always give the same view.
pub fn render(catalog: &Catalog, state: &ViewState) -> PageView {
    let site = catalog.site();

    let cards = catalog
        .cards()
        .iter()
        .map(|card| CardView {
            title: card.title.clone(),
            description: card.description.clone(),
            image: card.image.clone(),
            tags: card.tags.clone(),
            trigger: match &card.target {
                CardTarget::Modal { key } => CardTrigger::Modal { key: *key },
                CardTarget::Link { link } => CardTrigger::Link { link: link.clone() },
            },
        })
        .collect();

    PageView {
        meta: site.meta.clone(),
        hero: HeroView {
            name: site.owner.clone(),
            tagline: site.tagline.clone(),
            contact_href: site.contact.clone(),
            resume: site.resume.clone(),
        },
        cards,
        overlay: state.open_modal().map(|key| render_overlay(catalog, key)),
        footer: FooterView {
            owner: site.owner.clone(),
            credit: site.footer_credit.clone(),
        },
    }
}

fn render_overlay(catalog: &Catalog, key: ModalKey) -> OverlayView {
    match key {
        ModalKey::Side => OverlayView::SideProjects {
            heading: catalog
                .card_for_modal(key)
                .map(|card| card.title.clone())
                .unwrap_or_else(|| SIDE_PROJECTS_HEADING.to_string()),
            items: catalog.side_projects().to_vec(),
        },
        ModalKey::Casino | ModalKey::Punch => match catalog.demo(key) {
            Some(demo) => OverlayView::Demo {
                key,
                heading: demo.heading.clone(),
                video: Some(demo.video.clone()),
                caption: demo.caption.clone(),
                link: demo.link.clone(),
            },
            None => OverlayView::Demo {
                key,
                heading: catalog
                    .card_for_modal(key)
                    .map(|card| card.title.clone())
                    .unwrap_or_else(|| key.to_string()),
                video: None,
                caption: String::new(),
                link: None,
            },
        },
    }
}
