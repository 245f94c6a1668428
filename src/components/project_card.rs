//! Project Card Component
//!
//! One tile in the featured-work grid. Modal cards render as a button that
//! opens their overlay; link cards render as an isolated external link.

use dioxus::prelude::*;
use portfolio_core::{CardTrigger, CardView};
use portfolio_ui::{Button, ButtonVariant, ExternalAnchor, TagPills};

use crate::context::use_view;

/// Grid tile for a catalog card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for card in page.cards.iter() {
///         ProjectCard { key: "{card.title}", card: card.clone() }
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(card: CardView) -> Element {
    let mut view = use_view();

    let trigger = match card.trigger.clone() {
        CardTrigger::Modal { key } => rsx! {
            Button {
                variant: ButtonVariant::Bare,
                class: "project-card__trigger".to_string(),
                onclick: move |_| view.write().open(key),
                CardBody { card: card.clone() }
            }
        },
        CardTrigger::Link { link } => rsx! {
            ExternalAnchor {
                link,
                class: "project-card__trigger".to_string(),
                CardBody { card: card.clone() }
            }
        },
    };

    rsx! {
        li { class: "project-card", {trigger} }
    }
}

#[component]
fn CardBody(card: CardView) -> Element {
    rsx! {
        div { class: "project-card__media",
            img {
                class: "project-card__img",
                src: "{card.image}",
                alt: "{card.title}",
            }
        }

        div { class: "project-card__body",
            h3 { class: "project-card__title", "{card.title}" }
            p { class: "project-card__description", "{card.description}" }
            TagPills { tags: card.tags.clone() }
        }
    }
}
