//! Home page - the whole portfolio.
//!
//! Hero, featured-work grid, footer, and the overlay for whichever modal
//! is open.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::render;

use crate::components::{Hero, ModalOverlay, ProjectCard};
use crate::context::{use_catalog, use_view};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let view = use_view();

    let page = render(&catalog, &view.read());
    let year = chrono::Local::now().year();
    let footer = page.footer.text(year);

    rsx! {
        div { class: "page",
            Hero { hero: page.hero.clone() }

            main { class: "projects",
                h2 { class: "section-header", "Featured Work" }

                ul { class: "project-grid",
                    for card in page.cards.iter() {
                        ProjectCard { key: "{card.title}", card: card.clone() }
                    }
                }
            }

            footer { class: "site-footer", "{footer}" }
        }

        if let Some(overlay) = page.overlay {
            ModalOverlay { overlay }
        }
    }
}
