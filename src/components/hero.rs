//! Hero header: name, tagline, contact and résumé.

use dioxus::prelude::*;
use portfolio_core::HeroView;
use portfolio_ui::{ButtonVariant, ExternalAnchor};

#[component]
pub fn Hero(hero: HeroView) -> Element {
    rsx! {
        header { class: "hero",
            h1 { class: "page-title", "{hero.name}" }
            p { class: "tagline", "{hero.tagline}" }

            div { class: "hero-actions",
                // mailto navigates in place
                a {
                    class: ButtonVariant::Solid.class(),
                    href: "{hero.contact_href}",
                    "Contact me"
                }

                if let Some(resume) = hero.resume.clone() {
                    ExternalAnchor {
                        link: resume,
                        class: ButtonVariant::Outline.class().to_string(),
                        "Résumé"
                    }
                }
            }
        }
    }
}
