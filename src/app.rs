use dioxus::prelude::*;
use portfolio_core::{Catalog, ViewState};

use crate::context::get_catalog;
use crate::pages::Home;
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, document metadata, and the catalog and view
/// state contexts.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(get_catalog);
    let palette = use_hook(palette_css);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        if let Some(catalog) = catalog {
            Portfolio { catalog }
        } else {
            p { class: "load-error", "No catalog loaded" }
        }
    }
}

/// Page shell with contexts in place
#[component]
fn Portfolio(catalog: Catalog) -> Element {
    let view: Signal<ViewState> = use_signal(ViewState::new);
    let meta = catalog.meta().clone();

    use_context_provider(|| catalog.clone());
    use_context_provider(|| view);

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        Home {}
    }
}
