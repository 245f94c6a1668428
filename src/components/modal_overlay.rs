//! Modal Overlay Component
//!
//! Scrim plus content panel for the open modal. The scrim closes the modal;
//! the panel stops click propagation so nothing inside it reaches the scrim.

use dioxus::prelude::*;
use portfolio_core::{OverlayClick, OverlayView};
use portfolio_ui::CloseButton;

use crate::components::{DemoPanel, SideProjectsPanel};
use crate::context::use_view;

/// Overlay for the open modal
///
/// Rendered only while a modal is open. Escape acts like the close button.
#[component]
pub fn ModalOverlay(overlay: OverlayView) -> Element {
    let mut view = use_view();

    let heading = overlay.heading().to_string();
    let panel_class = match &overlay {
        OverlayView::SideProjects { .. } => "modal-panel",
        OverlayView::Demo { .. } => "modal-panel modal-panel--wide",
    };

    let body = match overlay.clone() {
        OverlayView::SideProjects { heading, items } => rsx! {
            SideProjectsPanel { heading, items }
        },
        OverlayView::Demo {
            heading,
            video,
            caption,
            link,
            ..
        } => rsx! {
            DemoPanel { heading, video_src: video, caption, link }
        },
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onmounted: move |e| async move {
                // Escape only reaches the overlay while it has focus
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!("could not focus modal overlay: {:?}", err);
                }
            },
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    view.write().click_overlay(OverlayClick::CloseControl);
                }
            },
            onclick: move |_| {
                view.write().click_overlay(OverlayClick::Scrim);
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{heading}",
                onclick: move |e| e.stop_propagation(),

                {body}

                CloseButton {
                    onclick: move |_| {
                        view.write().click_overlay(OverlayClick::CloseControl);
                    }
                }
            }
        }
    }
}
