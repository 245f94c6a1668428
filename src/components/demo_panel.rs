//! Demo Panel Component
//!
//! Demo video with caption and an optional call-to-action link. Playback is
//! fire-and-forget: the webview loads and plays the asset, and nothing here
//! observes completion or errors.

use dioxus::prelude::*;
use portfolio_core::DemoLink;
use portfolio_ui::ExternalAnchor;

#[component]
pub fn DemoPanel(
    heading: String,
    /// Video asset path; `None` when the catalog has no demo content
    video_src: Option<String>,
    caption: String,
    link: Option<DemoLink>,
) -> Element {
    rsx! {
        h2 { class: "modal-title", "{heading}" }

        if let Some(src) = video_src {
            video {
                class: "demo-video",
                src: "{src}",
                controls: true,
                autoplay: true,
                muted: true,
            }
        } else {
            p { class: "demo-missing", "Demo unavailable" }
        }

        if !caption.is_empty() {
            p { class: "demo-caption", "{caption}" }
        }

        if let Some(link) = link {
            ExternalAnchor {
                link: link.href.clone(),
                class: "demo-link".to_string(),
                "{link.label}"
            }
        }
    }
}
