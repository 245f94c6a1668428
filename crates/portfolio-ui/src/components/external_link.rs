//! External Link Component
//!
//! Anchor that opens in a new viewing context with `noopener noreferrer`.
//! Every off-page link in the app goes through here.

use dioxus::prelude::*;
use portfolio_core::ExternalLink;

use super::button::join_classes;

/// Properties for the ExternalAnchor component
#[derive(Clone, PartialEq, Props)]
pub struct ExternalAnchorProps {
    /// Link destination
    pub link: ExternalLink,
    /// Anchor content
    pub children: Element,
    /// Optional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Isolated external link
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ExternalAnchor {
///         link: ExternalLink::new("https://punchpredictor.com"),
///         "Visit PunchPredictor.com ↗"
///     }
/// }
/// ```
#[component]
pub fn ExternalAnchor(props: ExternalAnchorProps) -> Element {
    let class = join_classes("external-link", props.class.as_deref());
    let href = props.link.href().to_string();
    let link = props.link.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: ExternalLink::TARGET,
            rel: ExternalLink::REL,
            onclick: move |e| {
                // links inside an overlay panel must not reach the scrim
                e.stop_propagation();
                tracing::debug!(href = %link, "opening external link");
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_html(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn anchor_opens_in_isolated_context() {
        fn app() -> Element {
            rsx! {
                ExternalAnchor {
                    link: ExternalLink::new("https://punchpredictor.com"),
                    "Visit"
                }
            }
        }

        let html = render_html(app);
        assert!(html.contains(r#"href="https://punchpredictor.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("Visit"));
    }

    #[test]
    fn anchor_keeps_extra_classes() {
        fn app() -> Element {
            rsx! {
                ExternalAnchor {
                    link: ExternalLink::new("/Resume 2025.pdf"),
                    class: "btn-outline".to_string(),
                    "Résumé"
                }
            }
        }

        let html = render_html(app);
        assert!(html.contains(r#"class="external-link btn-outline""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }
}
