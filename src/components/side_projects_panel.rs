//! Side-project list shown inside the `side` overlay.

use dioxus::prelude::*;
use portfolio_core::SideProjectRecord;
use portfolio_ui::{ExternalAnchor, TagPills};

#[component]
pub fn SideProjectsPanel(heading: String, items: Vec<SideProjectRecord>) -> Element {
    rsx! {
        h2 { class: "modal-title", "{heading}" }

        ul { class: "side-projects",
            // titles may repeat; the index keeps keys distinct
            for (i, project) in items.iter().enumerate() {
                li { key: "{i}-{project.title}", class: "side-project",
                    if let Some(link) = project.link.clone() {
                        ExternalAnchor {
                            link,
                            class: "side-project__title side-project__title--link".to_string(),
                            "{project.title}"
                        }
                    } else {
                        h3 { class: "side-project__title", "{project.title}" }
                    }

                    p { class: "side-project__blurb", "{project.blurb}" }
                    TagPills { tags: project.stack.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twins() -> Element {
        rsx! {
            SideProjectsPanel {
                heading: "Misc".to_string(),
                items: vec![
                    SideProjectRecord::new("Twin", "first twin"),
                    SideProjectRecord::new("Twin", "second twin"),
                ],
            }
        }
    }

    #[test]
    fn duplicate_titles_render_every_item() {
        let mut dom = VirtualDom::new(twins);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches(r#"class="side-project""#).count(), 2);
        assert!(html.contains("first twin"));
        assert!(html.contains("second twin"));
    }
}
