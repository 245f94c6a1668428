//! Tag Pills Component
//!
//! Row of small rounded labels (card tags, side-project stacks).
//! Display only; order is preserved and duplicates are shown twice.

use dioxus::prelude::*;

/// Properties for the TagPills component
#[derive(Clone, PartialEq, Props)]
pub struct TagPillsProps {
    /// Labels in display order
    pub tags: Vec<String>,
    /// Optional extra class on the row
    #[props(default)]
    pub class: Option<String>,
}

/// Displays a wrapping row of tag pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagPills { tags: vec!["Rust".to_string(), "Dioxus".to_string()] }
/// }
/// ```
#[component]
pub fn TagPills(props: TagPillsProps) -> Element {
    let class = super::button::join_classes("tag-pills", props.class.as_deref());
    let keys = pill_keys(&props.tags);

    rsx! {
        div { class: "{class}",
            for (key, tag) in keys.into_iter().zip(props.tags.iter()) {
                span { key: "{key}", class: "tag-pill", "{tag}" }
            }
        }
    }
}

/// Keys for the pills; prefixed with the index since labels may repeat
pub fn pill_keys(tags: &[String]) -> Vec<String> {
    tags.iter()
        .enumerate()
        .map(|(i, tag)| format!("{}-{}", i, tag))
        .collect()
}
