//! Button Components
//!
//! Pill-shaped buttons:
//! - Solid: filled, used for primary calls to action and "Close"
//! - Outline: bordered, used for secondary actions
//! - Bare: unstyled wrapper, used when a whole card is the trigger

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled pill
    #[default]
    Solid,
    /// Bordered pill
    Outline,
    /// No chrome; content provides the look
    Bare,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Bare => "btn-bare",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Solid,
///         onclick: move |_| view.write().close(),
///         "Close"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button for overlays
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Solid,
            class: "close-btn".to_string(),
            onclick: move |_| onclick.call(()),
            "Close"
        }
    }
}

pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Solid.class(), "btn-solid");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Bare.class(), "btn-bare");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-solid", None), "btn-solid");
        assert_eq!(join_classes("btn-solid", Some("")), "btn-solid");
        assert_eq!(join_classes("btn-solid", Some("wide")), "btn-solid wide");
    }
}
