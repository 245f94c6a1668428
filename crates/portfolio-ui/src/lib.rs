//! Portfolio UI Components
//!
//! Dioxus building blocks shared by the portfolio page: buttons, tag pills
//! and isolated external links.
//!
//! ## Look
//!
//! - Light surface fading to slate, dark variant via `prefers-color-scheme`
//! - Rounded pills for tags and calls to action
//! - Translucent cards with a soft shadow that deepens on hover

pub mod components;

pub use components::*;
