//! Portfolio Core Library
//!
//! Content catalog and view controller for a single-page portfolio.
//!
//! ## Overview
//!
//! The page is a hero section, a grid of project cards and at most one modal
//! overlay. Cards either link out or open an overlay (the side-project list,
//! or a demo video). Everything shown comes from a [`Catalog`] loaded once at
//! start-up; the only runtime state is which overlay is open ([`ViewState`]).
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Catalog, ModalKey, ViewController};
//!
//! let catalog = Catalog::builtin().expect("embedded catalog is valid");
//! let mut view = ViewController::new(catalog);
//!
//! assert!(view.render().overlay.is_none());
//!
//! view.click_card_titled("Casino Automation Bots");
//! assert_eq!(view.state().open_modal(), Some(ModalKey::Casino));
//! assert!(view.render().overlay.is_some());
//! ```

pub mod catalog;
pub mod error;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::{user_catalog_path, Catalog, DEFAULT_CATALOG};
pub use error::{CatalogError, Result};
pub use types::*;
pub use view::{
    render, CardAction, CardTrigger, CardView, FooterView, HeroView, OverlayClick, OverlayView,
    PageView, ViewController, ViewState,
};
