//! Context providers for the portfolio page.
//!
//! Two values are shared through `use_context`:
//!
//! - the [`Catalog`], read-only for the life of the page
//! - the [`ViewState`] signal, the only mutable state
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let mut view = use_view();
//!
//! view.write().open(ModalKey::Side);
//! ```

use dioxus::prelude::*;
use portfolio_core::{Catalog, ViewState};

/// Get the catalog chosen at start-up.
pub fn get_catalog() -> Option<Catalog> {
    crate::get_catalog()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

/// Hook to access the view state.
///
/// Writes go through [`ViewState`]'s transition methods; every write
/// re-renders the page.
pub fn use_view() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}
