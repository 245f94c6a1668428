//! View controller: which overlay is open, and how clicks change that.
//!
//! ## State machine
//!
//! ```text
//!            card click (m)              close control / scrim
//!   None ───────────────────▶ Some(m) ───────────────────────▶ None
//!                               │  ▲
//!                               └──┘ card click (m'): plain assignment
//! ```
//!
//! Clicks inside an overlay's content panel never reach the scrim handler,
//! so they leave the state alone.

mod model;

pub use model::{
    render, CardTrigger, CardView, FooterView, HeroView, OverlayView, PageView,
};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::types::{CardRecord, CardTarget, ExternalLink, ModalKey};

/// The page's only mutable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    open_modal: Option<ModalKey>,
}

/// Where inside an open overlay a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed backdrop around the panel
    Scrim,
    /// Anywhere inside the content panel (text, tags, links, video)
    Panel,
    /// The explicit close button (or Escape)
    CloseControl,
}

/// Outcome of clicking a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// The overlay was opened
    OpenedModal(ModalKey),
    /// The host should open this link in a new context; state is unchanged
    Navigate(ExternalLink),
}

impl ViewState {
    /// Initial state: nothing open
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_modal(&self) -> Option<ModalKey> {
        self.open_modal
    }

    pub fn is_open(&self, key: ModalKey) -> bool {
        self.open_modal == Some(key)
    }

    /// Show `key`, replacing whatever was open
    pub fn open(&mut self, key: ModalKey) {
        tracing::debug!(from = ?self.open_modal, to = %key, "open modal");
        self.open_modal = Some(key);
    }

    /// Hide the overlay
    pub fn close(&mut self) {
        if let Some(key) = self.open_modal.take() {
            tracing::debug!(modal = %key, "close modal");
        }
    }

    /// Dispatch a card click
    pub fn click_card(&mut self, card: &CardRecord) -> CardAction {
        match &card.target {
            CardTarget::Modal { key } => {
                self.open(*key);
                CardAction::OpenedModal(*key)
            }
            CardTarget::Link { link } => {
                tracing::debug!(card = %card.title, href = %link, "navigate");
                CardAction::Navigate(link.clone())
            }
        }
    }

    /// Dispatch a click inside an open overlay.
    ///
    /// Returns true when the click closed the overlay.
    pub fn click_overlay(&mut self, origin: OverlayClick) -> bool {
        match origin {
            OverlayClick::Panel => false,
            OverlayClick::Scrim | OverlayClick::CloseControl => {
                let was_open = self.open_modal.is_some();
                self.close();
                was_open
            }
        }
    }
}

/// Catalog plus view state, for driving the page without a UI runtime
#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Catalog,
    state: ViewState,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn open_modal(&mut self, key: ModalKey) {
        self.state.open(key);
    }

    pub fn close_modal(&mut self) {
        self.state.close();
    }

    pub fn click_card(&mut self, card: &CardRecord) -> CardAction {
        self.state.click_card(card)
    }

    /// Click the card with this title; `None` if no such card exists
    pub fn click_card_titled(&mut self, title: &str) -> Option<CardAction> {
        let card = self.catalog.card(title)?;
        Some(self.state.click_card(card))
    }

    pub fn click_overlay(&mut self, origin: OverlayClick) -> bool {
        self.state.click_overlay(origin)
    }

    pub fn render(&self) -> PageView {
        render(&self.catalog, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewController {
        ViewController::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn starts_closed() {
        assert_eq!(ViewState::new().open_modal(), None);
        assert_eq!(controller().state().open_modal(), None);
    }

    #[test]
    fn open_is_idempotent() {
        let mut once = ViewState::new();
        once.open(ModalKey::Side);

        let mut twice = ViewState::new();
        twice.open(ModalKey::Side);
        twice.open(ModalKey::Side);

        assert_eq!(once, twice);
        assert!(twice.is_open(ModalKey::Side));
    }

    #[test]
    fn card_click_while_open_switches_directly() {
        let mut view = controller();
        view.click_card_titled("Casino Automation Bots");
        view.click_card_titled("PunchPredictor");
        assert_eq!(view.state().open_modal(), Some(ModalKey::Punch));
    }

    #[test]
    fn panel_click_is_contained() {
        let mut state = ViewState::new();
        state.open(ModalKey::Side);
        assert!(!state.click_overlay(OverlayClick::Panel));
        assert!(state.is_open(ModalKey::Side));
    }

    #[test]
    fn scrim_and_close_control_close() {
        for origin in [OverlayClick::Scrim, OverlayClick::CloseControl] {
            let mut state = ViewState::new();
            state.open(ModalKey::Casino);
            assert!(state.click_overlay(origin));
            assert_eq!(state.open_modal(), None);
        }
    }

    #[test]
    fn closing_when_closed_reports_no_change() {
        let mut state = ViewState::new();
        assert!(!state.click_overlay(OverlayClick::Scrim));
        assert_eq!(state.open_modal(), None);
    }

    #[test]
    fn link_card_navigates_without_state_change() {
        let mut state = ViewState::new();
        state.open(ModalKey::Casino);

        let card = CardRecord::with_link("Blog", "https://blog.example");
        let action = state.click_card(&card);

        assert_eq!(
            action,
            CardAction::Navigate(ExternalLink::new("https://blog.example"))
        );
        assert!(state.is_open(ModalKey::Casino));
    }

    #[test]
    fn unknown_title_is_ignored() {
        let mut view = controller();
        assert_eq!(view.click_card_titled("Nope"), None);
        assert_eq!(view.state().open_modal(), None);
    }
}
