//! Property-based tests for the modal state machine
//!
//! Uses proptest to check the view controller's invariants over arbitrary
//! click sequences.

use proptest::prelude::*;
use portfolio_core::{
    render, Catalog, CardAction, CardRecord, ModalKey, OverlayClick, ViewState,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn modal_key_strategy() -> impl Strategy<Value = ModalKey> {
    prop::sample::select(ModalKey::ALL.to_vec())
}

fn overlay_click_strategy() -> impl Strategy<Value = OverlayClick> {
    prop::sample::select(vec![
        OverlayClick::Scrim,
        OverlayClick::Panel,
        OverlayClick::CloseControl,
    ])
}

/// User events on the page
#[derive(Debug, Clone)]
enum Event {
    ClickCard(usize), // Index into the catalog's cards
    ClickOverlay(OverlayClick),
    Open(ModalKey),
    Close,
}

fn events_strategy(max_events: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..10usize).prop_map(Event::ClickCard),
            2 => overlay_click_strategy().prop_map(Event::ClickOverlay),
            1 => modal_key_strategy().prop_map(Event::Open),
            1 => Just(Event::Close),
        ],
        0..max_events,
    )
}

/// Builtin cards plus a link card, so both dispatch kinds are exercised
fn catalog() -> Catalog {
    let builtin = Catalog::builtin().expect("builtin catalog");
    let mut cards = builtin.cards().to_vec();
    cards.push(CardRecord::with_link("Blog", "https://blog.example"));
    let demos = builtin.demos().map(|(k, d)| (k, d.clone())).collect();

    Catalog::new(
        builtin.site().clone(),
        cards,
        builtin.side_projects().to_vec(),
        demos,
    )
    .expect("valid catalog")
}

fn apply(state: &mut ViewState, catalog: &Catalog, event: &Event) {
    match event {
        Event::ClickCard(i) => {
            let cards = catalog.cards();
            state.click_card(&cards[i % cards.len()]);
        }
        Event::ClickOverlay(origin) => {
            state.click_overlay(*origin);
        }
        Event::Open(key) => state.open(*key),
        Event::Close => state.close(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly one overlay is rendered iff a modal is open, and it is that modal
    #[test]
    fn at_most_one_overlay(events in events_strategy(40)) {
        let catalog = catalog();
        let mut state = ViewState::new();

        for event in &events {
            apply(&mut state, &catalog, event);
            let view = render(&catalog, &state);
            prop_assert_eq!(view.overlay.as_ref().map(|o| o.key()), state.open_modal());
        }
    }

    /// A modal card click always lands on exactly that card's modal
    #[test]
    fn modal_card_sets_its_key(events in events_strategy(20), index in 0..10usize) {
        let catalog = catalog();
        let mut state = ViewState::new();
        for event in &events {
            apply(&mut state, &catalog, event);
        }

        let card = &catalog.cards()[index % catalog.cards().len()];
        let before = state;
        let action = state.click_card(card);

        match card.modal() {
            Some(key) => {
                prop_assert_eq!(action, CardAction::OpenedModal(key));
                prop_assert_eq!(state.open_modal(), Some(key));
            }
            None => {
                prop_assert!(matches!(action, CardAction::Navigate(_)));
                prop_assert_eq!(state, before);
            }
        }
    }

    /// Panel clicks never change the state
    #[test]
    fn panel_clicks_are_contained(key in modal_key_strategy(), clicks in 1..10usize) {
        let mut state = ViewState::new();
        state.open(key);
        for _ in 0..clicks {
            prop_assert!(!state.click_overlay(OverlayClick::Panel));
        }
        prop_assert_eq!(state.open_modal(), Some(key));
    }

    /// Close from any open state ends closed
    #[test]
    fn close_always_ends_closed(key in modal_key_strategy()) {
        let mut state = ViewState::new();
        state.open(key);
        state.close();
        prop_assert_eq!(state.open_modal(), None);
    }

    /// Opening is idempotent
    #[test]
    fn open_twice_equals_once(events in events_strategy(20), key in modal_key_strategy()) {
        let catalog = catalog();
        let mut state = ViewState::new();
        for event in &events {
            apply(&mut state, &catalog, event);
        }

        let mut once = state;
        once.open(key);
        let mut twice = state;
        twice.open(key);
        twice.open(key);
        prop_assert_eq!(once, twice);
    }

    /// Rendering depends only on catalog and state
    #[test]
    fn render_is_deterministic(events in events_strategy(20)) {
        let catalog = catalog();
        let mut state = ViewState::new();
        for event in &events {
            apply(&mut state, &catalog, event);
        }
        prop_assert_eq!(render(&catalog, &state), render(&catalog, &state));
    }
}
