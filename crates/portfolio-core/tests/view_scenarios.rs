//! End-to-end scenarios for the portfolio page
//!
//! Drives the view controller the way a visitor would and checks the
//! rendered view after each step.

use portfolio_core::{
    Catalog, CardAction, CardTrigger, ModalKey, OverlayClick, OverlayView, ViewController,
};

fn controller() -> ViewController {
    ViewController::new(Catalog::builtin().expect("builtin catalog"))
}

#[test]
fn test_visitor_walkthrough() {
    let mut view = controller();

    // Initial render: nothing open
    assert_eq!(view.state().open_modal(), None);
    assert!(view.render().overlay.is_none());

    // Casino card opens the casino demo
    let action = view.click_card_titled("Casino Automation Bots");
    assert_eq!(action, Some(CardAction::OpenedModal(ModalKey::Casino)));
    assert_eq!(view.state().open_modal(), Some(ModalKey::Casino));
    match view.render().overlay {
        Some(OverlayView::Demo { key, video, .. }) => {
            assert_eq!(key, ModalKey::Casino);
            assert_eq!(video.as_deref(), Some("/sweeps_bot.mp4"));
        }
        other => panic!("expected casino demo, got {:?}", other),
    }

    // Scrim click closes it
    assert!(view.click_overlay(OverlayClick::Scrim));
    assert_eq!(view.state().open_modal(), None);
    assert!(view.render().overlay.is_none());

    // Side projects card lists every side project in order
    view.click_card_titled("Misc Side Projects");
    assert_eq!(view.state().open_modal(), Some(ModalKey::Side));
    match view.render().overlay {
        Some(OverlayView::SideProjects { heading, items }) => {
            assert_eq!(heading, "Misc Side Projects");
            let titles: Vec<&str> = items.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(
                titles,
                vec![
                    "AI‑Generated Wild West Story Game",
                    "Auto MCQ Solver",
                    "Movie Booking System",
                ]
            );
            assert_eq!(items[0].stack, vec!["JavaScript", "HTML/CSS", "OpenAI API"]);
            assert_eq!(
                items[2].blurb,
                "Fully‑functional class project letting users reserve seats and pay via Stripe checkout; built with Next.js."
            );
        }
        other => panic!("expected side projects, got {:?}", other),
    }
}

#[test]
fn test_click_on_stack_tag_keeps_side_open() {
    let mut view = controller();
    view.click_card_titled("Misc Side Projects");

    assert!(!view.click_overlay(OverlayClick::Panel));
    assert_eq!(view.state().open_modal(), Some(ModalKey::Side));
}

#[test]
fn test_close_control_closes_every_modal() {
    for key in ModalKey::ALL {
        let mut view = controller();
        view.open_modal(key);
        assert!(view.click_overlay(OverlayClick::CloseControl));
        assert_eq!(view.state().open_modal(), None);
    }
}

#[test]
fn test_link_card_leaves_state_alone() {
    let src = r#"
        [site]
        owner = "Ada"
        tagline = "Builds things"
        contact = "mailto:ada@example.com"

        [site.meta]
        title = "Ada | Portfolio"
        description = "Ada's work"

        [[cards]]
        title = "Blog"
        href = "https://blog.example"

        [[cards]]
        title = "Loom"
        modal = "side"

        [[side_projects]]
        title = "Loom"
        blurb = "Pattern tooling"
    "#;
    let mut view = ViewController::new(Catalog::from_toml_str(src).unwrap());

    let action = view.click_card_titled("Blog").unwrap();
    match action {
        CardAction::Navigate(link) => {
            assert_eq!(link.href(), "https://blog.example");
            assert_eq!(link.target(), "_blank");
            assert_eq!(link.rel(), "noopener noreferrer");
        }
        other => panic!("expected navigation, got {:?}", other),
    }
    assert_eq!(view.state().open_modal(), None);

    let page = view.render();
    assert!(matches!(page.cards[0].trigger, CardTrigger::Link { .. }));
    assert!(matches!(
        page.cards[1].trigger,
        CardTrigger::Modal { key: ModalKey::Side }
    ));
}
