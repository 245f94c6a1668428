//! Click steps for `portfolio render`.

use std::str::FromStr;

use portfolio_core::{ModalKey, OverlayClick};

/// One visitor interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Click the card with this title
    Card(String),
    /// Open a modal directly
    Open(ModalKey),
    /// Click somewhere on the open overlay
    Overlay(OverlayClick),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(title) = s.strip_prefix("card:") {
            return Ok(Step::Card(title.to_string()));
        }
        if let Some(key) = s.strip_prefix("open:") {
            return key.parse().map(Step::Open).map_err(|e| e.to_string());
        }

        match s {
            "scrim" => Ok(Step::Overlay(OverlayClick::Scrim)),
            "panel" => Ok(Step::Overlay(OverlayClick::Panel)),
            "close" => Ok(Step::Overlay(OverlayClick::CloseControl)),
            other => Err(format!(
                "Unknown step '{}' (expected card:<title>, open:<modal>, scrim, panel or close)",
                other
            )),
        }
    }
}
