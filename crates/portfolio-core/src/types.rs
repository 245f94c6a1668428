//! Core types for the portfolio catalog

pub mod card;
pub mod side_project;
pub mod site;

pub use card::{CardRecord, CardTarget};
pub use side_project::SideProjectRecord;
pub use site::{DemoContent, DemoLink, PageMeta, SiteInfo};

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseModalKeyError;

/// Identifier of a modal overlay.
///
/// Closed set: adding an overlay means adding a variant here, and every
/// `match` on it has to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKey {
    /// Side-project list
    Side,
    /// Casino bot demo video
    Casino,
    /// PunchPredictor demo video
    Punch,
}

impl ModalKey {
    /// Every modal key, in declaration order
    pub const ALL: [ModalKey; 3] = [ModalKey::Side, ModalKey::Casino, ModalKey::Punch];

    /// Lowercase identifier used in catalogs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKey::Side => "side",
            ModalKey::Casino => "casino",
            ModalKey::Punch => "punch",
        }
    }

    /// Whether this overlay shows a demo video (everything except `side`)
    pub fn is_demo(&self) -> bool {
        match self {
            ModalKey::Side => false,
            ModalKey::Casino | ModalKey::Punch => true,
        }
    }
}

impl fmt::Display for ModalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalKey {
    type Err = ParseModalKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseModalKeyError(s.to_string()))
    }
}

/// A link that opens in a new viewing context.
///
/// Every externally targeted navigation goes through this type so the
/// isolation attributes (`noopener noreferrer`) can't be forgotten.
/// Deserializes from a plain URL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct ExternalLink {
    href: String,
}

impl ExternalLink {
    /// Browsing-context target for external links
    pub const TARGET: &'static str = "_blank";
    /// Link relation: no back-reference to the opener, no referrer
    pub const REL: &'static str = "noopener noreferrer";

    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> &'static str {
        Self::TARGET
    }

    pub fn rel(&self) -> &'static str {
        Self::REL
    }
}

impl From<String> for ExternalLink {
    fn from(href: String) -> Self {
        Self { href }
    }
}

impl From<&str> for ExternalLink {
    fn from(href: &str) -> Self {
        Self::new(href)
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

impl Serialize for ExternalLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut link = serializer.serialize_struct("ExternalLink", 3)?;
        link.serialize_field("href", &self.href)?;
        link.serialize_field("target", Self::TARGET)?;
        link.serialize_field("rel", Self::REL)?;
        link.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_key_parses_lowercase_ids() {
        assert_eq!("side".parse::<ModalKey>(), Ok(ModalKey::Side));
        assert_eq!("casino".parse::<ModalKey>(), Ok(ModalKey::Casino));
        assert_eq!("punch".parse::<ModalKey>(), Ok(ModalKey::Punch));
    }

    #[test]
    fn modal_key_rejects_unknown_ids() {
        let err = "Casino".parse::<ModalKey>().unwrap_err();
        assert_eq!(err, ParseModalKeyError("Casino".to_string()));
        assert!("".parse::<ModalKey>().is_err());
    }

    #[test]
    fn only_side_is_not_a_demo() {
        assert!(!ModalKey::Side.is_demo());
        assert!(ModalKey::Casino.is_demo());
        assert!(ModalKey::Punch.is_demo());
    }

    #[test]
    fn external_link_serializes_isolation_attributes() {
        let link = ExternalLink::new("https://punchpredictor.com");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["href"], "https://punchpredictor.com");
        assert_eq!(json["target"], "_blank");
        assert_eq!(json["rel"], "noopener noreferrer");
    }

    #[test]
    fn external_link_deserializes_from_string() {
        let link: ExternalLink = serde_json::from_str("\"https://example.com\"").unwrap();
        assert_eq!(link.href(), "https://example.com");
        assert_eq!(link.rel(), "noopener noreferrer");
    }
}
