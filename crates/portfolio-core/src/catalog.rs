//! Content catalog: the read-only data the page is rendered from.
//!
//! A catalog is loaded once at start-up, validated, and then shared
//! immutably. Cloning is cheap (the data sits behind an `Arc`).
//!
//! ## File format
//!
//! ```toml
//! [site]
//! owner = "Ada"
//! tagline = "Builds things"
//! contact = "mailto:ada@example.com"
//!
//! [site.meta]
//! title = "Ada | Portfolio"
//! description = "Ada's work"
//!
//! [[cards]]
//! title = "Engine"
//! image = "/engine.png"
//! tags = ["Rust"]
//! modal = "casino"        # or: href = "https://..."
//!
//! [[side_projects]]
//! title = "Loom"
//! blurb = "Pattern tooling"
//! stack = ["Rust"]
//!
//! [demos.casino]
//! heading = "Engine — Demo"
//! video = "/engine.mp4"
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{CardRecord, DemoContent, ModalKey, PageMeta, SideProjectRecord, SiteInfo};

/// Catalog compiled into the binary, used when no other catalog is given
pub const DEFAULT_CATALOG: &str = include_str!("../catalogs/default.toml");

#[derive(Deserialize)]
struct CatalogFile {
    site: SiteInfo,
    #[serde(default)]
    cards: Vec<CardRecord>,
    #[serde(default)]
    side_projects: Vec<SideProjectRecord>,
    #[serde(default)]
    demos: BTreeMap<String, DemoContent>,
}

#[derive(Debug, PartialEq)]
struct CatalogData {
    site: SiteInfo,
    cards: Vec<CardRecord>,
    side_projects: Vec<SideProjectRecord>,
    demos: BTreeMap<ModalKey, DemoContent>,
}

/// Validated, immutable portfolio content
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    inner: Arc<CatalogData>,
}

impl Catalog {
    /// Build a catalog from parts, validating cross references
    pub fn new(
        site: SiteInfo,
        cards: Vec<CardRecord>,
        side_projects: Vec<SideProjectRecord>,
        demos: BTreeMap<ModalKey, DemoContent>,
    ) -> Result<Self> {
        validate(&cards, &side_projects, &demos)?;

        Ok(Self {
            inner: Arc::new(CatalogData {
                site,
                cards,
                side_projects,
                demos,
            }),
        })
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src)?;

        let mut demos = BTreeMap::new();
        for (name, content) in file.demos {
            let key: ModalKey = name
                .parse()
                .map_err(|_| CatalogError::InvalidDemoKey(name.clone()))?;
            if !key.is_demo() {
                return Err(CatalogError::InvalidDemoKey(name));
            }
            demos.insert(key, content);
        }

        Self::new(file.site, file.cards, file.side_projects, demos)
    }

    /// Read, parse and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src)?;

        tracing::info!(
            "Loaded catalog from {:?}: {} cards, {} side projects",
            path,
            catalog.cards().len(),
            catalog.side_projects().len()
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Pick the catalog to show.
    ///
    /// Lookup order: `explicit`, then the user catalog at
    /// [`user_catalog_path`] if that file exists, then the embedded default.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = user_catalog_path().filter(|p| p.is_file()) {
            return Self::load(path);
        }

        tracing::info!("Using embedded catalog");
        Self::builtin()
    }

    pub fn site(&self) -> &SiteInfo {
        &self.inner.site
    }

    pub fn meta(&self) -> &PageMeta {
        &self.inner.site.meta
    }

    /// Cards in display order
    pub fn cards(&self) -> &[CardRecord] {
        &self.inner.cards
    }

    /// Side projects in display order
    pub fn side_projects(&self) -> &[SideProjectRecord] {
        &self.inner.side_projects
    }

    /// Demo content for an overlay key
    pub fn demo(&self, key: ModalKey) -> Option<&DemoContent> {
        self.inner.demos.get(&key)
    }

    pub fn demos(&self) -> impl Iterator<Item = (ModalKey, &DemoContent)> {
        self.inner.demos.iter().map(|(key, demo)| (*key, demo))
    }

    /// Look up a card by its title
    pub fn card(&self, title: &str) -> Option<&CardRecord> {
        self.inner.cards.iter().find(|card| card.title == title)
    }

    /// First card that opens the given overlay
    pub fn card_for_modal(&self, key: ModalKey) -> Option<&CardRecord> {
        self.inner.cards.iter().find(|card| card.modal() == Some(key))
    }
}

/// Per-user catalog location: `<config dir>/portfolio/catalog.toml`
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join("catalog.toml"))
}

fn validate(
    cards: &[CardRecord],
    side_projects: &[SideProjectRecord],
    demos: &BTreeMap<ModalKey, DemoContent>,
) -> Result<()> {
    if cards.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut titles = HashSet::new();
    for card in cards {
        if !titles.insert(card.title.as_str()) {
            return Err(CatalogError::DuplicateTitle(card.title.clone()));
        }

        match card.modal() {
            Some(ModalKey::Side) if side_projects.is_empty() => {
                return Err(CatalogError::NoSideProjects(card.title.clone()));
            }
            Some(key) if key.is_demo() && !demos.contains_key(&key) => {
                return Err(CatalogError::MissingDemo {
                    card: card.title.clone(),
                    key,
                });
            }
            _ => {}
        }
    }

    for key in demos.keys() {
        if !cards.iter().any(|card| card.modal() == Some(*key)) {
            tracing::warn!("Demo content for '{}' is not opened by any card", key);
        }
    }

    Ok(())
}
