#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::Catalog;
use tracing_subscriber::EnvFilter;

/// Catalog chosen at start-up; read-only afterwards
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the catalog loaded at start-up
pub fn get_catalog() -> Option<Catalog> {
    CATALOG.get().cloned()
}

/// Portfolio - single-page project showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - featured work, side projects and demos")]
struct Args {
    /// Catalog file (default: <config dir>/portfolio/catalog.toml, then the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = Catalog::discover(args.catalog.as_deref()).context("Failed to load catalog")?;
    let title = catalog.meta().title.clone();

    tracing::info!(
        "Starting '{}' with {} cards",
        title,
        catalog.cards().len()
    );

    // Store catalog globally
    let _ = CATALOG.set(catalog);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
