//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for checking catalogs and replaying
//! clicks through the view controller without a window.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the active catalog
//! portfolio check
//!
//! # Validate a specific file
//! portfolio --catalog ./catalog.toml check
//!
//! # List cards and where they go
//! portfolio cards
//!
//! # Replay clicks and show the resulting page
//! portfolio render "card:Casino Automation Bots" scrim "card:Misc Side Projects"
//!
//! # Same, as JSON
//! portfolio render --json "card:PunchPredictor"
//! ```

mod step;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::{CardTarget, CardTrigger, Catalog, OverlayView, PageView, ViewController};
use tracing_subscriber::EnvFilter;

use crate::step::Step;

/// Portfolio - single-page project showcase
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio - inspect catalogs and replay page interactions")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Catalog file (default: <config dir>/portfolio/catalog.toml, then the built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the catalog
    Check,

    /// List cards in display order with their click target
    Cards,

    /// Replay clicks from the initial state and print the page
    Render {
        /// Steps: `card:<title>`, `open:<modal>`, `scrim`, `panel`, `close`
        steps: Vec<Step>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::discover(cli.catalog.as_deref()).context("Failed to load catalog")?;

    match cli.command {
        Commands::Check => {
            println!(
                "Catalog OK: {} cards, {} side projects, {} demos",
                catalog.cards().len(),
                catalog.side_projects().len(),
                catalog.demos().count()
            );
        }

        Commands::Cards => {
            for card in catalog.cards() {
                let target = match &card.target {
                    CardTarget::Modal { key } => format!("modal:{}", key),
                    CardTarget::Link { link } => format!("link:{}", link),
                };
                println!("{}  [{}]", card.title, target);
            }
        }

        Commands::Render { steps, json } => {
            tracing::debug!("Replaying {} steps", steps.len());
            let mut view = ViewController::new(catalog);
            for step in &steps {
                apply(&mut view, step)?;
            }

            let page = view.render();
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_page(&page);
            }
        }
    }

    Ok(())
}

fn apply(view: &mut ViewController, step: &Step) -> Result<()> {
    match step {
        Step::Card(title) => {
            if view.click_card_titled(title).is_none() {
                bail!("No card titled '{}'", title);
            }
        }
        Step::Open(key) => view.open_modal(*key),
        Step::Overlay(origin) => {
            view.click_overlay(*origin);
        }
    }
    Ok(())
}

fn print_page(page: &PageView) {
    println!("{}", page.meta.title);
    println!();

    println!("Cards:");
    for card in &page.cards {
        let target = match &card.trigger {
            CardTrigger::Modal { key } => format!("modal:{}", key),
            CardTrigger::Link { link } => format!("link:{}", link),
        };
        println!("  {}  [{}]", card.title, target);
    }
    println!();

    match &page.overlay {
        None => println!("Overlay: none"),
        Some(overlay) => {
            println!("Overlay: {}", overlay.key());
            println!("  {}", overlay.heading());
            match overlay {
                OverlayView::SideProjects { items, .. } => {
                    for item in items {
                        match &item.link {
                            Some(link) => println!("  - {} <{}>", item.title, link),
                            None => println!("  - {}", item.title),
                        }
                        println!("    {}", item.blurb);
                        println!("    [{}]", item.stack.join(", "));
                    }
                }
                OverlayView::Demo {
                    video,
                    caption,
                    link,
                    ..
                } => {
                    match video {
                        Some(video) => println!("  Video: {}", video),
                        None => println!("  Video: unavailable"),
                    }
                    if !caption.is_empty() {
                        println!("  {}", caption);
                    }
                    if let Some(link) = link {
                        println!("  {} <{}>", link.label, link.href);
                    }
                }
            }
        }
    }
}
