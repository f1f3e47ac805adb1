#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{logging, Catalog, PresentationConfig, Section};

/// Catalog loaded at startup
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Presentation settings loaded at startup
static CONFIG: OnceLock<Arc<PresentationConfig>> = OnceLock::new();

/// Section to scroll to once the page has settled
static INITIAL_SECTION: OnceLock<Section> = OnceLock::new();

/// Get the startup catalog (built-in entries if none was loaded)
pub fn get_catalog() -> Arc<Catalog> {
    CATALOG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(Catalog::builtin()))
}

/// Get the startup presentation settings
pub fn get_config() -> Arc<PresentationConfig> {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(PresentationConfig::default()))
}

/// Get the section requested with --section
pub fn get_initial_section() -> Option<Section> {
    INITIAL_SECTION.get().copied()
}

/// Portfolio - personal project showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - personal project showcase")]
struct Args {
    /// Catalog JSON file (default: built-in projects)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Presentation config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Section to open at (home, about, experience, projects, skills, contact)
    #[arg(short, long, value_parser = parse_section)]
    section: Option<Section>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::from_anchor(s).ok_or_else(|| format!("unknown section '{}'", s))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let config = match &args.config {
        Some(path) => PresentationConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PresentationConfig::default(),
    };

    tracing::info!(projects = catalog.len(), "Starting portfolio");

    let _ = CATALOG.set(Arc::new(catalog));
    let _ = CONFIG.set(Arc::new(config));
    if let Some(section) = args.section {
        let _ = INITIAL_SECTION.set(section);
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
