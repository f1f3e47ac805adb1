//! Portfolio Core Library
//!
//! Framework-independent behavior behind the portfolio site: the project
//! catalog, summary-card rendering, the project detail view state machine,
//! and the small page behaviors around them (navigation, contact form).
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{render_summaries, Catalog, DetailViewController, PresentationConfig, ProjectId};
//!
//! let catalog = Catalog::builtin();
//! let config = PresentationConfig::default();
//!
//! let mut cards: Vec<portfolio_core::SummaryCard> = Vec::new();
//! render_summaries(&catalog, Some(&mut cards), &config).unwrap();
//! assert_eq!(cards.len(), catalog.len());
//!
//! let mut detail = DetailViewController::new();
//! let content = detail.open(&catalog, ProjectId(3), &config).unwrap();
//! assert_eq!(content.id, ProjectId(3));
//! detail.close(&catalog);
//! assert!(!detail.is_open());
//! ```

pub mod catalog;
pub mod config;
pub mod contact;
pub mod detail;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod reveal;
pub mod summary;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use config::{AnimationSettings, PresentationConfig};
pub use contact::{ContactField, ContactForm, FieldError, SUCCESS_MESSAGE};
pub use detail::{
    transition, DetailContent, DetailEvent, DetailState, DetailViewController, ScrollLock,
    CANCEL_KEY,
};
pub use error::{CatalogError, CatalogResult};
pub use navigation::{scroll_target, scroll_top_visible, HeaderStyle, MenuState, Section};
pub use reveal::{reveal_class, ViewportPosition, ANIMATED_CLASS, REVEALED_CLASS};
pub use summary::{render_summaries, summary_cards, LinkControl, RenderTarget, SummaryCard};
pub use types::*;
