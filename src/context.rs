//! Page context for the portfolio app.
//!
//! The app root provides the catalog, presentation settings and the shared
//! page state; components read them through these hooks instead of
//! looking anything up globally.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let mut detail = use_detail_view();
//! detail.write().handle(&catalog, DetailEvent::CloseControl);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{Catalog, DetailViewController, MenuState, PresentationConfig};

/// Window scroll position in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageScroll {
    pub y: f64,
}

/// The read-only project catalog.
pub fn use_catalog() -> Arc<Catalog> {
    use_context::<Arc<Catalog>>()
}

pub fn use_presentation_config() -> Arc<PresentationConfig> {
    use_context::<Arc<PresentationConfig>>()
}

/// Hook to access the project detail view state.
///
/// Write through [`DetailViewController::handle`] so the scroll lock stays
/// in step with the open/closed state.
pub fn use_detail_view() -> Signal<DetailViewController> {
    use_context::<Signal<DetailViewController>>()
}

/// Mobile navigation menu state.
pub fn use_menu_state() -> Signal<MenuState> {
    use_context::<Signal<MenuState>>()
}

/// Reactive window scroll position.
pub fn use_page_scroll() -> Signal<PageScroll> {
    use_context::<Signal<PageScroll>>()
}
