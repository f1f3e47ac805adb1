//! Scroll-to-top button, shown once the page is scrolled past the threshold.

use dioxus::prelude::*;
use portfolio_core::scroll_top_visible;

use crate::context::{use_page_scroll, use_presentation_config};
use crate::dom;

#[component]
pub fn ScrollToTop() -> Element {
    let config = use_presentation_config();
    let page_scroll = use_page_scroll();

    let visible = scroll_top_visible(page_scroll().y, config.scroll_top_threshold);

    rsx! {
        button {
            class: if visible { "scroll-top visible" } else { "scroll-top" },
            "aria-label": "Scroll to top",
            onclick: move |_| dom::scroll_window_to(0.0),
            "\u{2191}"
        }
    }
}
