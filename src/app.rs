use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{DetailEvent, DetailViewController, MenuState};

use crate::context::PageScroll;
use crate::dom;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides the catalog, settings and page state to every component, and
/// wires the page-wide listeners: cancel key, scroll position, body scroll
/// lock and the initial section scroll.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(crate::get_catalog);
    let config = use_hook(crate::get_config);

    let mut detail: Signal<DetailViewController> = use_signal(DetailViewController::new);
    let menu: Signal<MenuState> = use_signal(MenuState::default);
    let mut page_scroll: Signal<PageScroll> = use_signal(PageScroll::default);

    use_context_provider(|| catalog.clone());
    use_context_provider(|| config.clone());
    use_context_provider(|| detail);
    use_context_provider(|| menu);
    use_context_provider(|| page_scroll);

    // Cancel key closes the detail view wherever focus is
    let key_catalog = catalog.clone();
    use_future(move || {
        let catalog = key_catalog.clone();
        async move {
            let mut keys = document::eval(dom::KEYDOWN_LISTENER);
            while let Ok(key) = keys.recv::<String>().await {
                detail.write().handle(&catalog, DetailEvent::KeyPressed(key));
            }
        }
    });

    use_future(move || async move {
        let mut positions = document::eval(dom::SCROLL_LISTENER);
        while let Ok(y) = positions.recv::<f64>().await {
            page_scroll.set(PageScroll { y });
        }
    });

    // Background scroll follows the detail view
    use_effect(move || {
        let overflow = detail.read().scroll().body_overflow();
        dom::set_body_overflow(overflow);
    });

    let startup_config = config.clone();
    use_future(move || {
        let config = startup_config.clone();
        async move {
            if let Some(section) = crate::get_initial_section() {
                tokio::time::sleep(Duration::from_millis(config.initial_scroll_delay_ms)).await;
                tracing::info!(section = section.id(), "Scrolling to initial section");
                dom::scroll_to_section(section, config.header_offset).await;
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
