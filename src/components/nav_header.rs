//! Navigation Header Component
//!
//! Fixed header with section links. On narrow screens the links collapse
//! behind a hamburger toggle; following any link closes the menu and
//! smooth-scrolls to the section, keeping it clear of the header.

use dioxus::prelude::*;
use portfolio_core::{HeaderStyle, Section};

use crate::context::{use_menu_state, use_page_scroll, use_presentation_config};
use crate::dom;

#[component]
pub fn NavHeader() -> Element {
    let config = use_presentation_config();
    let mut menu = use_menu_state();
    let page_scroll = use_page_scroll();

    let header_style = HeaderStyle::for_scroll(page_scroll().y, config.header_scroll_threshold);
    let header_offset = config.header_offset;
    let menu_class = menu().class();

    rsx! {
        header { class: "header", style: "{header_style.css()}",
            nav { class: "navbar",
                a {
                    class: "nav-logo",
                    href: "{Section::Home.anchor()}",
                    onclick: move |e| {
                        e.prevent_default();
                        menu.write().close();
                        spawn(dom::scroll_to_section(Section::Home, header_offset));
                    },
                    "Portfolio"
                }

                ul { class: "nav-menu {menu_class}",
                    for section in Section::ALL {
                        li { key: "{section.id()}", class: "nav-item",
                            a {
                                class: "nav-link",
                                href: "{section.anchor()}",
                                onclick: move |e| {
                                    e.prevent_default();
                                    menu.write().close();
                                    spawn(dom::scroll_to_section(section, header_offset));
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }

                button {
                    class: "hamburger {menu_class}",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu.write().toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
