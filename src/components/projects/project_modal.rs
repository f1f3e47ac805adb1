//! Project Detail Modal
//!
//! Shows the selected project in full while the detail view is open.
//! Dismissed by the close control, by a click on the backdrop itself (the
//! content box stops propagation), or by the cancel key, which the app root
//! listens for at document level.

use dioxus::prelude::*;
use portfolio_core::DetailEvent;
use portfolio_ui::{CloseButton, FallbackImage, LinkButton, TechTags};

use super::project_card::link_variant;
use crate::context::{use_catalog, use_detail_view, use_presentation_config};

#[component]
pub fn ProjectModal() -> Element {
    let catalog = use_catalog();
    let config = use_presentation_config();
    let mut detail = use_detail_view();

    let content = detail.read().content(&catalog, &config);
    let Some(content) = content else {
        return VNode::empty();
    };

    let backdrop_catalog = catalog.clone();
    let inner_catalog = catalog.clone();
    let close_catalog = catalog.clone();

    rsx! {
        div {
            id: "projectModal",
            class: "modal",
            onclick: move |_| {
                detail.write().handle(&backdrop_catalog, DetailEvent::PointerDown { on_backdrop: true });
            },

            div {
                class: "modal-content",
                onclick: move |e| {
                    e.stop_propagation();
                    detail.write().handle(&inner_catalog, DetailEvent::PointerDown { on_backdrop: false });
                },

                CloseButton {
                    onclick: move |_| {
                        detail.write().close(&close_catalog);
                    }
                }

                div { id: "modalBody",
                    div { class: "modal-header",
                        h2 { "{content.title}" }
                    }

                    div { class: "modal-image",
                        FallbackImage {
                            source: content.image.clone(),
                            alt: content.title.clone(),
                        }
                    }

                    div { class: "modal-description",
                        p { "{content.full_summary}" }
                    }

                    div { class: "modal-tech",
                        h3 { "Technologies Used" }
                        TechTags { tags: content.technologies.clone() }
                    }

                    if !content.links.is_empty() {
                        div { class: "modal-links",
                            for (link_key, link) in content.links.iter().map(|l| (l.kind.as_str(), l)) {
                                LinkButton {
                                    key: "{link_key}",
                                    href: link.href.clone(),
                                    label: link.label.to_string(),
                                    variant: link_variant(link.kind),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
