//! Project Summary Card
//!
//! Image, title, short summary, technology tags, present external links and
//! the "More Details" trigger for one project.

use dioxus::prelude::*;
use portfolio_core::{reveal_class, LinkKind, ProjectId, SummaryCard};
use portfolio_ui::{Button, ButtonVariant, FallbackImage, LinkButton, TechTags};

use crate::context::use_presentation_config;

/// Button style for an external link
pub(crate) fn link_variant(kind: LinkKind) -> ButtonVariant {
    match kind {
        LinkKind::Source => ButtonVariant::Secondary,
        LinkKind::Live => ButtonVariant::Primary,
    }
}

/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         card: card.clone(),
///         revealed: true,
///         on_details: move |id| detail.write().handle(&catalog, DetailEvent::Open(id)),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Rendered summary of one project
    card: SummaryCard,
    /// Whether the card has scrolled into view
    revealed: bool,
    /// Called with the card's identifier when "More Details" is activated
    on_details: EventHandler<ProjectId>,
) -> Element {
    let config = use_presentation_config();
    let animation = config.animation.css();
    let id = card.id;
    let reveal = reveal_class(revealed);

    rsx! {
        div {
            class: "project-card {reveal}",
            style: "{animation}",
            "data-id": "{id}",
            "data-reveal-key": "{id}",

            div { class: "project-image",
                FallbackImage {
                    source: card.image.clone(),
                    alt: card.title.clone(),
                }
            }

            div { class: "project-info",
                h3 { "{card.title}" }
                p { "{card.short_summary}" }

                TechTags { tags: card.technologies.clone() }

                div { class: "project-links",
                    for (link_key, link) in card.links.iter().map(|l| (l.kind.as_str(), l)) {
                        LinkButton {
                            key: "{link_key}",
                            href: link.href.clone(),
                            label: link.label.to_string(),
                            variant: link_variant(link.kind),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        class: "more-details".to_string(),
                        onclick: move |_| on_details.call(id),
                        "More Details"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_variants() {
        assert_eq!(link_variant(LinkKind::Source), ButtonVariant::Secondary);
        assert_eq!(link_variant(LinkKind::Live), ButtonVariant::Primary);
    }
}
