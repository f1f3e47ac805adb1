//! Project Gallery
//!
//! Renders the whole catalog as summary cards, in catalog order. All cards
//! share one "More Details" handler keyed by project identifier. Cards are
//! revealed as they scroll into view.

use std::collections::HashMap;

use dioxus::prelude::*;
use portfolio_core::{render_summaries, DetailEvent, ProjectId, SummaryCard, ViewportPosition};

use super::ProjectCard;
use crate::context::{use_catalog, use_detail_view, use_presentation_config};
use crate::dom;

#[component]
pub fn ProjectGallery() -> Element {
    let catalog = use_catalog();
    let config = use_presentation_config();
    let mut detail = use_detail_view();
    let mut cards: Signal<Vec<SummaryCard>> = use_signal(Vec::new);
    let mut revealed: Signal<HashMap<ProjectId, bool>> = use_signal(HashMap::new);

    // Render once the page is mounted; re-rendering replaces, never appends
    let render_catalog = catalog.clone();
    let render_config = config.clone();
    use_effect(move || {
        match render_summaries(&render_catalog, Some(&mut *cards.write()), &render_config) {
            Ok(count) => tracing::debug!(count, "Project cards ready"),
            Err(e) => tracing::warn!("Project cards not rendered: {}", e),
        }
    });

    use_future(move || {
        let animation = config.animation.clone();
        async move {
            let mut entries = document::eval(dom::REVEAL_LISTENER);
            while let Ok((key, intersecting, top)) = entries.recv::<(i64, bool, f64)>().await {
                let id = ProjectId(key);
                let current = revealed.peek().get(&id).copied().unwrap_or(false);
                let position = ViewportPosition::from_observer(intersecting, top);
                let next = animation.next_revealed(current, position);
                if next != current {
                    revealed.write().insert(id, next);
                }
                if !animation.keep_observing(next) {
                    if let Err(e) = entries.send(key) {
                        tracing::debug!("Failed to stop observing card {}: {:?}", id, e);
                    }
                }
            }
        }
    });

    let on_details = use_callback(move |id: ProjectId| {
        detail.write().handle(&catalog, DetailEvent::Open(id));
    });

    rsx! {
        div { id: "projects-container", class: "projects-grid",
            for card in cards.read().iter() {
                ProjectCard {
                    key: "{card.id}",
                    card: card.clone(),
                    revealed: revealed.read().get(&card.id).copied().unwrap_or(false),
                    on_details: on_details,
                }
            }
        }
    }
}
