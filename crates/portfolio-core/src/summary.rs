//! Summary Renderer
//!
//! Projects the whole catalog into summary cards, one per record, in catalog
//! order. Output goes to an injected [`RenderTarget`] rather than a global
//! page element, so rendering can be checked without a page environment.

use crate::catalog::Catalog;
use crate::config::PresentationConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::types::{DisplayContext, ExternalLink, ImageSource, LinkKind, Project, ProjectId};

/// A labeled external link control. Opens in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkControl {
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: String,
}

impl LinkControl {
    pub const TARGET: &'static str = "_blank";

    pub fn for_context(link: ExternalLink, context: DisplayContext) -> Self {
        let label = match context {
            DisplayContext::Summary => link.kind.summary_label(),
            DisplayContext::Detail => link.kind.detail_label(),
        };
        Self {
            kind: link.kind,
            label,
            href: link.url,
        }
    }
}

/// Compact card for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Carried by the "More Details" trigger
    pub id: ProjectId,
    pub title: String,
    pub short_summary: String,
    pub image: ImageSource,
    pub technologies: Vec<String>,
    pub links: Vec<LinkControl>,
}

impl SummaryCard {
    pub fn from_project(project: &Project, config: &PresentationConfig) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            short_summary: project.short_summary.clone(),
            image: ImageSource::new(
                project.image.clone(),
                config.fallback_for(DisplayContext::Summary),
            ),
            technologies: project.technologies.clone(),
            links: project
                .links()
                .into_iter()
                .map(|link| LinkControl::for_context(link, DisplayContext::Summary))
                .collect(),
        }
    }
}

/// Container that receives summary cards
pub trait RenderTarget {
    /// Remove all previously rendered cards
    fn clear(&mut self);

    /// Append one card at the end
    fn append(&mut self, card: SummaryCard);
}

impl RenderTarget for Vec<SummaryCard> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, card: SummaryCard) {
        self.push(card);
    }
}

/// Render every catalog record into `target`, replacing prior content.
///
/// Returns the number of cards written. A missing target yields
/// `MissingContainer` without touching anything; callers treat that as a
/// no-op.
pub fn render_summaries<T: RenderTarget + ?Sized>(
    catalog: &Catalog,
    target: Option<&mut T>,
    config: &PresentationConfig,
) -> CatalogResult<usize> {
    let Some(target) = target else {
        tracing::warn!("Summary render skipped: no container");
        return Err(CatalogError::MissingContainer);
    };

    target.clear();
    for project in catalog.list() {
        target.append(SummaryCard::from_project(project, config));
    }

    tracing::debug!(count = catalog.len(), "Rendered project summaries");
    Ok(catalog.len())
}

/// Convenience wrapper that returns the cards directly
pub fn summary_cards(catalog: &Catalog, config: &PresentationConfig) -> Vec<SummaryCard> {
    catalog
        .list()
        .iter()
        .map(|project| SummaryCard::from_project(project, config))
        .collect()
}
