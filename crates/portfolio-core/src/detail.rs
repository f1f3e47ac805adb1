//! Detail View Controller
//!
//! The project modal is a two-state machine: `Closed` or `Open` with one
//! selected project. All transitions go through [`transition`]; the
//! controller applies them and keeps the background scroll lock in step.

use crate::catalog::Catalog;
use crate::config::PresentationConfig;
use crate::summary::LinkControl;
use crate::types::{DisplayContext, ImageSource, ProjectId};

/// Key that dismisses the detail view
pub const CANCEL_KEY: &str = "Escape";

/// Visibility of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl DetailState {
    pub fn selected(&self) -> Option<ProjectId> {
        match self {
            DetailState::Closed => None,
            DetailState::Open(id) => Some(*id),
        }
    }
}

/// Inputs to the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// A "More Details" trigger was activated
    Open(ProjectId),
    /// The close control inside the view was activated
    CloseControl,
    /// A pointer activation; `on_backdrop` is true only when the target is
    /// the backdrop itself, not the inner content
    PointerDown { on_backdrop: bool },
    /// A key press anywhere on the page
    KeyPressed(String),
}

/// Background page scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLock {
    #[default]
    Released,
    Suspended,
}

impl ScrollLock {
    /// Value for the page body's `overflow` style
    pub fn body_overflow(&self) -> &'static str {
        match self {
            ScrollLock::Released => "auto",
            ScrollLock::Suspended => "hidden",
        }
    }
}

/// Everything the open detail view displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub id: ProjectId,
    pub title: String,
    pub image: ImageSource,
    pub full_summary: String,
    pub technologies: Vec<String>,
    pub links: Vec<LinkControl>,
}

impl DetailContent {
    /// Resolve content for `id`; `None` if the catalog has no such record.
    pub fn resolve(catalog: &Catalog, id: ProjectId, config: &PresentationConfig) -> Option<Self> {
        let project = catalog.find(id).ok()?;
        Some(Self {
            id: project.id,
            title: project.title.clone(),
            image: ImageSource::new(project.image.clone(), config.fallback_for(DisplayContext::Detail)),
            full_summary: project.full_summary.clone(),
            technologies: project.technologies.clone(),
            links: project
                .links()
                .into_iter()
                .map(|link| LinkControl::for_context(link, DisplayContext::Detail))
                .collect(),
        })
    }
}

/// Compute the next state. Pure; unknown identifiers leave the state as is.
pub fn transition(state: &DetailState, event: &DetailEvent, catalog: &Catalog) -> DetailState {
    match event {
        DetailEvent::Open(id) => match catalog.find(*id) {
            Ok(_) => DetailState::Open(*id),
            Err(_) => *state,
        },
        DetailEvent::CloseControl => DetailState::Closed,
        DetailEvent::PointerDown { on_backdrop: true } => DetailState::Closed,
        DetailEvent::PointerDown { on_backdrop: false } => *state,
        DetailEvent::KeyPressed(key) if key == CANCEL_KEY => DetailState::Closed,
        DetailEvent::KeyPressed(_) => *state,
    }
}

/// Holds the current detail state and background scroll lock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailViewController {
    state: DetailState,
    scroll: ScrollLock,
}

impl DetailViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open(_))
    }

    pub fn scroll(&self) -> ScrollLock {
        self.scroll
    }

    /// Apply an event. Returns true if the state changed.
    pub fn handle(&mut self, catalog: &Catalog, event: DetailEvent) -> bool {
        let next = transition(&self.state, &event, catalog);
        if let DetailEvent::Open(id) = &event {
            if next.selected() != Some(*id) {
                tracing::warn!(project_id = %id, "Ignoring detail request for unknown project");
            }
        }
        if next == self.state {
            return false;
        }

        tracing::debug!(from = ?self.state, to = ?next, "Detail view transition");
        self.state = next;
        self.scroll = match next {
            DetailState::Closed => ScrollLock::Released,
            DetailState::Open(_) => ScrollLock::Suspended,
        };
        true
    }

    /// Open the view for `id`, returning what it shows.
    ///
    /// Unknown identifiers return `None` and leave the controller untouched.
    pub fn open(
        &mut self,
        catalog: &Catalog,
        id: ProjectId,
        config: &PresentationConfig,
    ) -> Option<DetailContent> {
        self.handle(catalog, DetailEvent::Open(id));
        if self.state.selected() == Some(id) {
            DetailContent::resolve(catalog, id, config)
        } else {
            None
        }
    }

    /// Close the view. Returns false if it was already closed.
    pub fn close(&mut self, catalog: &Catalog) -> bool {
        self.handle(catalog, DetailEvent::CloseControl)
    }

    /// Content for the currently selected project, if open
    pub fn content(&self, catalog: &Catalog, config: &PresentationConfig) -> Option<DetailContent> {
        self.state
            .selected()
            .and_then(|id| DetailContent::resolve(catalog, id, config))
    }
}
