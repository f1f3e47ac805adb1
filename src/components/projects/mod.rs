//! Project catalog presentation: summary cards and the detail modal.

mod project_card;
mod project_gallery;
mod project_modal;

pub use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
pub use project_modal::ProjectModal;
