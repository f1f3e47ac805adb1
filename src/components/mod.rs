//! UI Components for the portfolio page.

mod contact_form;
mod nav_header;
pub mod projects;
mod scroll_to_top;

pub use contact_form::ContactFormView;
pub use nav_header::NavHeader;
pub use projects::{ProjectCard, ProjectGallery, ProjectModal};
pub use scroll_to_top::ScrollToTop;
