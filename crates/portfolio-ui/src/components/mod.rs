//! Reusable UI components

mod button;
mod fallback_image;
mod form_field;
mod tech_tags;

pub use button::*;
pub use fallback_image::*;
pub use form_field::*;
pub use tech_tags::*;
