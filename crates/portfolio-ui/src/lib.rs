//! Portfolio UI Components
//!
//! Reusable Dioxus primitives shared by the portfolio pages: buttons,
//! external link buttons, technology tags, images with load fallback, and
//! labeled form fields with inline errors.
//!
//! Components carry no page state of their own beyond what they display;
//! catalog lookups and modal state live in `portfolio-core`.

pub mod components;

pub use components::*;
