//! Image references with load-failure fallback
//!
//! Image paths are not guaranteed to resolve. When the host reports a load
//! failure the source flips to a fixed fallback reference, which differs
//! between the summary card and the detail view.

use serde::{Deserialize, Serialize};

/// Fallback used on summary cards
pub const SUMMARY_FALLBACK_IMAGE: &str = "assets/images/placeholder-project.png";

/// Fallback used in the detail view
pub const DETAIL_FALLBACK_IMAGE: &str = "assets/images/placeholder-project.jpg";

/// Where a project is displayed; picks image fallbacks and link labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayContext {
    Summary,
    Detail,
}

impl DisplayContext {
    /// Built-in fallback reference for this context
    pub fn default_fallback(&self) -> &'static str {
        match self {
            DisplayContext::Summary => SUMMARY_FALLBACK_IMAGE,
            DisplayContext::Detail => DETAIL_FALLBACK_IMAGE,
        }
    }
}

/// An image reference plus the fallback to use if it fails to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// The reference that should currently be displayed
    pub fn current(&self) -> &str {
        if self.failed {
            &self.fallback
        } else {
            &self.primary
        }
    }

    /// Record a load failure. Repeated calls keep the fallback.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
