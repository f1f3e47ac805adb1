//! Presentation settings
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::types::image::{DETAIL_FALLBACK_IMAGE, SUMMARY_FALLBACK_IMAGE};
use crate::types::DisplayContext;

/// Height of the fixed header, subtracted from smooth-scroll targets
pub const DEFAULT_HEADER_OFFSET: f64 = 70.0;

/// Scroll distance after which the header gets its shadow
pub const DEFAULT_HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll distance after which the scroll-to-top button appears
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Delay before scrolling to the initial section
pub const DEFAULT_INITIAL_SCROLL_DELAY_MS: u64 = 100;

/// Scroll-triggered animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub duration_ms: u32,
    pub easing: String,
    /// Animate only the first time an element scrolls into view
    pub once: bool,
    /// Animate out when scrolling past
    pub mirror: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: "ease-in-out".to_string(),
            once: true,
            mirror: false,
        }
    }
}

impl AnimationSettings {
    /// Inline style applied to animated elements. The reveal runs as a
    /// transition, so removing the revealed class plays it in reverse.
    pub fn css(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-timing-function: {};",
            self.duration_ms, self.easing
        )
    }
}

/// Settings consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub summary_fallback_image: String,
    pub detail_fallback_image: String,
    pub header_offset: f64,
    pub header_scroll_threshold: f64,
    pub scroll_top_threshold: f64,
    pub initial_scroll_delay_ms: u64,
    pub animation: AnimationSettings,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            summary_fallback_image: SUMMARY_FALLBACK_IMAGE.to_string(),
            detail_fallback_image: DETAIL_FALLBACK_IMAGE.to_string(),
            header_offset: DEFAULT_HEADER_OFFSET,
            header_scroll_threshold: DEFAULT_HEADER_SCROLL_THRESHOLD,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            initial_scroll_delay_ms: DEFAULT_INITIAL_SCROLL_DELAY_MS,
            animation: AnimationSettings::default(),
        }
    }
}

impl PresentationConfig {
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded presentation config");
        Ok(config)
    }

    /// Fallback image reference for a display context
    pub fn fallback_for(&self, context: DisplayContext) -> &str {
        match context {
            DisplayContext::Summary => &self.summary_fallback_image,
            DisplayContext::Detail => &self.detail_fallback_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresentationConfig::default();
        assert_eq!(config.header_offset, 70.0);
        assert_eq!(config.header_scroll_threshold, 50.0);
        assert_eq!(config.initial_scroll_delay_ms, 100);
        assert_eq!(config.animation.duration_ms, 800);
        assert!(config.animation.once);
        assert!(!config.animation.mirror);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PresentationConfig::from_json_str(r#"{ "header_offset": 90, "animation": { "duration_ms": 400 } }"#)
                .unwrap();
        assert_eq!(config.header_offset, 90.0);
        assert_eq!(config.animation.duration_ms, 400);
        assert_eq!(config.animation.easing, "ease-in-out");
        assert_eq!(config.summary_fallback_image, SUMMARY_FALLBACK_IMAGE);
    }

    #[test]
    fn test_fallback_for_context() {
        let config = PresentationConfig::default();
        assert_eq!(config.fallback_for(DisplayContext::Summary), SUMMARY_FALLBACK_IMAGE);
        assert_eq!(config.fallback_for(DisplayContext::Detail), DETAIL_FALLBACK_IMAGE);
    }

    #[test]
    fn test_animation_css() {
        let css = AnimationSettings::default().css();
        assert_eq!(
            css,
            "transition-duration: 800ms; transition-timing-function: ease-in-out;"
        );
        let repeating = AnimationSettings {
            once: false,
            mirror: true,
            ..AnimationSettings::default()
        };
        assert!(!repeating.css().contains("infinite"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "scroll_top_threshold": 120 }"#).unwrap();
        let config = PresentationConfig::load(&path).unwrap();
        assert_eq!(config.scroll_top_threshold, 120.0);
    }
}
