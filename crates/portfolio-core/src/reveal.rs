//! Scroll-triggered reveal
//!
//! Animated elements start hidden and get [`REVEALED_CLASS`] once they enter
//! the viewport. What happens when they leave depends on
//! [`AnimationSettings::once`] and [`AnimationSettings::mirror`]:
//!
//! - `once`: stay revealed forever; the element is no longer observed.
//! - `mirror`: hide again when scrolled past (element above the viewport).
//! - otherwise: hide again only when the element drops back below the
//!   viewport, so scrolling down replays the animation.

use crate::config::AnimationSettings;

/// Base class carried by every animated element
pub const ANIMATED_CLASS: &str = "fade-up";

/// Added while an animated element is revealed
pub const REVEALED_CLASS: &str = "aos-animate";

/// Where an element sits relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportPosition {
    /// Not yet scrolled into view
    Below,
    /// Intersecting the viewport
    Visible,
    /// Scrolled past
    Above,
}

impl ViewportPosition {
    /// Classify an intersection observer entry.
    ///
    /// `top` is the element's bounding-box top relative to the viewport; a
    /// non-intersecting element with a negative top has been scrolled past.
    pub fn from_observer(intersecting: bool, top: f64) -> Self {
        if intersecting {
            ViewportPosition::Visible
        } else if top < 0.0 {
            ViewportPosition::Above
        } else {
            ViewportPosition::Below
        }
    }
}

impl AnimationSettings {
    /// Revealed state after the element moves to `position`
    pub fn next_revealed(&self, revealed: bool, position: ViewportPosition) -> bool {
        if self.once && revealed {
            return true;
        }
        match position {
            ViewportPosition::Visible => true,
            ViewportPosition::Above => !(self.mirror && !self.once),
            ViewportPosition::Below => false,
        }
    }

    /// Whether the element still needs viewport updates
    pub fn keep_observing(&self, revealed: bool) -> bool {
        !(self.once && revealed)
    }
}

/// Class list for an animated element
pub fn reveal_class(revealed: bool) -> String {
    if revealed {
        format!("{} {}", ANIMATED_CLASS, REVEALED_CLASS)
    } else {
        ANIMATED_CLASS.to_string()
    }
}
