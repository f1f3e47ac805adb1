//! Page navigation: sections, mobile menu, and scroll math

/// Page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#about`
    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Parse an anchor or bare section id (case-insensitive)
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let id = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id))
    }
}

/// Mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Hamburger button
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Any navigation link closes the menu
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    /// Class modifier shared by the hamburger and the menu
    pub fn class(&self) -> &'static str {
        match self {
            MenuState::Closed => "",
            MenuState::Open => "active",
        }
    }
}

/// Smooth-scroll destination for a section.
///
/// `section_top` is the section's viewport-relative top, `page_offset` the
/// current vertical scroll position, and `header_offset` the fixed header
/// height to keep clear.
pub fn scroll_target(section_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    section_top + page_offset - header_offset
}

/// Header appearance as a function of scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Flat,
    Raised,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderStyle::Raised
        } else {
            HeaderStyle::Flat
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            HeaderStyle::Flat => "none",
            HeaderStyle::Raised => "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            HeaderStyle::Flat => "0",
            HeaderStyle::Raised => "5px 0",
        }
    }

    /// Inline style for the header element
    pub fn css(&self) -> String {
        format!("box-shadow: {}; padding: {};", self.box_shadow(), self.padding())
    }
}

/// Whether the scroll-to-top button is shown
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchor_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(&section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("Projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("#nowhere"), None);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "active");
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(400.0, 100.0, 70.0), 430.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 70.0), 730.0);
    }

    #[test]
    fn test_header_style_threshold() {
        assert_eq!(HeaderStyle::for_scroll(50.0, 50.0), HeaderStyle::Flat);
        assert_eq!(HeaderStyle::for_scroll(51.0, 50.0), HeaderStyle::Raised);
        assert_eq!(HeaderStyle::Raised.padding(), "5px 0");
        assert_eq!(HeaderStyle::Flat.css(), "box-shadow: none; padding: 0;");
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert!(!scroll_top_visible(0.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }
}
