//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `NAV_JS` - browser runtime for the header: scroll subscription and
//!   mobile menu toggling
//!
//! # Usage
//!
//! ```ignore
//! use embed::{NAV_JS, NavVars};
//!
//! let js = NAV_JS.render(&NavVars::from_nav(&nav_bar));
//! ```

mod template;

pub use template::{Template, TemplateVars};

use crate::component::header::{OVERLAY_SELECTOR, overlay_slide_class};
use crate::component::nav::{HeaderStyle, MenuState, NavigationBar};

/// Variables for nav.js.
pub struct NavVars {
    pub near_top_margin: f64,
    pub overlay_selector: &'static str,
}

impl NavVars {
    pub fn from_nav(nav: &NavigationBar<'_>) -> Self {
        Self {
            near_top_margin: nav.near_top_margin(),
            overlay_selector: OVERLAY_SELECTOR,
        }
    }
}

impl TemplateVars for NavVars {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__NAV_NEAR_TOP_MARGIN__", &self.near_top_margin.to_string())
            .replace(
                "__NAV_TRANSPARENT_CLASS__",
                &js_string(HeaderStyle::Transparent.class()),
            )
            .replace("__NAV_SOLID_CLASS__", &js_string(HeaderStyle::Solid.class()))
            .replace("__NAV_OVERLAY_SELECTOR__", &js_string(self.overlay_selector))
            .replace(
                "__NAV_OVERLAY_OPEN_CLASS__",
                &js_string(overlay_slide_class(MenuState::Open)),
            )
            .replace(
                "__NAV_OVERLAY_CLOSED_CLASS__",
                &js_string(overlay_slide_class(MenuState::Closed)),
            )
    }
}

/// Quote a value as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".into())
}

/// Header runtime with configuration injection.
pub const NAV_JS: Template<NavVars> = Template::new(include_str!("nav.js"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::nav::default_links;

    #[test]
    fn test_nav_js_placeholders_replaced() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let js = NAV_JS.render(&NavVars::from_nav(&nav));

        assert!(!js.contains("__NAV_"));
        assert!(js.contains("const MARGIN = 150;"));
        assert!(js.contains("const TRANSPARENT = \"bg-transparent\";"));
        assert!(js.contains("const SOLID = \"bg-app-primary\";"));
        assert!(js.contains("document.querySelector(\".mobile-menu-overlay\")"));
    }

    #[test]
    fn test_nav_js_overlay_classes_match_header() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let js = NAV_JS.render(&NavVars::from_nav(&nav));

        assert!(js.contains(&format!(
            "const OPEN = \"{}\";",
            overlay_slide_class(MenuState::Open)
        )));
        assert!(js.contains(&format!(
            "const CLOSED = \"{}\";",
            overlay_slide_class(MenuState::Closed)
        )));
        assert!(!js.contains("\"translate-x-0\", open"));
    }

    #[test]
    fn test_nav_js_custom_margin() {
        let links = default_links();
        let nav = NavigationBar::new(&links).with_near_top_margin(42.5);
        let js = NAV_JS.render(&NavVars::from_nav(&nav));
        assert!(js.contains("const MARGIN = 42.5;"));
    }
}
