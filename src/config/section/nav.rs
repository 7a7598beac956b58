//! `[nav]` configuration for the header links and overlay.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! near_top_margin = 150
//! transition_ms = 500
//! links = [
//!     { label = "Players", href = "/players" },
//!     { label = "News", href = "/news" },
//! ]
//! ```

use crate::component::nav::{self, NavLinkEntry, NavigationBar, OverlayTransition};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Links shown in both the desktop bar and the mobile overlay.
    pub links: Vec<NavLinkEntry>,

    /// Pixels below the header still treated as "near top".
    pub near_top_margin: f64,

    /// Overlay enter duration in milliseconds.
    pub transition_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            links: nav::default_links(),
            near_top_margin: nav::NEAR_TOP_MARGIN,
            transition_ms: nav::OVERLAY_ENTER_MS,
        }
    }
}

impl NavConfig {
    /// Navigation bar in its initial (closed) state.
    pub fn navigation_bar(&self) -> NavigationBar<'_> {
        NavigationBar::new(&self.links)
            .with_near_top_margin(self.near_top_margin)
            .with_transition(OverlayTransition::slide_in(Duration::from_millis(
                self.transition_ms,
            )))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.links.is_empty() {
            diag.error(FieldPath::new("nav.links"), "at least one link is required");
        }

        for link in &self.links {
            if link.label.trim().is_empty() {
                diag.error(
                    FieldPath::new("nav.links"),
                    format!("link to `{}` has an empty label", link.href),
                );
            }
            if !link.href.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::new("nav.links"),
                    format!("`{}` is not a site-relative path", link.href),
                    "destinations start with `/`, e.g. \"/news\"",
                );
            }
        }

        if !self.near_top_margin.is_finite() || self.near_top_margin < 0.0 {
            diag.error(
                FieldPath::new("nav.near_top_margin"),
                "must be a non-negative number of pixels",
            );
        }

        if self.transition_ms == 0 {
            diag.error(FieldPath::new("nav.transition_ms"), "must be greater than 0");
        }
    }
}
