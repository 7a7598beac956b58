//! Navigation bar state.
//!
//! Two pieces of transient state live here:
//! - the header style, derived from the viewport on every scroll notification
//! - the mobile menu toggle, which mounts the overlay and hands back its
//!   enter transition
//!
//! Neither is persisted. The header style is recomputed from a
//! [`ViewportObserver`] each time and never cached.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Extra distance (px) below the header that still counts as "near top".
pub const NEAR_TOP_MARGIN: f64 = 150.0;

/// Default overlay enter duration.
pub const OVERLAY_ENTER_MS: u64 = 500;

/// CSS equivalent of a "back-in" easing curve (slight pull back, then in).
pub const BACK_IN: &str = "cubic-bezier(0.6, -0.28, 0.735, 0.045)";

// ============================================================================
// Links
// ============================================================================

/// One navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkEntry {
    pub label: String,
    pub href: String,
}

impl NavLinkEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The academy's navigation links, in display order.
pub fn default_links() -> Vec<NavLinkEntry> {
    [
        ("Players", "/players"),
        ("Coaches", "/coaches"),
        ("News", "/news"),
        ("Programs", "/programs"),
        ("Academy Info", "/informatin"),
        ("Matches", "/matches"),
    ]
    .into_iter()
    .map(|(label, href)| NavLinkEntry::new(label, href))
    .collect()
}

// ============================================================================
// Scroll
// ============================================================================

/// Vertical scroll position in pixels. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Negative and NaN positions (overscroll bounce, bad input) clamp to 0.
    pub fn new(y: f64) -> Self {
        Self(y.max(0.0))
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Source of viewport measurements, queried on each scroll notification.
pub trait ViewportObserver {
    /// Current vertical scroll position.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Rendered height of the header element.
    fn header_height(&self) -> f64;
}

/// A fixed viewport snapshot.
///
/// Static output is rendered as if the page has just loaded at the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot {
    pub offset: ScrollOffset,
    pub header_height: f64,
}

impl Snapshot {
    pub fn new(offset: f64, header_height: f64) -> Self {
        Self {
            offset: ScrollOffset::new(offset),
            header_height: header_height.max(0.0),
        }
    }
}

impl ViewportObserver for Snapshot {
    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }
}

/// Header background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Page is near the top; the hero shows through.
    Transparent,
    /// Page is scrolled past the hero.
    Solid,
}

impl HeaderStyle {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Transparent => "bg-transparent",
            Self::Solid => "bg-app-primary",
        }
    }
}

// ============================================================================
// Menu
// ============================================================================

/// Mobile menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Enter animation for the mobile overlay.
///
/// Attached to the overlay element and played by the browser whenever the
/// overlay is mounted. There is no exit counterpart: closing hides the
/// overlay immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTransition {
    /// Horizontal offset (percent of overlay width) at the first keyframe.
    pub from_pct: i32,
    /// Horizontal offset at the last keyframe.
    pub to_pct: i32,
    pub duration: Duration,
    pub easing: &'static str,
}

impl OverlayTransition {
    /// Name of the generated `@keyframes` rule.
    pub const KEYFRAMES: &'static str = "mobile-menu-enter";

    /// Slide in from the right edge.
    pub const fn slide_in(duration: Duration) -> Self {
        Self {
            from_pct: 100,
            to_pct: 0,
            duration,
            easing: BACK_IN,
        }
    }

    /// Stylesheet for the transition, scoped to the visible overlay.
    ///
    /// `[hidden]` removal restarts the animation, so a toggle that lands
    /// mid-flight just replays it from the first keyframe.
    pub fn to_css(&self, selector: &str) -> String {
        format!(
            "@keyframes {name}{{from{{transform:translateX({from}%)}}to{{transform:translateX({to}%)}}}}\
             {selector}:not([hidden]){{animation:{name} {ms}ms {easing} both}}",
            name = Self::KEYFRAMES,
            from = self.from_pct,
            to = self.to_pct,
            ms = self.duration.as_millis(),
            easing = self.easing,
        )
    }
}

impl Default for OverlayTransition {
    fn default() -> Self {
        Self::slide_in(Duration::from_millis(OVERLAY_ENTER_MS))
    }
}

// ============================================================================
// Navigation Bar
// ============================================================================

/// Scroll-aware header with a togglable mobile overlay.
#[derive(Debug, Clone)]
pub struct NavigationBar<'a> {
    links: &'a [NavLinkEntry],
    near_top_margin: f64,
    transition: OverlayTransition,
    menu: MenuState,
}

impl<'a> NavigationBar<'a> {
    pub fn new(links: &'a [NavLinkEntry]) -> Self {
        Self {
            links,
            near_top_margin: NEAR_TOP_MARGIN,
            transition: OverlayTransition::default(),
            menu: MenuState::Closed,
        }
    }

    pub fn with_near_top_margin(mut self, margin: f64) -> Self {
        self.near_top_margin = margin.max(0.0);
        self
    }

    pub fn with_transition(mut self, transition: OverlayTransition) -> Self {
        self.transition = transition;
        self
    }

    /// Header style for the viewport's current position.
    ///
    /// Near top means `offset < header_height + margin`.
    pub fn on_scroll(&self, viewport: &impl ViewportObserver) -> HeaderStyle {
        let threshold = viewport.header_height() + self.near_top_margin;
        if viewport.scroll_offset().get() < threshold {
            HeaderStyle::Transparent
        } else {
            HeaderStyle::Solid
        }
    }

    /// Flip the menu. Returns the enter transition when the overlay opens.
    pub fn toggle_menu(&mut self) -> Option<OverlayTransition> {
        self.menu = self.menu.toggle();
        self.menu.is_open().then_some(self.transition)
    }

    #[inline]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    #[inline]
    pub const fn transition(&self) -> &OverlayTransition {
        &self.transition
    }

    #[inline]
    pub const fn near_top_margin(&self) -> f64 {
        self.near_top_margin
    }

    /// Links shown in the desktop bar.
    pub fn desktop_links(&self) -> &'a [NavLinkEntry] {
        self.links
    }

    /// Links shown in the mobile overlay. Same set as the desktop bar.
    pub fn mobile_links(&self) -> &'a [NavLinkEntry] {
        self.links
    }
}

// ============================================================================
// Tests
// ============================================================================
