//! Header markup: fixed bar, desktop link list, and the mobile overlay.
//!
//! Both link lists are written from the same [`NavigationBar`] so their
//! labels, destinations, and order cannot drift apart.

use super::nav::{HeaderStyle, MenuState, NavLinkEntry, NavigationBar, ViewportObserver};
use crate::utils::html::{class_list, escape, push_attr};

/// Base classes of the fixed header; the background class is appended.
pub const HEADER_CLASS: &str =
    "fixed z-50 top-0 left-0 w-full transition-all ease-in duration-700 text-3xl font-bold";

/// Base classes of the mobile overlay.
pub const OVERLAY_CLASS: &str = "fixed top-0 mobile-menu-overlay z-[999] left-0 h-full w-full \
     bg-black bg-opacity-80 transform transition-transform ease-in duration-500";

/// Selector the runtime and transition stylesheet use to find the overlay.
pub const OVERLAY_SELECTOR: &str = ".mobile-menu-overlay";

const LINK_CLASS: &str =
    "font-bold uppercase text-3xl font-light text-white hover:text-app-secondary hover:opacity-30";

const ICON_CLASS: &str = "text-white text-3xl cursor-pointer";

const MENU_ICON: &str = "<path stroke-linecap=\"round\" stroke-miterlimit=\"10\" stroke-width=\"32\" \
     d=\"M80 160h352M80 256h352M80 352h352\"/>";

const CLOSE_ICON: &str = "<path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"32\" \
     d=\"M368 368L144 144M368 144L144 368\"/>";

/// Slide class of the overlay for a menu state. nav.js swaps the same pair.
pub const fn overlay_slide_class(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Open => "translate-x-0",
        MenuState::Closed => "-translate-x-full",
    }
}

/// Logo shown at the left of the bar.
#[derive(Debug, Clone, Copy)]
pub struct Logo<'a> {
    pub src: &'a str,
    pub alt: &'a str,
}

/// Renders the header for a given viewport state.
pub struct Header<'a, 'n> {
    nav: &'n NavigationBar<'a>,
    logo: Logo<'n>,
}

impl<'a, 'n> Header<'a, 'n> {
    pub fn new(nav: &'n NavigationBar<'a>, logo: Logo<'n>) -> Self {
        Self { nav, logo }
    }

    /// Header class list for the viewport's position.
    pub fn header_class(&self, viewport: &impl ViewportObserver) -> String {
        let style: HeaderStyle = self.nav.on_scroll(viewport);
        class_list(&[HEADER_CLASS, style.class()])
    }

    /// Overlay class list for the current menu state.
    pub fn overlay_class(&self) -> String {
        class_list(&[OVERLAY_CLASS, overlay_slide_class(self.nav.menu())])
    }

    /// Append header and overlay markup to `out`.
    pub fn render_into(&self, out: &mut String, viewport: &impl ViewportObserver) {
        let open = self.nav.menu().is_open();

        out.push_str("<header id=\"site-header\"");
        push_attr(out, "class", &self.header_class(viewport));
        out.push_str(">\n<div>\n<div class=\"container\">\n");
        out.push_str(
            "<nav class=\"flex items-center justify-between md:justify-start space-x-6 py-2 md:py-4\">\n",
        );

        // Logo
        out.push_str("<div class=\"flex justify-center\">\n<a href=\"/\">");
        out.push_str(
            "<img class=\"flex justify-center transition-all ease-out duration-700\" width=\"50\" height=\"50\"",
        );
        push_attr(out, "src", self.logo.src);
        push_attr(out, "alt", self.logo.alt);
        out.push_str("></a>\n</div>\n");

        // Desktop list
        out.push_str("<ul class=\"hidden md:flex items-center space-x-5\" data-nav=\"desktop\">\n");
        for link in self.nav.desktop_links() {
            out.push_str("<li>");
            render_link(out, link);
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");

        // Menu button
        out.push_str("<div class=\"md:hidden flex items-center\">\n");
        out.push_str("<button type=\"button\" data-menu-toggle aria-label=\"Open menu\" aria-controls=\"mobile-menu\"");
        push_attr(out, "aria-expanded", if open { "true" } else { "false" });
        out.push('>');
        render_icon(out, MENU_ICON);
        out.push_str("</button>\n</div>\n");

        out.push_str("</nav>\n</div>\n</div>\n</header>\n");

        // Overlay
        out.push_str("<div id=\"mobile-menu\"");
        push_attr(out, "class", &self.overlay_class());
        if !open {
            out.push_str(" hidden");
        }
        out.push_str(">\n");
        out.push_str(
            "<div class=\"container h-full flex flex-col py-16 text-center space-y-4\" data-nav=\"mobile\">\n",
        );
        out.push_str(
            "<button type=\"button\" class=\"absolute top-5 right-5\" data-menu-toggle aria-label=\"Close menu\">",
        );
        render_icon(out, CLOSE_ICON);
        out.push_str("</button>\n");
        for link in self.nav.mobile_links() {
            render_link(out, link);
            out.push('\n');
        }
        out.push_str("</div>\n</div>\n");
    }
}

fn render_link(out: &mut String, link: &NavLinkEntry) {
    out.push_str("<div");
    push_attr(out, "class", LINK_CLASS);
    out.push_str("><a");
    push_attr(out, "href", &link.href);
    out.push('>');
    out.push_str(&escape(&link.label));
    out.push_str("</a></div>");
}

fn render_icon(out: &mut String, path: &str) {
    out.push_str("<svg");
    push_attr(out, "class", ICON_CLASS);
    out.push_str(
        " xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 512 512\" width=\"1em\" height=\"1em\" \
         fill=\"none\" stroke=\"currentColor\">",
    );
    out.push_str(path);
    out.push_str("</svg>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::nav::{Snapshot, default_links};

    const LOGO: Logo<'static> = Logo {
        src: "/white.png",
        alt: "Milkyway football academy",
    };

    fn render(header: &Header<'_, '_>, viewport: &Snapshot) -> String {
        let mut out = String::new();
        header.render_into(&mut out, viewport);
        out
    }

    /// Collect `(href, label)` pairs of every `<a>` in `html`.
    fn anchors(html: &str) -> Vec<(String, String)> {
        let mut found = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find("<a href=\"") {
            rest = &rest[start + "<a href=\"".len()..];
            let Some(end) = rest.find('"') else { break };
            let href = rest[..end].to_string();
            rest = &rest[end..];
            let Some(open) = rest.find('>') else { break };
            let Some(close) = rest.find("</a>") else { break };
            found.push((href, rest[open + 1..close].to_string()));
            rest = &rest[close..];
        }
        found
    }

    /// Split rendered header into (desktop list, mobile overlay) sections.
    fn sections(html: &str) -> (&str, &str) {
        let desktop_start = html.find("data-nav=\"desktop\"").unwrap();
        let desktop_end = desktop_start + html[desktop_start..].find("</ul>").unwrap();
        let mobile_start = html.find("data-nav=\"mobile\"").unwrap();
        (&html[desktop_start..desktop_end], &html[mobile_start..])
    }

    #[test]
    fn test_desktop_and_mobile_lists_identical() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let html = render(&Header::new(&nav, LOGO), &Snapshot::default());

        let (desktop, mobile) = sections(&html);
        let desktop = anchors(desktop);
        let mobile = anchors(mobile);

        assert_eq!(desktop.len(), 6);
        assert_eq!(desktop, mobile);
        let expected: Vec<_> = links
            .iter()
            .map(|l| (l.href.clone(), l.label.clone()))
            .collect();
        assert_eq!(desktop, expected);
    }

    #[test]
    fn test_header_class_follows_scroll() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let header = Header::new(&nav, LOGO);

        let top = render(&header, &Snapshot::new(0.0, 72.0));
        assert!(top.contains("duration-700 text-3xl font-bold bg-transparent\""));

        let scrolled = render(&header, &Snapshot::new(222.0, 72.0));
        assert!(scrolled.contains("font-bold bg-app-primary\""));
    }

    #[test]
    fn test_overlay_hidden_when_closed() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let html = render(&Header::new(&nav, LOGO), &Snapshot::default());
        assert!(html.contains("-translate-x-full\" hidden>"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_overlay_visible_when_open() {
        let links = default_links();
        let mut nav = NavigationBar::new(&links);
        nav.toggle_menu();
        let html = render(&Header::new(&nav, LOGO), &Snapshot::default());
        assert!(html.contains("duration-500 translate-x-0\">"));
        assert!(!html.contains(" hidden>"));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn test_logo_markup() {
        let links = default_links();
        let nav = NavigationBar::new(&links);
        let html = render(&Header::new(&nav, LOGO), &Snapshot::default());
        assert!(html.contains("src=\"/white.png\" alt=\"Milkyway football academy\""));
        assert!(html.contains("width=\"50\" height=\"50\""));
    }

    #[test]
    fn test_labels_are_escaped() {
        let links = vec![NavLinkEntry::new("Q&A", "/qa")];
        let nav = NavigationBar::new(&links);
        let html = render(&Header::new(&nav, LOGO), &Snapshot::default());
        assert!(html.contains(">Q&amp;A</a>"));
    }
}
