//! Page shell: `<head>` metadata plus header, content, and footer.

use crate::component::header::{Header, Logo, OVERLAY_SELECTOR};
use crate::component::{Footer, Snapshot};
use crate::config::{PageConfig, SiteConfig};
use crate::embed::{NAV_JS, NavVars};
use crate::seo::PageMeta;
use crate::utils::html::{escape, push_attr};

const MAIN_CLASS: &str = "flex flex-col min-h-screen bg-gray-100";

/// Wraps page content in the site layout.
pub struct PageWrapper<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageWrapper<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Render a complete document around `children`.
    ///
    /// `children` is trusted markup and is inserted as-is.
    pub fn render(
        &self,
        children: &str,
        path: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> String {
        let site = &self.config.site;
        let meta = PageMeta::resolve(site, path, title, description);
        let nav = self.config.nav.navigation_bar();
        let logo = Logo {
            src: &site.logo,
            alt: &site.logo_alt,
        };

        let mut out = String::with_capacity(8192 + children.len());
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

        out.push_str("<title>");
        out.push_str(&escape(&meta.title));
        out.push_str("</title>\n");
        for tag in meta.tags() {
            tag.render_into(&mut out);
            out.push('\n');
        }

        out.push_str("<link rel=\"icon\" type=\"image/png\" sizes=\"32x32\"");
        push_attr(&mut out, "href", &site.favicon);
        out.push_str(">\n");

        out.push_str("<style>");
        out.push_str(&nav.transition().to_css(OVERLAY_SELECTOR));
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str("<div class=\"overflow-hidden\">\n");
        // Static output starts scrolled to the top; nav.js takes over on load.
        let viewport = Snapshot::new(0.0, 0.0);
        Header::new(&nav, logo).render_into(&mut out, &viewport);

        out.push_str("<main");
        push_attr(&mut out, "class", MAIN_CLASS);
        out.push_str(">\n");
        out.push_str(children);
        out.push_str("</main>\n");

        Footer {
            logo,
            links: &self.config.nav.links,
            copyright: &site.copyright,
        }
        .render_into(&mut out);
        out.push_str("</div>\n");

        out.push_str("<script>\n");
        out.push_str(&NAV_JS.render(&NavVars::from_nav(&nav)));
        out.push_str("</script>\n</body>\n</html>\n");
        out
    }

    /// Render a configured page: raw content followed by its cards.
    pub fn render_page(&self, page: &PageConfig) -> String {
        let mut children = String::new();
        if let Some(content) = &page.content {
            children.push_str(content);
            children.push('\n');
        }
        for card in &page.cards {
            card.render_into(&mut children);
        }

        self.render(
            &children,
            &page.path,
            page.title.as_deref(),
            page.description.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::SectionCard;
    use crate::component::card::SectionCategory;

    #[test]
    fn test_default_title_and_description() {
        let config = SiteConfig::default();
        let html = PageWrapper::new(&config).render("<p>hi</p>", "/", None, None);
        assert!(html.contains(
            "<title>Milkyway Football Academy - Milkyway Football Academy</title>"
        ));
        assert!(html.contains("<meta name=\"description\" content=\"\">"));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::default();
        let html = PageWrapper::new(&config).render("", "/news", Some("News"), Some("X"));
        assert!(html.contains("<title>News - Milkyway Football Academy</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"X\">"));
        assert!(html.contains(
            "property=\"og:url\" content=\"https://milkywayfootballacademy.com/news\""
        ));
    }

    #[test]
    fn test_layout_order() {
        let config = SiteConfig::default();
        let html = PageWrapper::new(&config).render("<p id=\"child\"></p>", "/", None, None);

        let header = html.find("<header").unwrap();
        let main = html.find("<main class=\"flex flex-col min-h-screen bg-gray-100\">").unwrap();
        let child = html.find("<p id=\"child\">").unwrap();
        let footer = html.find("<footer").unwrap();
        let script = html.find("<script>").unwrap();
        assert!(header < main && main < child && child < footer && footer < script);
    }

    #[test]
    fn test_head_assets() {
        let config = SiteConfig::default();
        let html = PageWrapper::new(&config).render("", "/", None, None);
        assert!(html.contains("<link rel=\"icon\" type=\"image/png\" sizes=\"32x32\" href=\"/blue.png\">"));
        assert!(html.contains("@keyframes mobile-menu-enter"));
        assert!(html.contains("bg-transparent"));
    }

    #[test]
    fn test_render_page_with_cards() {
        let config = SiteConfig::default();
        let mut page = PageConfig::new("/programs");
        page.title = Some("Programs".into());
        page.content = Some("<section id=\"intro\"></section>".into());
        page.cards
            .push(SectionCard::new(SectionCategory::Players, "Players", "Train hard", "/players"));

        let html = PageWrapper::new(&config).render_page(&page);
        assert!(html.contains("<title>Programs - Milkyway Football Academy</title>"));
        let intro = html.find("<section id=\"intro\">").unwrap();
        let card = html.find("data-category=\"players\"").unwrap();
        assert!(intro < card);
        assert!(html.contains("/section-card-pl.jpg"));
    }
}
