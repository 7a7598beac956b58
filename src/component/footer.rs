//! Site footer.

use super::header::Logo;
use super::nav::NavLinkEntry;
use crate::utils::html::{escape, push_attr};

pub struct Footer<'a> {
    pub logo: Logo<'a>,
    pub links: &'a [NavLinkEntry],
    pub copyright: &'a str,
}

impl Footer<'_> {
    pub fn render_into(&self, out: &mut String) {
        out.push_str("<footer class=\"bg-app-primary text-white\">\n");
        out.push_str(
            "<div class=\"container py-10 flex flex-col md:flex-row items-center justify-between space-y-6 md:space-y-0\">\n",
        );

        out.push_str("<a href=\"/\"><img width=\"50\" height=\"50\"");
        push_attr(out, "src", self.logo.src);
        push_attr(out, "alt", self.logo.alt);
        out.push_str("></a>\n");

        out.push_str("<ul class=\"flex flex-wrap justify-center gap-x-5 gap-y-2 uppercase\" data-nav=\"footer\">\n");
        for link in self.links {
            out.push_str("<li><a");
            push_attr(out, "href", &link.href);
            out.push('>');
            out.push_str(&escape(&link.label));
            out.push_str("</a></li>\n");
        }
        out.push_str("</ul>\n");

        out.push_str("<p class=\"text-sm opacity-70\">");
        out.push_str(&escape(self.copyright));
        out.push_str("</p>\n</div>\n</footer>\n");
    }
}
