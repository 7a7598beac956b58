//! Page metadata: title, description, Open Graph and Twitter Card tags.
//!
//! Pure data. [`PageMeta::resolve`] applies the two fallbacks (brand name for
//! the title, empty description) and [`PageMeta::tags`] expands the result
//! into the fixed, ordered tag set written into `<head>`.

use crate::config::SiteInfoConfig;
use crate::utils::html::push_attr;
use serde::Serialize;

/// Resolved title and description of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Full document title, brand suffix included.
    pub title: String,
    pub description: String,
    /// `{domain}{path}`.
    pub url: String,
    pub image: String,
}

/// A single `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<&'static str>,
    pub content: String,
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            name: Some(name),
            property: None,
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            name: None,
            property: Some(property),
            content: content.into(),
        }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("<meta");
        if let Some(name) = self.name {
            push_attr(out, "name", name);
        }
        if let Some(property) = self.property {
            push_attr(out, "property", property);
        }
        push_attr(out, "content", &self.content);
        out.push('>');
    }
}

impl PageMeta {
    /// Apply fallbacks and build the canonical URL for `path`.
    pub fn resolve(
        site: &SiteInfoConfig,
        path: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        let title = title.unwrap_or(site.brand.as_str());
        Self {
            title: format!("{title} - {}", site.brand),
            description: description.unwrap_or_default().to_string(),
            url: format!("{}{}", site.origin(), normalize_path(path)),
            image: site.image.clone(),
        }
    }

    /// Tags in `<head>` order.
    pub fn tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::name("description", &self.description),
            MetaTag::property("og:site_name", &self.title),
            MetaTag::property("og:type", "website"),
            MetaTag::property("twitter:card", "summary_large_image"),
            MetaTag {
                name: Some("ogUrl"),
                property: Some("og:url"),
                content: self.url.clone(),
            },
            MetaTag::property("og:title", &self.title),
            MetaTag::property("og:description", &self.description),
            MetaTag::property("og:image", &self.image),
            MetaTag::property("twitter:url", &self.url),
            MetaTag::property("twitter:title", &self.title),
            MetaTag::property("twitter:description", &self.description),
            MetaTag::property("twitter:image", &self.image),
        ]
    }
}

/// Ensure a leading slash: `news` -> `/news`, `` -> `/`.
fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
