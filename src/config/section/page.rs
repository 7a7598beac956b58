//! `[[pages]]` configuration: the pages to render.
//!
//! # Example
//!
//! ```toml
//! [[pages]]
//! path = "/news"
//! title = "News"
//! description = "Latest from the academy"
//!
//! [[pages.cards]]
//! category = "players"
//! title = "Players"
//! quote = "Talent wins games"
//! href = "/players"
//! ```

use crate::component::SectionCard;
use crate::component::card::SectionCategory;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::permalink;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Site-relative route, e.g. `/` or `/news`.
    pub path: String,

    /// Title override. The brand name is used when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Description override. Empty when absent.
    #[serde(default)]
    pub description: Option<String>,

    /// Trusted raw HTML placed before the cards.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub cards: Vec<SectionCard>,
}

impl PageConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            description: None,
            content: None,
            cards: Vec::new(),
        }
    }
}

/// The home page with one card per category.
pub fn default_pages() -> Vec<PageConfig> {
    let cards = SectionCategory::ALL
        .into_iter()
        .map(|category| {
            let (title, quote, href) = match category {
                SectionCategory::Partners => (
                    "Partners",
                    "Great clubs are built together",
                    "/partners",
                ),
                SectionCategory::Players => (
                    "Players",
                    "Every champion was once a beginner",
                    "/players",
                ),
                SectionCategory::Facilities => (
                    "Facilities",
                    "World-class pitches for tomorrow's stars",
                    "/facilities",
                ),
            };
            SectionCard::new(category, title, quote, href)
        })
        .collect();

    vec![PageConfig {
        cards,
        ..PageConfig::new("/")
    }]
}

/// Check routes and card links of every page.
pub fn validate_pages(pages: &[PageConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashMap::default();

    for page in pages {
        if !page.path.starts_with('/') {
            diag.error_with_hint(
                FieldPath::new("pages.path"),
                format!("`{}` is not a site-relative path", page.path),
                "routes start with `/`, e.g. \"/news\"",
            );
        }
        if page.path.split('/').any(|seg| seg == "..") {
            diag.error(
                FieldPath::new("pages.path"),
                format!("`{}` must not contain `..`", page.path),
            );
        }
        match seen.entry(permalink(&page.path)) {
            Entry::Occupied(first) => diag.error_with_hint(
                FieldPath::new("pages.path"),
                format!("`{}` renders to the same file as `{}`", page.path, first.get()),
                "give every page a distinct route",
            ),
            Entry::Vacant(slot) => {
                slot.insert(page.path.as_str());
            }
        }
        for card in &page.cards {
            if card.href.trim().is_empty() {
                diag.error(
                    FieldPath::new("pages.cards.href"),
                    format!("card `{}` on `{}` has no link", card.title, page.path),
                );
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_valid() {
        let pages = default_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].cards.len(), 3);

        let mut diag = ConfigDiagnostics::new();
        validate_pages(&pages, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_duplicate_and_relative_paths() {
        let pages = vec![
            PageConfig::new("/news"),
            PageConfig::new("/news/"),
            PageConfig::new("matches"),
            PageConfig::new("/a/../b"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_pages(&pages, &mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_paths_sharing_an_output_file_are_duplicates() {
        let pages = vec![
            PageConfig::new("/news"),
            PageConfig::new("//news"),
            PageConfig::new("/./news"),
            PageConfig::new("/news/players"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_pages(&pages, &mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].message.contains("`//news` renders to the same file as `/news`"));
        assert!(diag.errors()[1].message.contains("`/./news` renders to the same file as `/news`"));
    }

    #[test]
    fn test_parse_page_with_cards() {
        let page: PageConfig = toml::from_str(
            r#"
            path = "/news"
            title = "News"

            [[cards]]
            category = "facilities"
            title = "Facilities"
            quote = "Train like a pro"
            href = "/facilities"
            "#,
        )
        .unwrap();
        assert_eq!(page.title.as_deref(), Some("News"));
        assert_eq!(page.description, None);
        assert_eq!(page.cards[0].category, SectionCategory::Facilities);
    }
}
