//! `validate` command: load and check the configuration without rendering.
//!
//! Loading already rejects unknown card categories and invalid fields, so
//! reaching this point means the config is sound. The command reports what
//! a build would produce.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

/// Summary of a loaded configuration.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    pages: usize,
    cards: usize,
    links: usize,
}

impl Summary {
    fn of(config: &SiteConfig) -> Self {
        Self {
            pages: config.pages.len(),
            cards: config.pages.iter().map(|p| p.cards.len()).sum(),
            links: config.nav.links.len(),
        }
    }
}

pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let summary = Summary::of(config);
    let source = if config.config_path.as_os_str().is_empty() {
        "built-in defaults".to_string()
    } else {
        config.config_path.display().to_string()
    };

    log!("validate"; "{} ok", source);
    log!(
        "validate";
        "{}, {}, {}",
        plural_count(summary.pages, "page"),
        plural_count(summary.cards, "section card"),
        plural_count(summary.links, "nav link")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_defaults() {
        let summary = Summary::of(&SiteConfig::default());
        assert_eq!(
            summary,
            Summary {
                pages: 1,
                cards: 3,
                links: 6,
            }
        );
    }
}
