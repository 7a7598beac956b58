//! `[site]` configuration.
//!
//! Brand and fixed asset paths shared by every page.
//!
//! # Example
//!
//! ```toml
//! [site]
//! brand = "Milkyway Football Academy"
//! domain = "https://milkywayfootballacademy.com"
//! image = "/thumbnail.jpg"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BRAND: &str = "Milkyway Football Academy";
pub const DEFAULT_DOMAIN: &str = "https://milkywayfootballacademy.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Brand name. Default page title and fixed title suffix.
    pub brand: String,

    /// Absolute site origin used for canonical and social URLs.
    pub domain: String,

    /// Social preview image.
    pub image: String,

    /// 32x32 PNG favicon.
    pub favicon: String,

    /// Header and footer logo.
    pub logo: String,

    /// Logo alt text.
    pub logo_alt: String,

    /// Footer copyright line.
    pub copyright: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.into(),
            domain: DEFAULT_DOMAIN.into(),
            image: "/thumbnail.jpg".into(),
            favicon: "/blue.png".into(),
            logo: "/white.png".into(),
            logo_alt: "Milkyway football academy".into(),
            copyright: format!("© {DEFAULT_BRAND}"),
        }
    }
}

impl SiteInfoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.brand.trim().is_empty() {
            diag.error(FieldPath::new("site.brand"), "brand must not be empty");
        }

        match url::Url::parse(&self.domain) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                if url.path() != "/" || url.query().is_some() {
                    diag.error_with_hint(
                        FieldPath::new("site.domain"),
                        format!("`{}` must be an origin without path or query", self.domain),
                        "use e.g. \"https://milkywayfootballacademy.com\"",
                    );
                }
            }
            _ => diag.error_with_hint(
                FieldPath::new("site.domain"),
                format!("`{}` is not an absolute http(s) URL", self.domain),
                "use e.g. \"https://milkywayfootballacademy.com\"",
            ),
        }
    }

    /// Domain without a trailing slash, ready for `{domain}{path}` joins.
    pub fn origin(&self) -> &str {
        self.domain.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(domain: &str) -> ConfigDiagnostics {
        let info = SiteInfoConfig {
            domain: domain.into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default_is_valid() {
        assert!(check(DEFAULT_DOMAIN).is_empty());
        assert!(check("https://example.com/").is_empty());
    }

    #[test]
    fn test_rejects_bad_domains() {
        assert_eq!(check("milkyway").len(), 1);
        assert_eq!(check("ftp://example.com").len(), 1);
        assert_eq!(check("https://example.com/blog").len(), 1);
    }

    #[test]
    fn test_origin_trims_slash() {
        let info = SiteInfoConfig {
            domain: "https://example.com/".into(),
            ..Default::default()
        };
        assert_eq!(info.origin(), "https://example.com");
    }
}
