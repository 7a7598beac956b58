//! `meta` command: print a page's metadata tags as JSON.

use anyhow::Result;
use serde::Serialize;

use crate::cli::MetaArgs;
use crate::config::SiteConfig;
use crate::seo::{MetaTag, PageMeta};

#[derive(Debug, Serialize)]
struct MetaOutput {
    #[serde(flatten)]
    meta: PageMeta,
    tags: Vec<MetaTag>,
}

/// Resolve metadata for `args.path`.
///
/// CLI overrides win over the matching `[[pages]]` entry, which wins over
/// the built-in fallbacks.
fn resolve(args: &MetaArgs, config: &SiteConfig) -> PageMeta {
    let wanted = args.path.trim_end_matches('/');
    let page = config
        .pages
        .iter()
        .find(|p| p.path.trim_end_matches('/') == wanted);

    let title = args
        .title
        .as_deref()
        .or_else(|| page.and_then(|p| p.title.as_deref()));
    let description = args
        .description
        .as_deref()
        .or_else(|| page.and_then(|p| p.description.as_deref()));

    PageMeta::resolve(&config.site, &args.path, title, description)
}

fn to_json(args: &MetaArgs, config: &SiteConfig) -> Result<String> {
    let meta = resolve(args, config);
    let output = MetaOutput {
        tags: meta.tags(),
        meta,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

pub fn print_meta(args: &MetaArgs, config: &SiteConfig) -> Result<()> {
    println!("{}", to_json(args, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use serde_json::Value;

    fn args(path: &str) -> MetaArgs {
        MetaArgs {
            path: path.into(),
            title: None,
            description: None,
            pretty: false,
        }
    }

    #[test]
    fn test_json_shape() {
        let config = SiteConfig::default();
        let json: Value = serde_json::from_str(&to_json(&args("/"), &config).unwrap()).unwrap();

        assert_eq!(
            json["title"],
            "Milkyway Football Academy - Milkyway Football Academy"
        );
        assert_eq!(json["description"], "");
        assert_eq!(json["url"], "https://milkywayfootballacademy.com/");
        assert_eq!(json["tags"].as_array().unwrap().len(), 12);
        assert_eq!(json["tags"][4]["name"], "ogUrl");
        assert_eq!(json["tags"][4]["property"], "og:url");
        assert!(json["tags"][0].get("property").is_none());
    }

    #[test]
    fn test_configured_page_then_cli_override() {
        let mut config = SiteConfig::default();
        let mut news = PageConfig::new("/news");
        news.title = Some("News".into());
        news.description = Some("Latest".into());
        config.pages.push(news);

        let meta = resolve(&args("/news/"), &config);
        assert_eq!(meta.title, "News - Milkyway Football Academy");
        assert_eq!(meta.description, "Latest");

        let mut overridden = args("/news");
        overridden.title = Some("Headlines".into());
        let meta = resolve(&overridden, &config);
        assert_eq!(meta.title, "Headlines - Milkyway Football Academy");
        assert_eq!(meta.description, "Latest");
    }
}
