//! Site building.
//!
//! Build phases:
//! - **Init** - optionally clean, then create the output directory
//! - **Render** - wrap every configured page, in parallel
//! - **Write** - write each page to `<output>/<path>/index.html`

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::{
    config::SiteConfig,
    debug, log,
    logger::ProgressLine,
    page::{PageRoute, PageWrapper},
    utils::plural_count,
};

/// Build the entire site. Returns the routes that were written.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<Vec<PageRoute>> {
    let output = config.output_dir();
    init_output(output, config.build.clean)?;

    let progress = (!quiet).then(|| ProgressLine::new(&[("pages", config.pages.len())]));
    let wrapper = PageWrapper::new(config);

    let routes = config
        .pages
        .par_iter()
        .map(|page| -> Result<PageRoute> {
            let route = PageRoute::new(&page.path, output);
            let html = wrapper.render_page(page);
            write_page(&route, &html)?;
            if let Some(p) = &progress {
                p.inc("pages");
            }
            Ok(route)
        })
        .collect::<Result<Vec<_>>>();

    if let Some(p) = progress {
        p.finish();
    }
    let routes = routes?;

    if !quiet {
        log!(
            "build";
            "{} written to {}",
            plural_count(routes.len(), "page"),
            output.display()
        );
    }
    Ok(routes)
}

/// Prepare the output directory.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        debug!("build"; "cleaning {}", output.display());
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

fn write_page(route: &PageRoute, html: &str) -> Result<()> {
    if let Some(parent) = route.output_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&route.output_file, html)
        .with_context(|| format!("Failed to write {}", route.output_file.display()))?;
    debug!("build"; "{} -> {}", route.permalink, route.output_file.display());
    Ok(())
}
