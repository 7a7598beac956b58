//! Page route - URL path to output file mapping.

use std::path::{Path, PathBuf};

/// Where a page lives on the site and on disk.
///
/// # Example
///
/// ```text
/// PageRoute {
///     permalink:   /news
///     output_file: public/news/index.html
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// URL path with a leading slash and no trailing slash (except `/`).
    pub permalink: String,
    /// Output HTML file.
    pub output_file: PathBuf,
}

impl PageRoute {
    /// Route for `path` under `output_dir`.
    ///
    /// `/` maps to `index.html`, `/a/b` and `/a/b/` to `a/b/index.html`.
    pub fn new(path: &str, output_dir: &Path) -> Self {
        let segments = segments(path);
        let permalink = format!("/{}", segments.join("/"));
        let output_file = segments
            .iter()
            .fold(output_dir.to_path_buf(), |dir, seg| dir.join(seg))
            .join("index.html");

        Self {
            permalink,
            output_file,
        }
    }
}

/// Canonical permalink of `path`. Paths with equal permalinks share one
/// output file.
pub fn permalink(path: &str) -> String {
    format!("/{}", segments(path).join("/"))
}

/// Non-empty path segments, `.` dropped.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect()
}
