//! Configuration section definitions.
//!
//! Each module corresponds to a section in `milkyway.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Brand, domain, fixed asset paths         |
//! | `nav`   | `[nav]`      | Header links, near-top margin, overlay   |
//! | `build` | `[build]`    | Output directory                         |
//! | `page`  | `[[pages]]`  | Pages to render and their section cards  |

pub mod build;
pub mod nav;
pub mod page;
pub mod site;

pub use build::BuildSectionConfig;
pub use nav::NavConfig;
pub use page::{PageConfig, default_pages, validate_pages};
pub use site::SiteInfoConfig;
