//! Search-engine and social-preview metadata.

pub mod og;

pub use og::{MetaTag, PageMeta};
