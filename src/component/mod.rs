//! Presentational units of the site.
//!
//! - `nav` - navigation state (scroll style, mobile menu, overlay transition)
//! - `header` - header and mobile overlay markup
//! - `card` - section cards
//! - `footer` - site footer

pub mod card;
pub mod footer;
pub mod header;
pub mod nav;

pub use card::SectionCard;
pub use footer::Footer;
pub use nav::Snapshot;
