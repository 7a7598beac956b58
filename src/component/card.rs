//! Section cards: fixed-height promotional blocks on the home page.
//!
//! Each card pairs a background image with a gradient overlay picked by its
//! [`SectionCategory`]. The category set is closed; unknown names are
//! rejected when parsed instead of rendering a card with no overlay.

use crate::utils::html::{escape, push_attr};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors raised while building a section card.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("unknown section card category `{0}` (expected one of: partners, players, facilities)")]
    UnknownCategory(String),
}

/// Visual category of a section card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionCategory {
    Partners,
    Players,
    Facilities,
}

/// Image and overlay for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPreset {
    pub image: &'static str,
    pub overlay: &'static str,
}

/// Layout shared by every overlay; only the gradient colors differ.
const OVERLAY_LAYOUT: &str = "flex flex-col h-full justify-center pl-64 absolute top-0 w-full z-20";

impl SectionCategory {
    pub const ALL: [Self; 3] = [Self::Partners, Self::Players, Self::Facilities];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Partners => "partners",
            Self::Players => "players",
            Self::Facilities => "facilities",
        }
    }

    /// Background image and gradient overlay for this category.
    pub const fn preset(self) -> CardPreset {
        match self {
            Self::Partners => CardPreset {
                image: "/section-card-f.jpg",
                overlay: "bg-gradient-to-r from-app-secondary via-10% to-transparent via-10% to-app-secondary",
            },
            Self::Players => CardPreset {
                image: "/section-card-pl.jpg",
                overlay: "bg-gradient-to-r from-app-primary via-10% to-transparent via-10% to-app-primary",
            },
            Self::Facilities => CardPreset {
                image: "/section-card-p.jpg",
                overlay: "bg-gradient-to-r from-black via-10% to-transparent via-10% to-black",
            },
        }
    }
}

impl FromStr for SectionCategory {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CardError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for SectionCategory {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectionCategory> for String {
    fn from(value: SectionCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One promotional block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCard {
    pub category: SectionCategory,
    pub title: String,
    pub quote: String,
    pub href: String,
}

impl SectionCard {
    pub fn new(
        category: SectionCategory,
        title: impl Into<String>,
        quote: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            quote: quote.into(),
            href: href.into(),
        }
    }

    /// Append the card markup to `out`.
    pub fn render_into(&self, out: &mut String) {
        let preset = self.category.preset();
        let title = escape(&self.title);

        out.push_str("<div class=\"relative min-h-[400px]\"");
        push_attr(out, "data-category", self.category.as_str());
        out.push_str(">\n");
        out.push_str("<div class=\"container py-16 text-white\">\n");
        out.push_str("<div class=\"flex flex-col w-full md:w-1/3\">\n");
        out.push_str("<div class=\"z-40 flex flex-col space-y-5\">\n");
        out.push_str("<h3 class=\"font-bold text-2xl md:text-7xl\">");
        out.push_str(&title);
        out.push_str("</h3>\n");
        out.push_str("<p class=\"font-Inter font-light text-base md:text-2xl\">&quot;");
        out.push_str(&escape(&self.quote));
        out.push_str("&quot;</p>\n");
        render_learn_more(out, &self.href);
        out.push_str("</div>\n</div>\n</div>\n");

        out.push_str("<div");
        push_attr(out, "class", &format!("{} {}", preset.overlay, OVERLAY_LAYOUT));
        out.push_str("></div>\n");

        out.push_str("<img class=\"absolute top-0 left-0 z-1 h-full w-full object-cover\"");
        push_attr(out, "src", preset.image);
        push_attr(out, "alt", &self.title);
        out.push_str(">\n</div>\n");
    }
}

/// Call-to-action link under the quote.
fn render_learn_more(out: &mut String, href: &str) {
    out.push_str("<a class=\"inline-block font-bold uppercase text-xl md:text-4xl hover:text-app-secondary\"");
    push_attr(out, "href", href);
    out.push_str(">Learn More</a>\n");
}
