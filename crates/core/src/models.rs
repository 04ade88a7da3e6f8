//! Core data models for fontpair-core
//!
//! This module contains the wire types exchanged with the generation
//! backend and the enums the controllers index them by.
//!
//! ## Key Types
//!
//! - [`FontRecommendation`] - One typographic role's family and weight
//! - [`PairingResult`] - The atomic result of a pairing request
//! - [`CodeSnippets`] - Integration snippets for a pairing
//! - [`FontRole`] - The three typographic roles
//! - [`SnippetTab`] - The three snippet kinds shown as export tabs
//!
//! ## Example
//!
//! ```rust
//! use fontpair_core::models::FontRole;
//!
//! assert_eq!(FontRole::Headline.label(), "Headline");
//! ```

use serde::{Deserialize, Serialize};

/// A single font recommendation: a Google Fonts family name and a numeric
/// weight (typically 100-900, no enforced range).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FontRecommendation {
    /// The Google Font family name (e.g. "Playfair Display")
    pub name: String,
    /// Numeric font weight (e.g. 700)
    pub weight: u16,
}

impl FontRecommendation {
    pub fn new(name: impl Into<String>, weight: u16) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A complete pairing produced by one generation call.
///
/// Either the whole struct exists or nothing does; there is no partial or
/// incremental construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairingResult {
    /// Recommended font for headlines
    pub headline: FontRecommendation,
    /// Recommended font for body text
    pub body: FontRecommendation,
    /// Recommended font for accents or secondary headings
    pub accent: FontRecommendation,
    /// 2-3 sentence explanation of why the combination works
    pub reasoning: String,
}

impl PairingResult {
    /// Get the recommendation assigned to a typographic role.
    pub fn role(&self, role: FontRole) -> &FontRecommendation {
        match role {
            FontRole::Headline => &self.headline,
            FontRole::Body => &self.body,
            FontRole::Accent => &self.accent,
        }
    }
}

/// The three typographic roles a recommended font can be assigned to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FontRole {
    Headline,
    Body,
    Accent,
}

impl FontRole {
    /// All roles in display order.
    pub const ALL: [FontRole; 3] = [FontRole::Headline, FontRole::Body, FontRole::Accent];

    /// Human-readable label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            FontRole::Headline => "Headline",
            FontRole::Body => "Body",
            FontRole::Accent => "Accent",
        }
    }
}

/// Integration code snippets produced by the second generation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeSnippets {
    /// `<link>` tags importing all required Google Fonts, preconnects included
    pub html: String,
    /// `@import` plus custom properties per role and example selector usage
    pub css: String,
    /// Full `tailwind.config.js` extending `fontFamily` with the three roles
    pub tailwind: String,
}

impl CodeSnippets {
    /// Get the snippet text shown under a given export tab.
    pub fn tab(&self, tab: SnippetTab) -> &str {
        match tab {
            SnippetTab::Html => &self.html,
            SnippetTab::Css => &self.css,
            SnippetTab::Tailwind => &self.tailwind,
        }
    }
}

/// The three export tabs, one per snippet kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SnippetTab {
    Html,
    Css,
    Tailwind,
}

impl SnippetTab {
    /// All tabs in display order.
    pub const ALL: [SnippetTab; 3] = [SnippetTab::Html, SnippetTab::Css, SnippetTab::Tailwind];

    /// Tab label as rendered in the export panel.
    pub fn label(&self) -> &'static str {
        match self {
            SnippetTab::Html => "HTML",
            SnippetTab::Css => "CSS",
            SnippetTab::Tailwind => "TAILWIND",
        }
    }

    /// The next tab to the right, saturating at the last one.
    pub fn next(&self) -> SnippetTab {
        match self {
            SnippetTab::Html => SnippetTab::Css,
            SnippetTab::Css => SnippetTab::Tailwind,
            SnippetTab::Tailwind => SnippetTab::Tailwind,
        }
    }

    /// The previous tab to the left, saturating at the first one.
    pub fn prev(&self) -> SnippetTab {
        match self {
            SnippetTab::Html => SnippetTab::Html,
            SnippetTab::Css => SnippetTab::Html,
            SnippetTab::Tailwind => SnippetTab::Css,
        }
    }
}

impl Default for SnippetTab {
    /// CSS is the tab shown first in the export panel.
    fn default() -> Self {
        SnippetTab::Css
    }
}
