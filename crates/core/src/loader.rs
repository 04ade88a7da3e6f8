//! Web font registry
//!
//! A terminal cannot fetch remote font files, but the pairing flow still has
//! to know which stylesheet references a page embedding the result would
//! carry. [`FontLibrary`] keeps that set: an append-only, idempotent registry
//! of Google Fonts stylesheet links keyed by family and weight. Registration
//! never fails and never blocks on the network; whether the referenced
//! stylesheet actually resolves is not this registry's concern.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// One registered stylesheet reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontLink {
    /// Deterministic key, `font-{family}-{weight}` with spaces dashed
    pub id: String,
    /// Family name as returned by the backend (e.g. "Playfair Display")
    pub family: String,
    /// Registered weight
    pub weight: u16,
    /// Google Fonts css2 stylesheet URL for exactly this family and weight
    pub css_url: String,
    /// Specimen page where the family can be inspected and downloaded
    pub specimen_url: String,
}

/// Append-only registry of font stylesheet references.
///
/// Clones share the underlying registry, so the pairing controller can write
/// while the presentation layer reads its own handle.
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    links: Arc<RwLock<Vec<FontLink>>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family/weight combination, once.
    ///
    /// Idempotent: a combination already present is left untouched, so
    /// re-running a search never duplicates entries.
    pub fn ensure_loaded(&self, family: &str, weight: u16) {
        let id = link_id(family, weight);
        let mut links = self.links.write();
        if links.iter().any(|link| link.id == id) {
            return;
        }
        tracing::debug!(family, weight, "registering font stylesheet");
        links.push(FontLink {
            id,
            family: family.to_string(),
            weight,
            css_url: css2_url(family, weight),
            specimen_url: specimen_url(family),
        });
    }

    /// Snapshot of all registered links in insertion order.
    pub fn links(&self) -> Vec<FontLink> {
        self.links.read().clone()
    }

    /// Number of registered links.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    /// True when nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }
}

/// Deterministic registry key for a family/weight combination.
pub fn link_id(family: &str, weight: u16) -> String {
    format!("font-{}-{}", family.replace(' ', "-"), weight)
}

/// Google Fonts css2 URL loading exactly one family at one weight.
pub fn css2_url(family: &str, weight: u16) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@{}&display=swap",
        family.replace(' ', "+"),
        weight
    )
}

/// Google Fonts specimen page for a family.
pub fn specimen_url(family: &str) -> String {
    format!("https://fonts.google.com/specimen/{}", family.replace(' ', "+"))
}
