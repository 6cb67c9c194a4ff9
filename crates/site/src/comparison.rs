//! Side-by-side comparison selection.
//!
//! A visitor can line up at most three tools. The selection lives in the
//! session and every mutation is checked against the catalog, so a stored
//! selection is always well-formed. Rejections are silent; the page simply
//! re-renders.

use serde::{Deserialize, Serialize};

use ai_tools_hub_core::ToolSlug;

use crate::catalog::{Catalog, Tool};

/// Maximum number of tools in a comparison.
pub const MAX_COMPARE: usize = 3;

/// Minimum number of selected tools before the comparison table renders.
pub const MIN_COMPARE_TABLE: usize = 2;

/// An ordered, duplicate-free set of up to [`MAX_COMPARE`] tool slugs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonSelection {
    slugs: Vec<ToolSlug>,
}

impl ComparisonSelection {
    /// Try to add a slug to the selection. Returns whether it was added.
    ///
    /// Rejected without error when the selection is full, the slug is
    /// already selected, or the slug resolves to no catalog tool.
    pub fn add(&mut self, catalog: &Catalog, slug: &str) -> bool {
        if self.is_full() || self.contains(slug) || catalog.tool(slug).is_none() {
            return false;
        }
        self.slugs.push(ToolSlug::from(slug));
        true
    }

    /// Remove a slug. Removing a slug that is not selected is a no-op.
    pub fn remove(&mut self, slug: &str) -> bool {
        let before = self.slugs.len();
        self.slugs.retain(|s| s.as_str() != slug);
        self.slugs.len() != before
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s.as_str() == slug)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slugs.len() >= MAX_COMPARE
    }

    /// Selected slugs in insertion order.
    #[must_use]
    pub fn slugs(&self) -> &[ToolSlug] {
        &self.slugs
    }

    /// Resolve the selection against the catalog, in insertion order.
    ///
    /// A slug that fails to resolve (possible when a stale session outlives
    /// a fixture change) is dropped rather than surfaced as an error.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tool> {
        self.slugs
            .iter()
            .filter_map(|slug| catalog.tool(slug.as_str()))
            .collect()
    }
}
