//! Counts distinct catalog terms present in a patient's notes.

use crate::domain::catalog::RiskTermCatalog;
use crate::domain::normalize::normalize;
use crate::domain::ClinicalNote;
use std::sync::Arc;
use tracing::debug;

/// Separator between notes in the corpus. Cannot form part of any catalog word.
const NOTE_SEPARATOR: &str = " ";

/// Matches notes against a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct RiskTermMatcher {
    catalog: Arc<RiskTermCatalog>,
}

impl RiskTermMatcher {
    pub fn new(catalog: Arc<RiskTermCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RiskTermCatalog {
        &self.catalog
    }

    /// Number of distinct catalog entries found at least once. In `[0, catalog.len()]`.
    ///
    /// An empty note set yields 0 without consulting the catalog.
    pub fn count_matched_terms(&self, notes: &[ClinicalNote]) -> usize {
        if notes.is_empty() {
            return 0;
        }
        // SetMatches::len() is the set size, not the hit count.
        let count = self.catalog.matches(&corpus(notes)).iter().count();
        debug!(notes = notes.len(), term_count = count, "risk terms matched");
        count
    }

    /// The normalized patterns that matched, in catalog order.
    pub fn matched_terms(&self, notes: &[ClinicalNote]) -> Vec<&str> {
        if notes.is_empty() {
            return Vec::new();
        }
        self.catalog
            .matches(&corpus(notes))
            .into_iter()
            .map(|i| self.catalog.patterns()[i].as_str())
            .collect()
    }
}

/// All notes normalized and joined into one search target.
fn corpus(notes: &[ClinicalNote]) -> String {
    notes
        .iter()
        .map(|n| normalize(&n.text))
        .collect::<Vec<_>>()
        .join(NOTE_SEPARATOR)
}
