//! Risk term catalog. Fixed ordered list of patterns, compiled once at startup.
//!
//! Each entry is either a plain word or a small regex alternation covering
//! morphological variants. Patterns are normalized exactly like note text
//! before compilation, so matching is accent- and case-insensitive.

use crate::domain::DomainError;
use crate::domain::normalize::normalize;
use regex::{RegexSet, SetMatches};
use serde::Deserialize;
use std::path::Path;

/// Reference catalog (11 entries).
pub const REFERENCE_TERMS: &[&str] = &[
    "Hémoglobine A1C",
    "Microalbumine",
    "Taille",
    "Poids",
    // fumeur | fumeuse | fumer | smoker | smoking | smoke
    "(?:fum(?:eur|euse|er)|smok(?:er|ing|e))",
    "anormal(?:e)?",
    "Cholestérol",
    "vertige(?:s)?",
    "rechute(?:s)?",
    "réaction(?:s)?",
    "anticorps",
];

/// Accepted shapes for an externalized catalog file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<String>),
    Object { terms: Vec<String> },
}

/// Immutable, compiled catalog. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RiskTermCatalog {
    patterns: Vec<String>,
    set: RegexSet,
}

impl RiskTermCatalog {
    /// Compile the reference catalog.
    pub fn reference() -> Result<Self, DomainError> {
        Self::from_patterns(REFERENCE_TERMS.iter().copied())
    }

    /// Normalize and compile the given patterns, preserving their order.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .collect();
        if patterns.is_empty() {
            return Err(DomainError::Catalog("catalog has no terms".into()));
        }
        if let Some(pos) = patterns.iter().position(|p| p.is_empty()) {
            return Err(DomainError::Catalog(format!("term #{} is blank", pos + 1)));
        }
        let set = RegexSet::new(&patterns)
            .map_err(|e| DomainError::Catalog(format!("invalid pattern: {}", e)))?;
        Ok(Self { patterns, set })
    }

    /// Load a catalog from a JSON file: either `["..", ..]` or `{"terms": [..]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Catalog(format!("parse {}: {}", path.display(), e)))?;
        let terms = match file {
            CatalogFile::List(terms) | CatalogFile::Object { terms } => terms,
        };
        Self::from_patterns(terms)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Normalized pattern source, in catalog order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Which entries match somewhere in an already-normalized `corpus`.
    pub(crate) fn matches(&self, corpus: &str) -> SetMatches {
        self.set.matches(corpus)
    }
}
