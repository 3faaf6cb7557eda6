//! Multilingual taxonomy resolver.
//!
//! A canonical key matches a search term when the normalized term is a
//! substring of the key's normalized label in any language, or of the
//! normalized key itself. There is no scoring: a key is in or out.

use std::sync::Arc;

use crate::error::LexiconError;
use crate::normalize::{for_matching, normalize_term};
use crate::types::{Lexicon, MatchResult, TaxonomyKind};

#[derive(Debug, Clone)]
pub struct TaxonomyResolver {
    lexicon: Arc<Lexicon>,
}

impl TaxonomyResolver {
    /// Wrap a fully loaded lexicon. An empty lexicon, or one with keys that
    /// have no classification and no fallback, is a startup defect and is
    /// reported rather than silently resolving nothing.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, LexiconError> {
        if lexicon.is_empty() {
            return Err(LexiconError::configuration(
                "lexicon has no catalogs and no classified keys",
            ));
        }
        let unclassified: Vec<&str> = lexicon
            .keys()
            .into_iter()
            .filter(|key| lexicon.kind_of(key).is_none())
            .collect();
        if !unclassified.is_empty() {
            return Err(LexiconError::configuration(format!(
                "taxonomy keys without classification: {}",
                unclassified.join(", ")
            )));
        }
        Ok(Self { lexicon })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Every canonical key whose label (any language) or raw name contains
    /// `term`, split by classification. Blank terms match nothing.
    pub fn resolve_search_term(&self, term: &str) -> MatchResult {
        let needle = normalize_term(term);
        let mut out = MatchResult::default();
        if needle.is_empty() {
            return out;
        }

        for key in self.lexicon.keys() {
            if !self.key_contains(&needle, key) {
                continue;
            }
            // Every key is classified; checked in `new`.
            if let Some(kind) = self.lexicon.kind_of(key) {
                out.insert(kind, key);
            }
        }

        tracing::debug!(
            term,
            categories = out.categories.len(),
            districts = out.districts.len(),
            "resolved search term"
        );
        out
    }

    /// Narrow check against a known category and/or district.
    ///
    /// True if either given key matches `term` under the same rule as
    /// [`resolve_search_term`](Self::resolve_search_term).
    pub fn matches_taxonomy(&self, term: &str, category: Option<&str>, district: Option<&str>) -> bool {
        let needle = normalize_term(term);
        if needle.is_empty() {
            return false;
        }
        [category, district]
            .into_iter()
            .flatten()
            .filter(|key| !key.trim().is_empty())
            .any(|key| self.key_contains(&needle, key))
    }

    /// Single-key predicate shared by both entry points.
    pub fn matches_key(&self, term: &str, key: &str) -> bool {
        let needle = normalize_term(term);
        !needle.is_empty() && self.key_contains(&needle, key)
    }

    /// Convenience: does `key` of `kind` appear in the resolution of `term`.
    pub fn resolves_to(&self, term: &str, kind: TaxonomyKind, key: &str) -> bool {
        self.lexicon.kind_of(key) == Some(kind)
            && self.lexicon.keys().contains(key)
            && self.matches_key(term, key)
    }

    fn key_contains(&self, needle: &str, key: &str) -> bool {
        // Missing labels count as no-match for that language only.
        let label_hit = self.lexicon.languages().any(|lang| {
            self.lexicon
                .label(lang, key)
                .is_some_and(|label| for_matching(label).contains(needle))
        });
        label_hit || for_matching(key).contains(needle)
    }
}
