//! services/search.rs
//! Turns a question search request into a storage-agnostic predicate.
//!
//! Exact category / district / author filters are ANDed. A non-blank search
//! term adds an OR group: question text contains the term, or the question's
//! category or district is one the term resolves to in any language.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use lexicon::{for_matching, normalize_term, TaxonomyResolver};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Restrict to one author ("my questions").
    #[serde(default)]
    pub author_id: Option<String>,
}

/// OR group produced by a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermClause {
    pub text_contains: String,
    pub categories: BTreeSet<String>,
    pub districts: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub district: Option<String>,
    pub any_of: Option<TermClause>,
}

/// The slice of a stored question the predicate looks at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub category: String,
    pub district: String,
    pub author_id: String,
}

impl SearchFilter {
    pub fn build(query: &SearchQuery, resolver: &TaxonomyResolver) -> Self {
        let any_of = query
            .term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|term| {
                let matched = resolver.resolve_search_term(term);
                TermClause {
                    text_contains: term.to_string(),
                    categories: matched.categories,
                    districts: matched.districts,
                }
            });

        Self {
            author_id: non_blank(query.author_id.as_deref()),
            category: non_blank(query.category.as_deref()),
            district: non_blank(query.district.as_deref()),
            any_of,
        }
    }

    /// Evaluate the predicate in memory.
    pub fn matches(&self, q: &QuestionRecord) -> bool {
        if self.author_id.as_deref().is_some_and(|a| a != q.author_id) {
            return false;
        }
        if self.category.as_deref().is_some_and(|c| c != q.category) {
            return false;
        }
        if self.district.as_deref().is_some_and(|d| d != q.district) {
            return false;
        }
        match &self.any_of {
            None => true,
            Some(clause) => {
                for_matching(&q.text).contains(&normalize_term(&clause.text_contains))
                    || clause.categories.contains(&q.category)
                    || clause.districts.contains(&q.district)
            }
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == SearchFilter::default()
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
