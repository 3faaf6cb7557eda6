// Public modules so forum-core can use them
pub mod error;
pub mod matcher;
pub mod moderation;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use error::LexiconError;
pub use matcher::{WordMatcher, MASK};
pub use moderation::{censor, censor_counted, contains_disallowed, count_disallowed, ModerationFilter};
pub use normalize::{for_matching, normalize_term};
pub use resolver::TaxonomyResolver;
pub use types::{
    BlacklistSet, CensoredText, Classification, LanguageCode, Lexicon, MatchResult, TaxonomyKind,
    DEFAULT_RESERVED_KEYS,
};

/// --- JSON convenience for callers that hold the search term only ---
pub fn resolve_search_term_json(resolver: &TaxonomyResolver, term: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&resolver.resolve_search_term(term))
}
