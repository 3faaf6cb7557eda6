// src/services/mod.rs

pub mod catalogs;     // startup loaders (locale JSON, taxonomy.toml, blacklists.toml)
pub mod search;       // search term -> storage-agnostic predicate
pub mod snapshot;     // immutable lexicon/blacklist snapshot + atomic swap
pub mod submission;   // question validation + censoring before persistence

// Public API
pub use search::{QuestionRecord, SearchFilter, SearchQuery, TermClause};
pub use snapshot::{Snapshot, TaxonomyStore};
pub use submission::{prepare_question, PreparedQuestion, QuestionDraft, SubmissionError};
