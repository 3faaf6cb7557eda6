pub mod commands;
pub mod config;
pub mod services;
pub mod utils;

pub use commands::{Commands, ModerationReport};
pub use config::ForumConfig;
pub use services::{
    PreparedQuestion, QuestionDraft, QuestionRecord, SearchFilter, SearchQuery, Snapshot,
    SubmissionError, TaxonomyStore,
};
