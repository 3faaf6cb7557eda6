use thiserror::Error;

/// Errors surfaced by the lexicon crate.
///
/// Per-call operations never fail; only building a resolver or filter over
/// missing startup data does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LexiconError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        LexiconError::Configuration(msg.into())
    }
}
