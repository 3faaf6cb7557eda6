//! services/submission.rs
//! Validate and sanitize a new question before it reaches storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use lexicon::ModerationFilter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

/// Censored, identified question ready to persist.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedQuestion {
    pub id: Uuid,
    pub text: String,
    pub category: String,
    pub district: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Occurrences masked in `text`.
    pub masked: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("missing author")]
    MissingAuthor,
}

pub fn prepare_question(
    draft: &QuestionDraft,
    author_id: &str,
    filter: &ModerationFilter,
) -> Result<PreparedQuestion, SubmissionError> {
    let text = required(draft.text.as_deref(), "text")?;
    let category = required(draft.category.as_deref(), "category")?;
    let district = required(draft.district.as_deref(), "district")?;
    if author_id.trim().is_empty() {
        return Err(SubmissionError::MissingAuthor);
    }

    let censored = filter.censor_all_counted(text);
    if censored.matches > 0 {
        tracing::info!(masked = censored.matches, "question text censored");
    }

    let now = Utc::now();
    Ok(PreparedQuestion {
        id: Uuid::new_v4(),
        text: censored.text,
        category: category.to_string(),
        district: district.to_string(),
        author_id: author_id.to_string(),
        created_at: now,
        updated_at: now,
        masked: censored.matches,
    })
}

fn required<'a>(v: Option<&'a str>, field: &'static str) -> Result<&'a str, SubmissionError> {
    match v {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(SubmissionError::MissingField(field)),
    }
}
