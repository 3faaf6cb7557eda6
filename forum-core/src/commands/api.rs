// src/commands/api.rs
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use lexicon::{LanguageCode, MatchResult};

use crate::commands::init::{ensure_initialized, ensure_initialized_once};
use crate::config::ForumConfig;
use crate::services::search::{SearchFilter, SearchQuery};
use crate::services::snapshot::{Snapshot, TaxonomyStore};
use crate::services::submission::{prepare_question, PreparedQuestion, QuestionDraft};
use crate::utils::text::{question_preview, Preview};

/// Entry point for the surrounding API layer.
pub struct Commands {
    config: ForumConfig,
    store: TaxonomyStore,
}

#[derive(Debug, Serialize)]
pub struct ModerationReport {
    pub contains: bool,
    pub count: usize,
    pub censored: String,
}

impl Commands {
    /// Open the process-wide root (`FORUM_ROOT` or `.forum`).
    pub fn new() -> Result<Self> {
        let report = ensure_initialized_once()?;
        Self::from_config(report.config.clone())
    }

    /// Open an explicit root directory.
    pub fn open(root: &Path) -> Result<Self> {
        let report = ensure_initialized(root)?;
        Self::from_config(report.config)
    }

    pub fn from_config(config: ForumConfig) -> Result<Self> {
        let snapshot = Snapshot::load(&config)?;
        tracing::info!(system = %config.system.name, "forum core ready");
        Ok(Self::from_snapshot(config, snapshot))
    }

    pub fn from_snapshot(config: ForumConfig, snapshot: Snapshot) -> Self {
        Self { config, store: TaxonomyStore::new(snapshot) }
    }

    pub fn config(&self) -> &ForumConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.current()
    }

    /// Re-read catalogs and blacklists and swap them in. On error the
    /// current snapshot stays in place.
    pub fn reload(&self) -> Result<()> {
        let next = Snapshot::load(&self.config)?;
        self.store.swap(next);
        Ok(())
    }

    pub fn swap_snapshot(&self, next: Snapshot) {
        self.store.swap(next);
    }

    // ---------- taxonomy ----------

    pub fn resolve(&self, term: &str) -> MatchResult {
        self.snapshot().resolver.resolve_search_term(term)
    }

    pub fn matches_taxonomy(&self, term: &str, category: Option<&str>, district: Option<&str>) -> bool {
        self.snapshot().resolver.matches_taxonomy(term, category, district)
    }

    pub fn search(&self, query: &SearchQuery) -> SearchFilter {
        SearchFilter::build(query, &self.snapshot().resolver)
    }

    pub fn coverage_report(&self) -> BTreeMap<String, Vec<LanguageCode>> {
        self.snapshot().lexicon().coverage_gaps()
    }

    // ---------- moderation ----------

    pub fn submit_question(&self, draft: &QuestionDraft, author_id: &str) -> Result<PreparedQuestion> {
        Ok(prepare_question(draft, author_id, &self.snapshot().filter)?)
    }

    pub fn censor_all(&self, text: &str) -> String {
        self.snapshot().filter.censor_all(text)
    }

    pub fn censor_by_language(&self, text: &str, languages: &[LanguageCode]) -> String {
        self.snapshot().filter.censor_by_language(text, languages)
    }

    pub fn check(&self, text: &str) -> bool {
        self.snapshot().filter.contains_disallowed_any(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.snapshot().filter.count_disallowed_any(text)
    }

    pub fn moderate(&self, text: &str) -> ModerationReport {
        let snap = self.snapshot();
        ModerationReport {
            contains: snap.filter.contains_disallowed_any(text),
            count: snap.filter.count_disallowed_any(text),
            censored: snap.filter.censor_all(text),
        }
    }

    // ---------- display ----------

    pub fn preview(&self, text: &str) -> Preview {
        question_preview(text, self.config.preview.max_len)
    }
}
