//! Whole-word moderation filter over per-language blacklists.
//!
//! Masking runs word by word in list order against the progressively masked
//! text, so a later word never sees spans an earlier word already replaced.
//! Passes repeat until nothing is left to mask, which keeps censoring
//! idempotent.
//! `contains`, `count` and `censor` share one matcher, which keeps
//! `contains == (count > 0) == (censor != text)`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::LexiconError;
use crate::matcher::WordMatcher;
use crate::types::{BlacklistSet, CensoredText, LanguageCode};

// ----------------- Ad-hoc word lists -----------------

/// Mask every whole-word occurrence of `words` in `text` with `****`.
pub fn censor<S: AsRef<str>>(text: &str, words: &[S]) -> String {
    censor_counted(text, words).text
}

/// Like [`censor`], also reporting how many occurrences were masked.
pub fn censor_counted<S: AsRef<str>>(text: &str, words: &[S]) -> CensoredText {
    if text.is_empty() || words.is_empty() {
        return CensoredText { text: text.to_string(), matches: 0 };
    }
    apply_matchers(text, &WordMatcher::compile_all(words))
}

/// True as soon as any word matches; nothing is masked.
pub fn contains_disallowed<S: AsRef<str>>(text: &str, words: &[S]) -> bool {
    if text.is_empty() {
        return false;
    }
    words
        .iter()
        .filter_map(|w| WordMatcher::new(w.as_ref()))
        .any(|m| m.is_match(text))
}

/// Total occurrences (not distinct words) of `words` in `text`.
pub fn count_disallowed<S: AsRef<str>>(text: &str, words: &[S]) -> usize {
    if text.is_empty() {
        return 0;
    }
    WordMatcher::compile_all(words).iter().map(|m| m.count(text)).sum()
}

fn apply_matchers<'m, I>(text: &str, matchers: I) -> CensoredText
where
    I: IntoIterator<Item = &'m WordMatcher> + Clone,
{
    let mut out = text.to_string();
    let mut matches = 0usize;
    // A mask can expose a boundary for an earlier word ("bad@ss" becomes
    // "****@ss"), so passes repeat until one masks nothing. Every hit turns at
    // least one non-mask character into `*`, which bounds the loop.
    loop {
        let mut pass = 0usize;
        for m in matchers.clone() {
            let (next, hits) = m.mask(&out);
            if hits > 0 {
                out = next;
                pass += hits;
            }
        }
        if pass == 0 {
            break;
        }
        matches += pass;
    }
    CensoredText { text: out, matches }
}

// ----------------- Configured filter -----------------

/// Moderation filter over a startup [`BlacklistSet`], with matchers compiled
/// once per language and once for the cross-language union.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    blacklist: Arc<BlacklistSet>,
    by_language: BTreeMap<LanguageCode, Vec<WordMatcher>>,
    all: Vec<WordMatcher>,
}

impl ModerationFilter {
    pub fn new(blacklist: Arc<BlacklistSet>) -> Result<Self, LexiconError> {
        if blacklist.is_empty() {
            return Err(LexiconError::configuration("blacklist set has no words"));
        }
        let by_language = blacklist
            .languages()
            .map(|lang| {
                let words = blacklist.words(lang).unwrap_or_default();
                (lang.clone(), WordMatcher::compile_all(words))
            })
            .collect();
        let all = WordMatcher::compile_all(&blacklist.all());
        tracing::debug!(words = all.len(), "moderation filter compiled");
        Ok(Self { blacklist, by_language, all })
    }

    pub fn blacklist(&self) -> &BlacklistSet {
        &self.blacklist
    }

    /// Default policy for persisted user text: every configured language.
    pub fn censor_all(&self, text: &str) -> String {
        self.censor_all_counted(text).text
    }

    pub fn censor_all_counted(&self, text: &str) -> CensoredText {
        if text.is_empty() {
            return CensoredText { text: String::new(), matches: 0 };
        }
        apply_matchers(text, &self.all)
    }

    /// Censor with the concatenated lists of `languages`. Unknown languages
    /// are skipped; repeated words are harmless since a masked span cannot
    /// match again.
    pub fn censor_by_language(&self, text: &str, languages: &[LanguageCode]) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut selected: Vec<&WordMatcher> = Vec::new();
        for lang in languages {
            match self.by_language.get(lang) {
                Some(matchers) => selected.extend(matchers),
                None => tracing::debug!(lang = %lang, "no blacklist for language; skipped"),
            }
        }
        apply_matchers(text, selected.iter().copied()).text
    }

    /// `None` passes through untouched.
    pub fn censor_optional(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.censor_all(t))
    }

    pub fn contains_disallowed_any(&self, text: &str) -> bool {
        !text.is_empty() && self.all.iter().any(|m| m.is_match(text))
    }

    pub fn count_disallowed_any(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.all.iter().map(|m| m.count(text)).sum()
    }
}
