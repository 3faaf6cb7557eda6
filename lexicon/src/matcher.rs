//! Whole-word, case-insensitive literal matcher.
//!
//! The needle is escaped so pattern metacharacters match literally, then
//! bounded with Unicode half-boundaries: no word character may sit directly
//! before the first character or directly after the last one. A word never
//! matches inside a longer word ("ass" does not hit "class" or "assassin"),
//! and words that start or end with punctuation ("a$$", "@ss") still match
//! when they stand alone.

use regex::{Regex, RegexBuilder};

/// Fixed replacement for every masked occurrence, whatever its length.
pub const MASK: &str = "****";

#[derive(Debug, Clone)]
pub struct WordMatcher {
    word: String,
    re: Regex,
}

impl WordMatcher {
    /// Compile a matcher for `word`.
    ///
    /// Returns `None` for blank words, for words made only of mask
    /// characters (they would re-match masked output), and for words the
    /// regex engine refuses (size limits); such words never match.
    pub fn new(word: &str) -> Option<Self> {
        let trimmed = word.trim();
        if trimmed.chars().all(|c| c == '*') {
            return None;
        }
        let pattern = format!(r"\b{{start-half}}{}\b{{end-half}}", regex::escape(trimmed));
        match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => Some(WordMatcher { word: trimmed.to_string(), re }),
            Err(e) => {
                tracing::warn!(word = trimmed, error = %e, "unusable blacklist word skipped");
                None
            }
        }
    }

    /// Compile matchers for a list, keeping list order and dropping unusable words.
    pub fn compile_all<S: AsRef<str>>(words: &[S]) -> Vec<WordMatcher> {
        words.iter().filter_map(|w| WordMatcher::new(w.as_ref())).collect()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// Non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.re.find_iter(text).count()
    }

    /// Replace every occurrence with [`MASK`]; returns the new text and the
    /// number of replacements.
    pub fn mask(&self, text: &str) -> (String, usize) {
        let hits = self.count(text);
        if hits == 0 {
            return (text.to_string(), 0);
        }
        (self.re.replace_all(text, MASK).into_owned(), hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metacharacters_are_literal() {
        let m = WordMatcher::new("a.b").unwrap();
        assert!(m.is_match("say a.b now"));
        assert!(!m.is_match("say axb now"));
    }

    #[test]
    fn blank_and_mask_words_have_no_matcher() {
        assert!(WordMatcher::new("").is_none());
        assert!(WordMatcher::new("   ").is_none());
        assert!(WordMatcher::new(MASK).is_none());
        assert!(WordMatcher::new(" ** ").is_none());
        assert!(WordMatcher::new("f*ck").is_some());
    }

    #[test]
    fn punctuation_at_word_edges() {
        let m = WordMatcher::new("a$$").unwrap();
        assert!(m.is_match("you a$$"));
        assert!(m.is_match("A$$!"));
        assert!(!m.is_match("a$$hole"));
        assert!(!m.is_match("ba$$"));

        let m = WordMatcher::new("@ss").unwrap();
        assert!(m.is_match("you @ss"));
        assert!(!m.is_match("bad@ss"));
    }

    #[test]
    fn unicode_word_boundaries() {
        let m = WordMatcher::new("дурак").unwrap();
        assert!(m.is_match("ты ДУРАК!"));
        assert!(!m.is_match("дураками"));
    }

    #[test]
    fn mask_reports_replacements() {
        let m = WordMatcher::new("idiot").unwrap();
        let (out, n) = m.mask("Idiot, idiot.");
        assert_eq!(out, "****, ****.");
        assert_eq!(n, 2);
    }
}
