use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use crate::error::LexiconError;

/// UI strings that share the `filters` namespace with taxonomy labels in the
/// locale files. They are never taxonomy keys.
pub const DEFAULT_RESERVED_KEYS: &[&str] = &[
    "filters",
    "districts",
    "categories",
    "new",
    "popular",
    "clearAll",
    "applyFilters",
    "searchPlaceholder",
];

// ----------------- Language -----------------

/// Lowercase, trimmed language tag such as `az`, `en` or `ru`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: &str) -> Self {
        LanguageCode(code.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        LanguageCode::new(&s)
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        LanguageCode::new(s)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ----------------- Classification -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyKind {
    Category,
    District,
}

impl TaxonomyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "category",
            TaxonomyKind::District => "district",
        }
    }
}

/// Explicit canonical key -> kind table.
///
/// Keys missing from the table resolve to `fallback` when one is set and are
/// otherwise unclassified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ClassificationLists")]
pub struct Classification {
    kinds: BTreeMap<String, TaxonomyKind>,
    fallback: Option<TaxonomyKind>,
}

/// On-disk shape: two key lists and an optional fallback.
#[derive(Debug, Default, Deserialize)]
struct ClassificationLists {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    districts: Vec<String>,
    #[serde(default)]
    fallback: Option<TaxonomyKind>,
}

impl TryFrom<ClassificationLists> for Classification {
    type Error = LexiconError;

    fn try_from(lists: ClassificationLists) -> Result<Self, Self::Error> {
        Classification::from_lists(lists.categories, lists.districts, lists.fallback)
    }
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from key lists. A key listed as both a category and a district
    /// is rejected.
    pub fn from_lists<C, D>(
        categories: C,
        districts: D,
        fallback: Option<TaxonomyKind>,
    ) -> Result<Self, LexiconError>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut out = Classification { kinds: BTreeMap::new(), fallback };
        for key in categories {
            out.kinds.insert(key.into(), TaxonomyKind::Category);
        }
        for key in districts {
            let key = key.into();
            if out.kinds.get(&key) == Some(&TaxonomyKind::Category) {
                return Err(LexiconError::configuration(format!(
                    "key `{key}` is classified as both category and district"
                )));
            }
            out.kinds.insert(key, TaxonomyKind::District);
        }
        Ok(out)
    }

    pub fn with(mut self, key: impl Into<String>, kind: TaxonomyKind) -> Self {
        self.kinds.insert(key.into(), kind);
        self
    }

    pub fn with_fallback(mut self, kind: TaxonomyKind) -> Self {
        self.fallback = Some(kind);
        self
    }

    pub fn fallback(&self) -> Option<TaxonomyKind> {
        self.fallback
    }

    /// Exact key first, then its lowercase form, then the fallback.
    pub fn kind_of(&self, key: &str) -> Option<TaxonomyKind> {
        self.kinds
            .get(key)
            .or_else(|| self.kinds.get(&key.to_lowercase()))
            .copied()
            .or(self.fallback)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// ----------------- Lexicon -----------------

/// Read-only taxonomy data: per-language catalogs plus the classification
/// table. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    catalogs: BTreeMap<LanguageCode, BTreeMap<String, String>>,
    classification: Classification,
    reserved: BTreeSet<String>,
}

impl Lexicon {
    pub fn new(classification: Classification) -> Self {
        Lexicon {
            catalogs: BTreeMap::new(),
            classification,
            reserved: DEFAULT_RESERVED_KEYS.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Add (or extend) the catalog for `lang`.
    pub fn with_catalog<I, K, V>(mut self, lang: impl Into<LanguageCode>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert_catalog(lang, entries);
        self
    }

    pub fn insert_catalog<I, K, V>(&mut self, lang: impl Into<LanguageCode>, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let catalog = self.catalogs.entry(lang.into()).or_default();
        for (k, v) in entries {
            catalog.insert(k.into(), v.into());
        }
    }

    /// Replace the reserved key list.
    pub fn with_reserved<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved = keys.into_iter().map(|k| k.as_ref().to_lowercase()).collect();
        self
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.catalogs.keys()
    }

    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved.contains(&key.to_lowercase())
    }

    /// Localized label for `key`, trying the exact key then its lowercase form.
    pub fn label(&self, lang: &LanguageCode, key: &str) -> Option<&str> {
        let catalog = self.catalogs.get(lang)?;
        catalog
            .get(key)
            .or_else(|| catalog.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    pub fn kind_of(&self, key: &str) -> Option<TaxonomyKind> {
        self.classification.kind_of(key)
    }

    /// Every taxonomy key: catalog keys plus classified keys, minus reserved ones.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.catalogs
            .values()
            .flat_map(|c| c.keys().map(String::as_str))
            .chain(self.classification.keys())
            .filter(|k| !self.is_reserved(k))
            .collect()
    }

    /// True when there is nothing to resolve against.
    pub fn is_empty(&self) -> bool {
        self.catalogs.values().all(BTreeMap::is_empty) && self.classification.is_empty()
    }

    /// For each key, the configured languages that have no label for it.
    pub fn coverage_gaps(&self) -> BTreeMap<String, Vec<LanguageCode>> {
        let mut gaps = BTreeMap::new();
        for key in self.keys() {
            let missing: Vec<LanguageCode> = self
                .catalogs
                .keys()
                .filter(|lang| self.label(lang, key).is_none())
                .cloned()
                .collect();
            if !missing.is_empty() {
                gaps.insert(key.to_string(), missing);
            }
        }
        gaps
    }
}

// ----------------- Blacklists -----------------

/// Ordered per-language disallowed words.
#[derive(Debug, Clone, Default)]
pub struct BlacklistSet {
    by_language: Vec<(LanguageCode, Vec<String>)>,
}

impl BlacklistSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language<I, S>(mut self, lang: impl Into<LanguageCode>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(lang, words);
        self
    }

    /// Append `words` to the list for `lang`, keeping language insertion order.
    pub fn insert<I, S>(&mut self, lang: impl Into<LanguageCode>, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lang = lang.into();
        let words = words.into_iter().map(Into::into);
        match self.by_language.iter_mut().find(|(l, _)| *l == lang) {
            Some((_, list)) => list.extend(words),
            None => self.by_language.push((lang, words.collect())),
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.by_language.iter().map(|(l, _)| l)
    }

    pub fn words(&self, lang: &LanguageCode) -> Option<&[String]> {
        self.by_language
            .iter()
            .find(|(l, _)| l == lang)
            .map(|(_, w)| w.as_slice())
    }

    /// Concatenated lists for `langs`; unknown languages are skipped.
    pub fn words_for(&self, langs: &[LanguageCode]) -> Vec<&str> {
        let mut out = Vec::new();
        for lang in langs {
            match self.words(lang) {
                Some(words) => out.extend(words.iter().map(String::as_str)),
                None => tracing::debug!(lang = %lang, "no blacklist for language; skipped"),
            }
        }
        out
    }

    /// De-duplicated union across languages, first spelling wins.
    ///
    /// Two words are duplicates only when they match the same text: same
    /// characters after trimming, ignoring case.
    pub fn all(&self) -> Vec<&str> {
        let mut seen: HashSet<String> = HashSet::new();
        self.by_language
            .iter()
            .flat_map(|(_, words)| words.iter())
            .filter(|w| !w.trim().is_empty())
            .filter(|w| seen.insert(w.trim().to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// True when no language carries a non-blank word.
    pub fn is_empty(&self) -> bool {
        self.by_language
            .iter()
            .all(|(_, words)| words.iter().all(|w| w.trim().is_empty()))
    }
}

// ----------------- Results -----------------

/// Canonical keys a search term could mean, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub categories: BTreeSet<String>,
    pub districts: BTreeSet<String>,
}

impl MatchResult {
    pub fn insert(&mut self, kind: TaxonomyKind, key: &str) {
        match kind {
            TaxonomyKind::Category => self.categories.insert(key.to_string()),
            TaxonomyKind::District => self.districts.insert(key.to_string()),
        };
    }

    pub fn contains(&self, kind: TaxonomyKind, key: &str) -> bool {
        match kind {
            TaxonomyKind::Category => self.categories.contains(key),
            TaxonomyKind::District => self.districts.contains(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.districts.is_empty()
    }
}

/// Output of a counted moderation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensoredText {
    pub text: String,
    /// Occurrences masked across all words, in list order.
    pub matches: usize,
}
