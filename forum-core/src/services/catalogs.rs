//! services/catalogs.rs
//! Startup loaders: locale JSON files -> Lexicon, taxonomy.toml -> Classification,
//! blacklists.toml -> BlacklistSet. Everything here runs once per snapshot build.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lexicon::{BlacklistSet, Classification, LanguageCode, Lexicon};

use crate::config::{LexiconConfig, ModerationConfig};

/// Build the lexicon from `<locales_path>/<lang>.json` plus the classification table.
pub fn load_lexicon(cfg: &LexiconConfig) -> Result<Lexicon> {
    let classification = load_classification(&cfg.classification_path)?;
    let mut lexicon = Lexicon::new(classification).with_reserved(&cfg.reserved_keys);

    for lang in &cfg.languages {
        let path = cfg.locales_path.join(format!("{lang}.json"));
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading locale file {}", path.display()))?;
        let entries = parse_locale(&text, &cfg.namespace)
            .with_context(|| format!("parsing locale file {}", path.display()))?;
        tracing::debug!(lang = %lang, labels = entries.len(), "catalog loaded");
        lexicon.insert_catalog(lang.clone(), entries);
    }

    for (key, missing) in lexicon.coverage_gaps() {
        let missing: Vec<&str> = missing.iter().map(LanguageCode::as_str).collect();
        tracing::warn!(key = %key, missing = ?missing, "taxonomy key lacks labels");
    }
    Ok(lexicon)
}

/// Extract string labels under `namespace`. Non-string leaves are skipped;
/// a missing namespace yields an empty catalog.
pub fn parse_locale(json: &str, namespace: &str) -> Result<Vec<(String, String)>> {
    let root: Value = serde_json::from_str(json)?;
    let Some(labels) = root.get(namespace).and_then(Value::as_object) else {
        tracing::warn!(namespace, "locale file has no taxonomy namespace");
        return Ok(Vec::new());
    };
    Ok(labels
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
        .collect())
}

pub fn load_classification(path: &Path) -> Result<Classification> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading classification file {}", path.display()))?;
    toml::from_str::<Classification>(&text)
        .with_context(|| format!("parsing classification file {}", path.display()))
}

#[derive(Debug, Default, Deserialize)]
struct BlacklistFile {
    #[serde(default)]
    words: BTreeMap<String, Vec<String>>,
}

pub fn load_blacklists(cfg: &ModerationConfig, languages: &[LanguageCode]) -> Result<BlacklistSet> {
    let path = &cfg.blacklists_path;
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading blacklist file {}", path.display()))?;
    parse_blacklists(&text, languages)
        .with_context(|| format!("parsing blacklist file {}", path.display()))
}

/// Parse a `[words]` table. Configured languages come first in their
/// configured order, any others follow sorted by code.
pub fn parse_blacklists(text: &str, languages: &[LanguageCode]) -> Result<BlacklistSet> {
    let file: BlacklistFile = toml::from_str(text)?;
    let mut by_lang: BTreeMap<LanguageCode, Vec<String>> = BTreeMap::new();
    for (lang, words) in file.words {
        by_lang.entry(LanguageCode::from(lang)).or_default().extend(words);
    }

    let mut set = BlacklistSet::new();
    for lang in languages {
        if let Some(words) = by_lang.remove(lang) {
            set.insert(lang.clone(), words);
        }
    }
    for (lang, words) in by_lang {
        tracing::debug!(lang = %lang, "blacklist language not in lexicon languages");
        set.insert(lang, words);
    }
    Ok(set)
}
