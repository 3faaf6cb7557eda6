use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing;

use lexicon::{LanguageCode, DEFAULT_RESERVED_KEYS};

pub const CONFIG_FILE: &str = "forum.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumConfig {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl ForumConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let mut cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            Self::from_toml(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            tracing::info!(
                "No config file found at {}. Using ForumConfig::default().",
                path.display()
            );
            ForumConfig::default()
        };
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str::<ForumConfig>(text)?)
    }

    fn resolve_paths(&mut self, root: &Path) {
        self.lexicon.locales_path = absolutize(root, &self.lexicon.locales_path);
        self.lexicon.classification_path = absolutize(root, &self.lexicon.classification_path);
        self.moderation.blacklists_path = absolutize(root, &self.moderation.blacklists_path);
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "SystemConfig::default_name")]
    pub name: String,
}

impl SystemConfig {
    fn default_name() -> String {
        "forum".to_string()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { name: Self::default_name() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    /// Directory holding one `<lang>.json` i18n file per language.
    #[serde(default = "LexiconConfig::default_locales_path")]
    pub locales_path: PathBuf,
    /// Top-level object in each locale file that carries taxonomy labels.
    #[serde(default = "LexiconConfig::default_namespace")]
    pub namespace: String,
    #[serde(default = "LexiconConfig::default_languages")]
    pub languages: Vec<LanguageCode>,
    #[serde(default = "LexiconConfig::default_classification_path")]
    pub classification_path: PathBuf,
    #[serde(default = "LexiconConfig::default_reserved_keys")]
    pub reserved_keys: Vec<String>,
}

impl LexiconConfig {
    fn default_locales_path() -> PathBuf {
        PathBuf::from("locales")
    }

    fn default_namespace() -> String {
        "filters".to_string()
    }

    fn default_languages() -> Vec<LanguageCode> {
        ["az", "en", "ru"].into_iter().map(LanguageCode::from).collect()
    }

    fn default_classification_path() -> PathBuf {
        PathBuf::from("taxonomy.toml")
    }

    fn default_reserved_keys() -> Vec<String> {
        DEFAULT_RESERVED_KEYS.iter().map(|k| k.to_string()).collect()
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            locales_path: Self::default_locales_path(),
            namespace: Self::default_namespace(),
            languages: Self::default_languages(),
            classification_path: Self::default_classification_path(),
            reserved_keys: Self::default_reserved_keys(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    #[serde(default = "ModerationConfig::default_blacklists_path")]
    pub blacklists_path: PathBuf,
}

impl ModerationConfig {
    fn default_blacklists_path() -> PathBuf {
        PathBuf::from("blacklists.toml")
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self { blacklists_path: Self::default_blacklists_path() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "PreviewConfig::default_max_len")]
    pub max_len: usize,
}

impl PreviewConfig {
    fn default_max_len() -> usize {
        150
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { max_len: Self::default_max_len() }
    }
}

fn absolutize(root: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}
