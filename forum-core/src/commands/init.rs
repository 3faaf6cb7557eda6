// forum-core/src/commands/init.rs

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ForumConfig, CONFIG_FILE};

#[derive(Debug, Clone)]
pub struct InitReport {
    pub root: PathBuf,
    pub config: ForumConfig,
    /// Files written because they were missing.
    pub created: Vec<String>,
}

pub const DEFAULT_CONFIG_TOML: &str = r#"[system]
name = "forum"

[lexicon]
locales_path = "locales"
namespace = "filters"
languages = ["az", "en", "ru"]
classification_path = "taxonomy.toml"

[moderation]
blacklists_path = "blacklists.toml"

[preview]
max_len = 150
"#;

// ---------- single global init gate ----------

static INIT: OnceCell<InitReport> = OnceCell::new();

/// Idempotent global initializer. Safe to call often.
/// Returns a &'static InitReport once initialization has completed.
pub fn ensure_initialized_once() -> Result<&'static InitReport> {
    INIT.get_or_try_init(|| ensure_initialized(&forum_root()))
}

/// Resolve the forum data root. Allow override via FORUM_ROOT (tests/deploys).
pub fn forum_root() -> PathBuf {
    std::env::var_os("FORUM_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".forum"))
}

/// Create `root` and a default `forum.toml` when missing, then load the config.
pub fn ensure_initialized(root: &Path) -> Result<InitReport> {
    let mut created = Vec::new();
    fs::create_dir_all(root).with_context(|| format!("create_dir_all({:?})", root))?;

    let cfg_path = root.join(CONFIG_FILE);
    if !cfg_path.exists() {
        fs::write(&cfg_path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("write {:?}", cfg_path))?;
        created.push(CONFIG_FILE.to_string());
        tracing::info!(path = %cfg_path.display(), "wrote default forum config");
    }

    let config = ForumConfig::load(root)?;
    Ok(InitReport { root: root.to_path_buf(), config, created })
}
