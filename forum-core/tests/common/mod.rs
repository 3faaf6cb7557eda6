#![allow(dead_code)]

use std::fs;
use std::path::Path;

use forum_core::{Commands, ForumConfig, Snapshot};
use lexicon::{BlacklistSet, Classification, Lexicon};

pub const EN_JSON: &str = r#"{
  "filters": {
    "searchPlaceholder": "Search questions",
    "clearAll": "Clear all",
    "entertainment": "Entertainment",
    "education": "Education",
    "sahil": "Sahil",
    "yasamal": "Yasamal",
    "nasimi": "Nasimi"
  },
  "nav": { "home": "Home" }
}"#;

pub const AZ_JSON: &str = r#"{
  "filters": {
    "searchPlaceholder": "Sual axtar",
    "clearAll": "Hamısını təmizlə",
    "entertainment": "Əyləncə",
    "education": "Təhsil",
    "sahil": "Sahil",
    "yasamal": "Yasamal",
    "count": 3
  }
}"#;

pub const RU_JSON: &str = r#"{
  "filters": {
    "clearAll": "Очистить все",
    "entertainment": "Развлечения",
    "education": "Образование",
    "sahil": "Сахиль",
    "yasamal": "Ясамал"
  }
}"#;

pub const TAXONOMY_TOML: &str = r#"
categories = ["entertainment", "education"]
districts = ["sahil", "yasamal", "nasimi"]
"#;

pub const BLACKLISTS_TOML: &str = r#"
[words]
ru = ["дурак"]
en = ["idiot", "ass"]
az = ["axmaq"]
"#;

/// Lay out a complete forum root under `dir`.
pub fn write_fixture(dir: &Path) {
    fs::create_dir_all(dir.join("locales")).unwrap();
    fs::write(dir.join("locales/en.json"), EN_JSON).unwrap();
    fs::write(dir.join("locales/az.json"), AZ_JSON).unwrap();
    fs::write(dir.join("locales/ru.json"), RU_JSON).unwrap();
    fs::write(dir.join("taxonomy.toml"), TAXONOMY_TOML).unwrap();
    fs::write(dir.join("blacklists.toml"), BLACKLISTS_TOML).unwrap();
}

pub fn open_fixture() -> (tempfile::TempDir, Commands) {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let commands = Commands::open(dir.path()).unwrap();
    (dir, commands)
}

/// In-memory snapshot for tests that do not need files.
pub fn small_snapshot() -> Snapshot {
    let classification =
        Classification::from_lists(["entertainment"], ["sahil"], None).unwrap();
    let lexicon = Lexicon::new(classification)
        .with_catalog("en", [("entertainment", "Entertainment"), ("sahil", "Sahil")])
        .with_catalog("az", [("entertainment", "Əyləncə"), ("sahil", "Sahil")]);
    let blacklist = BlacklistSet::new().with_language("en", ["idiot"]);
    Snapshot::build(lexicon, blacklist).unwrap()
}

pub fn small_commands() -> Commands {
    Commands::from_snapshot(ForumConfig::default(), small_snapshot())
}
