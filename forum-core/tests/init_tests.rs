mod common;

use common::write_fixture;
use forum_core::commands::{ensure_initialized_once, forum_root};
use forum_core::Commands;

// Single test in this binary: it sets FORUM_ROOT for the global init gate.
#[test]
fn test_global_init_gate_uses_forum_root() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    std::env::set_var("FORUM_ROOT", dir.path());
    assert_eq!(forum_root(), dir.path());

    let first = ensure_initialized_once().unwrap();
    let second = ensure_initialized_once().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.root, dir.path());
    assert_eq!(first.created, vec!["forum.toml".to_string()]);

    let commands = Commands::new().unwrap();
    assert_eq!(commands.censor_all("you idiot"), "you ****");
}
