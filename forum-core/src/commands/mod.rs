// src/commands/mod.rs
pub mod init;
mod api;

pub use api::{Commands, ModerationReport};

pub use init::{ensure_initialized, ensure_initialized_once, forum_root, InitReport};
