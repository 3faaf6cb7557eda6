use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forum_core::commands::forum_root;
use forum_core::Commands;
use lexicon::LanguageCode;

#[derive(Parser)]
#[command(
    name = "forum-admin",
    about = "Operator helpers for forum taxonomy catalogs and blacklists"
)]
struct Cli {
    /// Forum data root (defaults to FORUM_ROOT or .forum)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Resolve a search term to category and district keys
    Resolve { term: String },
    /// Mask disallowed words (all languages unless --lang is given)
    Censor {
        text: String,
        #[arg(long = "lang")]
        langs: Vec<String>,
    },
    /// Exit non-zero if the text contains a disallowed word
    Check { text: String },
    /// Count disallowed word occurrences
    Count { text: String },
    /// List taxonomy keys missing a label in some language
    Coverage,
    /// Show the list preview for a question text
    Preview {
        text: String,
        #[arg(long)]
        max_len: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("forum_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(forum_root);
    tracing::debug!(root = %root.display(), "opening forum root");
    let commands = Commands::open(&root)?;

    match cli.cmd {
        Cmd::Resolve { term } => print_json(&commands.resolve(&term)),
        Cmd::Censor { text, langs } => {
            let out = if langs.is_empty() {
                commands.censor_all(&text)
            } else {
                let langs: Vec<LanguageCode> = langs.iter().map(|l| LanguageCode::new(l)).collect();
                commands.censor_by_language(&text, &langs)
            };
            println!("{out}");
            Ok(())
        }
        Cmd::Check { text } => {
            let report = commands.moderate(&text);
            print_json(&report)?;
            anyhow::ensure!(!report.contains, "text contains disallowed words");
            Ok(())
        }
        Cmd::Count { text } => {
            println!("{}", commands.count(&text));
            Ok(())
        }
        Cmd::Coverage => print_json(&commands.coverage_report()),
        Cmd::Preview { text, max_len } => {
            let preview = match max_len {
                Some(n) => forum_core::utils::text::question_preview(&text, n),
                None => commands.preview(&text),
            };
            print_json(&preview)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
