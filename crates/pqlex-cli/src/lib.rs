//! pqlex-cli — a thin command-line front end over `pqlex-lex`.
//!
//! Reads a file (or stdin), builds a [`LexerState`] for the whole text, and
//! prints the resulting snapshot's tokens — and, with `--comments`, its
//! comments — or every error site if lexing failed. This crate is the one
//! place in the workspace that talks to the filesystem, parses CLI
//! arguments, or emits log output; `pqlex-util` and `pqlex-lex` stay
//! logging-free so they can be embedded in a host that wants to own that
//! concern itself (an editor extension, say).

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pqlex_lex::{LexerSnapshot, LexerState};
use tracing::info;

/// Lex a Power Query / M source file and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "pqlex", version, about = "Lex M expression language source")]
pub struct Cli {
    /// Path to the source file to lex. Reads stdin when omitted or "-".
    pub path: Option<PathBuf>,

    /// Also print comments (suppressed by default).
    #[arg(long)]
    pub comments: bool,

    /// Enable verbose tracing to stderr.
    #[arg(long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    let source = read_source(cli.path.as_deref())?;
    info!(bytes = source.len(), "building lexer state");
    let state = LexerState::from_text(&source);

    match LexerSnapshot::try_from(&state) {
        Ok(snapshot) => {
            info!(
                tokens = snapshot.tokens.len(),
                comments = snapshot.comments.len(),
                "lex succeeded"
            );
            print_tokens(&snapshot);
            if cli.comments {
                print_comments(&snapshot);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            anyhow::bail!("lexing failed");
        }
    }
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_tokens(snapshot: &LexerSnapshot) {
    for token in &snapshot.tokens {
        println!(
            "{:?} {:?} [{}..{}]",
            token.kind,
            token.data,
            token.position_start.code_unit,
            token.position_end.code_unit
        );
    }
}

fn print_comments(snapshot: &LexerSnapshot) {
    for comment in &snapshot.comments {
        println!(
            "# {:?} {:?} [{}..{}]",
            comment.kind,
            comment.data,
            comment.position_start.code_unit,
            comment.position_end.code_unit
        );
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pqlex_cli=trace,pqlex_lex=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pqlex_cli=info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
