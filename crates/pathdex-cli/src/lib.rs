//! pathdex CLI — inspect the namespace built from a path manifest.
//!
//! Loads a manifest (see [`manifest`]) into a [`Namespace`] and answers one
//! query against it, the way a filesystem adapter would:
//!
//! - `ls [PATH] [PATTERN]`: children of a directory matching a wildcard
//! - `stat PATH`: what a single path resolves to
//! - `walk`: every leaf record
//!
//! ```bash
//! pathdex -m release.txt ls docs '*.md' -l
//! ```

pub mod config;
pub mod manifest;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pathdex_tree::{Namespace, Node};

use config::CliConfig;
use manifest::{ManifestEntry, load_manifest};

#[derive(Parser, Debug)]
#[command(name = "pathdex")]
#[command(about = "Query the in-memory namespace built from a path manifest")]
pub struct Cli {
    /// Manifest file with one record path per line.
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// TOML config file; its `[tree]` table sets namespace options.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path separator (overrides the config file).
    #[arg(long)]
    pub separator: Option<char>,

    /// Keep `C:`-style drive segments instead of collapsing them to `C`.
    #[arg(long, default_value_t = false)]
    pub keep_drive_colons: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List directory entries matching a wildcard.
    Ls {
        /// Directory to list; empty for the root.
        #[arg(default_value = "")]
        path: String,

        /// Search expression (`*`, `?`, and the DOS forms `<`, `>`).
        #[arg(default_value = "*")]
        pattern: String,

        /// Use long format with entry kinds.
        #[arg(short, long, default_value_t = false)]
        long: bool,
    },

    /// Show what a single path resolves to.
    Stat {
        path: String,
    },

    /// Print every leaf record.
    Walk,
}

/// Run a parsed command line, printing the result to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let namespace = load_namespace(&cli)?;
    let output = execute(&namespace, &cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Load the manifest named on the command line, with flags applied over
/// the config file.
pub fn load_namespace(cli: &Cli) -> Result<Namespace<ManifestEntry>> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(separator) = cli.separator {
        config.tree.separator = separator;
    }
    if cli.keep_drive_colons {
        config.tree.collapse_drive_letters = false;
    }

    load_manifest(&cli.manifest, config.tree)
}

/// Answer one query, returning the text to print.
pub fn execute(namespace: &Namespace<ManifestEntry>, command: &Command) -> Result<String> {
    match command {
        Command::Ls {
            path,
            pattern,
            long,
        } => {
            let entries = namespace
                .list(path, pattern)
                .map_err(|e| anyhow::anyhow!("ls: {}: {}", display_path(path), e))?;

            let lines: Vec<String> = entries
                .iter()
                .map(|entry| {
                    if *long {
                        let kind = if entry.is_directory() { 'd' } else { '-' };
                        format!("{}  {}", kind, entry.name)
                    } else {
                        entry.name.to_string()
                    }
                })
                .collect();
            Ok(lines.join("\n"))
        }

        Command::Stat { path } => {
            let node = namespace
                .stat(path)
                .map_err(|e| anyhow::anyhow!("stat: {}: {}", display_path(path), e))?;
            Ok(describe(path, node))
        }

        Command::Walk => {
            let mut lines = Vec::new();
            namespace.walk(|entry| lines.push(entry.path.clone()));
            Ok(lines.join("\n"))
        }
    }
}

fn describe(path: &str, node: &Node<ManifestEntry>) -> String {
    let mut lines = vec![format!("path: {}", display_path(path))];
    match node {
        Node::Leaf(_) => lines.push("kind: file".to_string()),
        Node::Directory { children, .. } => {
            lines.push("kind: directory".to_string());
            lines.push(format!("entries: {}", children.len()));
        }
    }
    match node.payload() {
        Some(entry) => lines.push(format!("record: line {}: {}", entry.line, entry.path)),
        None => lines.push("record: (synthesized)".to_string()),
    }
    lines.join("\n")
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "(root)" } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ls_defaults() {
        let cli = Cli::try_parse_from(["pathdex", "-m", "files.txt", "ls"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Ls {
                path: String::new(),
                pattern: "*".to_string(),
                long: false,
            }
        );
        assert_eq!(cli.manifest, PathBuf::from("files.txt"));
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "pathdex",
            "--manifest",
            "m.txt",
            "--separator",
            "/",
            "--keep-drive-colons",
            "stat",
            "usr/bin",
        ])
        .unwrap();
        assert_eq!(cli.separator, Some('/'));
        assert!(cli.keep_drive_colons);
        assert_eq!(cli.command, Command::Stat { path: "usr/bin".to_string() });
    }

    #[test]
    fn manifest_is_required() {
        assert!(Cli::try_parse_from(["pathdex", "walk"]).is_err());
    }

    #[test]
    fn root_is_displayed_by_name() {
        assert_eq!(display_path(""), "(root)");
        assert_eq!(display_path("a"), "a");
    }
}
