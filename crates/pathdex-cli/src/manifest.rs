//! Path manifests: the CLI's record source.
//!
//! One record path per line. Blank lines and lines starting with `#` are
//! ignored. A line ending in the separator is a directory record:
//!
//! ```text
//! # release.zip
//! docs\
//! docs\guide.md
//! bin\tool.exe
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use pathdex_tree::{Namespace, TreeOptions};

/// One record read from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// The path as written, surrounding whitespace removed.
    pub path: String,
    pub is_dir: bool,
    /// 1-based line number in the manifest.
    pub line: usize,
}

/// Parse manifest text into records, in order.
pub fn parse_manifest(text: &str, separator: char) -> Vec<ManifestEntry> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let path = raw.trim();
            if path.is_empty() || path.starts_with('#') {
                return None;
            }
            Some(ManifestEntry {
                path: path.to_string(),
                is_dir: path.ends_with(separator),
                line: index + 1,
            })
        })
        .collect()
}

/// Build a namespace from manifest text.
pub fn namespace_from_str(text: &str, options: TreeOptions) -> Namespace<ManifestEntry> {
    let entries = parse_manifest(text, options.separator);
    Namespace::build_with_directories(entries, |e| e.path.clone(), |e| e.is_dir, options)
}

/// Read a manifest file and build its namespace.
pub fn load_manifest(path: &Path, options: TreeOptions) -> Result<Namespace<ManifestEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let namespace = namespace_from_str(&text, options);

    let stats = namespace.stats();
    tracing::info!(
        "Loaded {}: records={}, synthesized={}, overwritten={}, skipped={}",
        path.display(),
        stats.records,
        stats.synthesized,
        stats.overwritten,
        stats.skipped
    );
    Ok(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let entries = parse_manifest("# header\n\n  docs\\  \nREADME\n", '\\');
        assert_eq!(
            entries,
            vec![
                ManifestEntry {
                    path: "docs\\".to_string(),
                    is_dir: true,
                    line: 3,
                },
                ManifestEntry {
                    path: "README".to_string(),
                    is_dir: false,
                    line: 4,
                },
            ]
        );
    }

    #[test]
    fn directory_lines_follow_separator() {
        let entries = parse_manifest("usr/\nusr\\\n", '/');
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
    }

    #[test]
    fn builds_namespace_with_directory_records() {
        let ns = namespace_from_str("docs\\\ndocs\\a.md\nbin\\x\n", TreeOptions::default());
        let docs = ns.lookup("docs").unwrap().node;
        assert_eq!(docs.payload().map(|e| e.line), Some(1));
        assert!(ns.lookup("bin").unwrap().node.payload().is_none());
        assert_eq!(ns.leaves().count(), 2);
    }
}
