use std::path::{Path, PathBuf};

use crate::error::Result;

/// A discovered snippet file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name relative to the snippet directory.
    pub file_name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Name suffix of the structured-data files holding records.
const SNIPPET_SUFFIX: &str = ".json";

/// List the snippet files directly inside `dir`.
///
/// Only regular files (or symlinks to regular files) whose name ends in
/// `.json` are returned, dotfiles included. Subdirectories are not
/// descended into. Results are sorted by file name so that corpus order is
/// stable across platforms.
pub fn discover_files(dir: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut results = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if !is_snippet_file(&file_name) {
            continue;
        }

        let path = entry.path();
        // `metadata` follows symlinks; broken links are skipped.
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };
        if metadata.is_file() {
            results.push(DiscoveredFile { file_name, path });
        }
    }

    results.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(results)
}

fn is_snippet_file(file_name: &str) -> bool {
    file_name.ends_with(SNIPPET_SUFFIX)
}
