//! Corpus loading from a directory of JSON snippet files.
//!
//! Loading never fails from the caller's point of view. A missing
//! directory is created and seeded, a broken file is skipped, and a
//! directory that cannot be read at all yields the built-in records.

use std::path::Path;

use serde_json::Value;

use crate::{
    corpus::{Corpus, CorpusSource},
    defaults,
    error::{Error, Result},
    record::Record,
    walker,
};

/// Receiver for recoverable load problems.
pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Records parsed from one file, plus the number of entries that failed
/// validation.
#[derive(Debug, Default)]
struct FileRecords {
    records: Vec<Record>,
    skipped: usize,
}

/// Load the corpus rooted at `dir`.
pub fn load(dir: &Path, sink: &dyn WarningSink) -> Corpus {
    if !dir.exists() {
        tracing::info!(
            "snippet directory {} not found, creating it",
            dir.display()
        );
        return match seed_directory(dir) {
            Ok(records) => {
                tracing::info!(
                    "seeded {} with {} records",
                    dir.display(),
                    records.len()
                );
                Corpus::new(records, CorpusSource::Seeded)
            }
            Err(e) => {
                sink.warn(&format!("{e}; using built-in snippets"));
                builtin_corpus()
            }
        };
    }

    match load_directory(dir, sink) {
        Ok(corpus) => corpus,
        Err(e) => {
            sink.warn(&format!(
                "failed to load snippets from {}: {e}; using built-in snippets",
                dir.display()
            ));
            builtin_corpus()
        }
    }
}

/// The corpus used when nothing on disk is usable.
pub fn builtin_corpus() -> Corpus {
    Corpus::new(defaults::builtin_records(), CorpusSource::BuiltIn)
}

fn seed_directory(dir: &Path) -> Result<Vec<Record>> {
    std::fs::create_dir_all(dir).map_err(|_| Error::DataDir(dir.into()))?;

    let mut records = Vec::new();
    for seed in defaults::seed_files() {
        let contents = serde_json::to_string_pretty(&seed.records)?;
        std::fs::write(dir.join(seed.file_name), contents)?;
        records.extend(seed.records);
    }
    Ok(records)
}

fn load_directory(dir: &Path, sink: &dyn WarningSink) -> Result<Corpus> {
    let files = walker::discover_files(dir)?;
    let mut records = Vec::new();

    for file in &files {
        match parse_file(&file.path) {
            Ok(parsed) => {
                if parsed.skipped > 0 {
                    sink.warn(&format!(
                        "{}: skipped {} invalid record(s)",
                        file.file_name, parsed.skipped
                    ));
                }
                records.extend(parsed.records);
            }
            Err(e) => {
                sink.warn(&format!("error reading {}: {e}", file.file_name));
            }
        }
    }

    tracing::info!(
        "loaded {} records from {} files",
        records.len(),
        files.len()
    );
    Ok(Corpus::new(records, CorpusSource::Directory))
}

fn parse_file(path: &Path) -> Result<FileRecords> {
    let data = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&data)?;

    let entries = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => {
            return Err(Error::Config(
                "expected a record object or an array of records".into(),
            ));
        }
    };

    let mut parsed = FileRecords::default();
    for entry in entries {
        match Record::from_json(entry) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                tracing::debug!("invalid record in {}: {e}", path.display());
                parsed.skipped += 1;
            }
        }
    }
    Ok(parsed)
}
