use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SMARTSUGGEST_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve the data directory from, in order of priority:
    /// 1. An explicit path (from --data-dir)
    /// 2. The SMARTSUGGEST_DATA_DIR environment variable
    /// 3. The XDG data directory (~/.local/share/smartsuggest/)
    ///
    /// Nothing is created here; the loader creates the snippet directory
    /// on first use.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(val)
        } else {
            xdg::BaseDirectories::with_prefix("smartsuggest")
                .get_data_home()
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the JSON snippet files.
    pub fn snippets_dir(&self) -> PathBuf {
        self.root.join("snippets")
    }
}
