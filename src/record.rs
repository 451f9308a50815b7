use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Glyph shown for records that do not carry their own icon.
pub const DEFAULT_ICON: &str = "💡";

/// One searchable snippet.
///
/// The on-disk shape is
/// `{ "title": string, "description": string, "code": string, "icon"?: string }`.
/// `description` and `code` may be empty strings but must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub description: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            icon: icon.map(str::to_string),
        }
    }

    /// Validate a single parsed JSON entry into a record.
    ///
    /// Fails when a required field is missing or not a string, or when the
    /// title is blank.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let record: Self = serde_json::from_value(value)?;
        if record.title.trim().is_empty() {
            return Err(Error::Config("record title is empty".into()));
        }
        Ok(record)
    }

    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }
}
