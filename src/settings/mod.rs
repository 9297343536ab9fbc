use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::hooks::HookSet;

/// The settings key this tool owns. Everything else passes through.
pub const HOOKS_KEY: &str = "hooks";

const BOM: char = '\u{feff}';

/// A settings.json document: an arbitrary JSON object.
///
/// Key order is kept as loaded. Replacing `hooks` keeps its position;
/// adding it appends it at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

/// Errors that can occur when producing the merged settings file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SettingsError {
    #[error("Error writing output file: {source}")]
    #[diagnostic(code(merge_settings::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    #[diagnostic(code(merge_settings::serialize_failed))]
    Serialize(#[from] serde_json::Error),
}

impl SettingsDocument {
    /// Load a settings document, falling back to an empty one.
    ///
    /// A missing, unreadable, blank or malformed file is not an error, and
    /// neither is valid JSON whose root is not an object. All of them yield
    /// an empty document. Invalid UTF-8 is replaced with U+FFFD rather than
    /// rejected, so the other keys survive.
    pub fn load_or_empty(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => Self::parse_or_empty(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "existing settings unreadable, starting empty");
                Self::default()
            }
        }
    }

    /// Parse settings text with the same fallback rules as [`Self::load_or_empty`].
    ///
    /// A byte-order mark counts as surrounding whitespace.
    pub fn parse_or_empty(content: &str) -> Self {
        let content = content.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(root)) => SettingsDocument { root },
            Ok(other) => {
                tracing::debug!(kind = json_kind(&other), "existing settings not an object, starting empty");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "existing settings not valid JSON, starting empty");
                Self::default()
            }
        }
    }

    /// Overwrite the `hooks` key with the given set. Other keys are untouched.
    pub fn replace_hooks(&mut self, hooks: &HookSet) -> Result<(), SettingsError> {
        let value = serde_json::to_value(hooks)?;
        self.root.insert(HOOKS_KEY.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Render as two-space indented JSON without a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// Parent directories are not created. The write is not atomic.
    pub fn write(&self, path: &Path) -> Result<(), SettingsError> {
        let pretty = self.to_pretty_json()?;
        std::fs::write(path, pretty).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
