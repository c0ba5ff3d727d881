//! Feature declarations as supplied by the application.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single feature declaration: either a bare key or a full record.
///
/// `"new_ui"` is shorthand for `{ key = "new_ui" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declaration {
    Key(String),
    Record(DeclarationRecord),
}

/// Long-form declaration. Every field is optional at parse time; a missing
/// or empty `key` is rejected when the registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclarationRecord {
    pub key: Option<String>,
    pub description: Option<String>,
    pub env_key: Option<String>,
}

impl DeclarationRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn env_key(mut self, env_key: impl Into<String>) -> Self {
        self.env_key = Some(env_key.into());
        self
    }
}

impl Declaration {
    /// Interpret an untyped declaration (e.g. an entry of a manifest array).
    ///
    /// Strings become bare keys and objects become records; every other
    /// shape (null, booleans, numbers, nested arrays) yields `None`.
    /// Non-string `description` / `envKey` fields are treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(key) => Some(Declaration::Key(key.clone())),
            Value::Object(map) => {
                let text = |field: &str| map.get(field).and_then(Value::as_str).map(str::to_string);
                Some(Declaration::Record(DeclarationRecord {
                    key: text("key"),
                    description: text("description"),
                    env_key: text("envKey"),
                }))
            }
            _ => None,
        }
    }

    /// The declared key, if present and non-empty.
    pub fn key(&self) -> Option<&str> {
        let key = match self {
            Declaration::Key(key) => Some(key.as_str()),
            Declaration::Record(record) => record.key.as_deref(),
        };
        key.filter(|k| !k.is_empty())
    }

    /// The explicit description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        match self {
            Declaration::Key(_) => None,
            Declaration::Record(record) => record.description.as_deref().filter(|d| !d.is_empty()),
        }
    }

    /// The explicit environment variable name, if present and non-empty.
    pub fn env_key(&self) -> Option<&str> {
        match self {
            Declaration::Key(_) => None,
            Declaration::Record(record) => record.env_key.as_deref().filter(|e| !e.is_empty()),
        }
    }
}

impl From<&str> for Declaration {
    fn from(key: &str) -> Self {
        Declaration::Key(key.to_string())
    }
}

impl From<String> for Declaration {
    fn from(key: String) -> Self {
        Declaration::Key(key)
    }
}

impl From<DeclarationRecord> for Declaration {
    fn from(record: DeclarationRecord) -> Self {
        Declaration::Record(record)
    }
}
