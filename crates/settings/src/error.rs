//! Error and issue types for loading and applying the key file.
//!
//! Nothing in here is fatal. A `LoadError` means "use defaults" (or keep the
//! previous state on reload); a `ConfigIssue` means one property was skipped.

use std::path::PathBuf;

/// The key file text does not follow the key-file grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("line {line}: key/value pair before any [section] header")]
    KeyOutsideSection { line: usize },

    #[error("line {line}: invalid section name '{name}'")]
    InvalidSection { line: usize, name: String },

    #[error("line {line}: empty key name")]
    EmptyKey { line: usize },

    #[error("line {line}: '{text}' is not a key/value pair, section header, or comment")]
    Malformed { line: usize, text: String },
}

/// The key file could not be turned into a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    #[error("{} is too large ({size} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64 },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Syntax { path, .. }
            | LoadError::TooLarge { path, .. } => path,
        }
    }

    /// True when the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Why a raw string could not be converted into a property value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("expected true or false")]
    NotABool,

    #[error("expected an integer: {0}")]
    NotAnInteger(String),

    #[error("expected a number")]
    NotANumber,

    #[error("expected one of: {}", allowed.join(", "))]
    UnknownNick { allowed: Vec<&'static str> },

    #[error("not a color")]
    NotAColor,
}

/// A single skipped entry in a configuration pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("missing key {section}.{key}")]
    MissingKey { section: String, key: String },

    #[error("unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("invalid value '{value}' for {property}: {reason}")]
    Coercion {
        property: String,
        value: String,
        reason: CoercionError,
    },
}

impl ConfigIssue {
    pub fn is_missing_key(&self) -> bool {
        matches!(self, ConfigIssue::MissingKey { .. })
    }

    pub fn is_coercion(&self) -> bool {
        matches!(self, ConfigIssue::Coercion { .. })
    }
}
