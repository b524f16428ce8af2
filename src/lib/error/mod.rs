//! Load-time failures. Every variant is fatal: a site cannot be built from a
//! configuration that fails any of these checks.

use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field is missing, unknown, or has the wrong shape.
    #[error("malformed site configuration: {0}")]
    Type(String),

    #[error("`{field}` must be non-negative, got {value}")]
    Range { field: &'static str, value: i64 },

    #[error("`{field}` must be one of {expected}, got {value:?}")]
    Enum {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("`{field}` is not a usable http(s) URL: {value:?} ({reason})")]
    Url {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot resolve {path:?} against the site URL: {reason}")]
    Join { path: String, reason: String },

    #[error("`timezone` is not an IANA zone name: {0:?}")]
    Timezone(String),

    #[error("`lang` is not a BCP-47 language tag: {0:?}")]
    Lang(String),

    #[error("`ogImage` must be a relative path, got {0:?}")]
    OgImage(String),

    #[error("could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported configuration format {0:?}, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("site configuration was already initialised")]
    AlreadyInstalled,
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Type(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Type(e.to_string())
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
