//! Error types for the guidebook tool.
//!
//! Key derivation itself is total; only the configuration and export layers
//! around it can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("unknown category id: {0}")]
    UnknownCategory(String),

    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Boxed to keep Result small on the stack
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
