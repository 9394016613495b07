use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config file not found at: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("No config file found (searched: {searched}). Run 'advent init' to create one.")]
    NoConfigFile { searched: String },

    #[error("Config file already exists at: {}. Please edit it directly.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // The offending line is not echoed back: it may hold a pasted credential.
    #[error("Malformed config line {line}: expected KEY=VALUE")]
    MalformedLine { line: usize },

    #[error("Missing required config key: {0}")]
    MissingKey(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
