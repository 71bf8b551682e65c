use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XbeanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error at {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid descriptor file {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file '{file_name}' not found searching upward from {search_start}")]
    ConfigNotFound {
        file_name: String,
        search_start: PathBuf,
    },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Type not found: {type_name}")]
    TypeNotFound { type_name: String },

    #[error("Invalid regex pattern: {0}")]
    Regex(String),
}

impl From<regex::Error> for XbeanError {
    fn from(err: regex::Error) -> Self {
        XbeanError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, XbeanError>;

impl XbeanError {
    pub fn config(message: impl Into<String>) -> Self {
        XbeanError::Config(message.into())
    }

    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        XbeanError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    pub fn invalid_descriptor(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        XbeanError::InvalidDescriptor {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O failure on a generated artifact with the path being written.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XbeanError::Output {
            path: path.into(),
            source,
        }
    }
}
