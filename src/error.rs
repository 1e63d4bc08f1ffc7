// Error types for viva-review.
// Loader, configuration, and top-level application errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a question or glossary file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("undecodable {encoding} byte at offset {offset}")]
    Encoding {
        encoding: &'static str,
        offset: usize,
    },

    #[error("missing required column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("file contains no records")]
    NoRecords,
}

/// Failure to resolve configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that end the application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
