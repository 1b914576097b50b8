use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating recipe pages
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Recipe source file is missing or unreadable
    #[error("Failed to read recipe source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered page could not be written
    #[error("Failed to write page {}: {source}", path.display())]
    WritePage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid hero image search pattern
    #[error("Invalid image pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
