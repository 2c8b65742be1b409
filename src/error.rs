//! Error types for riddl-highlight

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for riddl-highlight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
///
/// The token classifier itself never fails; these cover style loading,
/// rendering and the document migrator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid style file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid style descriptor '{descriptor}': {reason}")]
    InvalidStyle { descriptor: String, reason: String },

    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    #[error("Unknown scanning mode: {0}")]
    UnknownMode(String),

    #[error("Theme '{theme}' has no style for: {}", .missing.join(", "))]
    IncompleteTheme { theme: String, missing: Vec<&'static str> },

    #[error("Source directory does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("{0}")]
    Message(String),
}
