//! Shared error types for tailsort.
//!
//! Only configuration and I/O problems surface as errors. Anything that goes
//! wrong while looking at a single class list (an expression shape we cannot
//! decompose, a token the ordering oracle does not know) is handled locally
//! by skipping that span, so one odd class attribute never aborts a file.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main error type for tailsort operations
///
/// Cloneable so a failed configuration can be cached and reported for every
/// file it governs.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// File system errors with the offending path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// A configuration file exists but could not be parsed
    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A configuration file with an extension we cannot read
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedConfigFormat(PathBuf),

    /// Tree-sitter could not produce a tree for the source
    #[error("Failed to parse source with the {parser} parser: {message}")]
    Parse { parser: String, message: String },

    /// A parser name that is not in the dispatch table
    #[error("Unknown parser: {0}")]
    UnknownParser(String),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a source parse error
    pub fn parse(parser: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            parser: parser.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this error by editing their project
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound(_)
                | Self::ConfigParse { .. }
                | Self::UnsupportedConfigFormat(_)
                | Self::UnknownParser(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
