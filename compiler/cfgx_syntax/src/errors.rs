//! Errors raised while loading, parsing, or locating declarations.

use std::io;
use std::path::PathBuf;

/// Failure of the parsing service or the entry-point locator.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parser rejected a source file.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The requested file is not part of the project.
    #[error("file {} is not part of the project", path.display())]
    UnknownFile { path: PathBuf },

    /// No top-level variable declaration with this name exists in the file.
    #[error("no top-level declaration named `{name}` in {}", path.display())]
    NotFound { name: String, path: PathBuf },
}

impl SyntaxError {
    #[cold]
    pub(crate) fn not_found(name: &str, path: impl Into<PathBuf>) -> Self {
        SyntaxError::NotFound {
            name: name.to_string(),
            path: path.into(),
        }
    }
}
