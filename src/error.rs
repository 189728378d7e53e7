//! Errors surfaced to callers that resolve a dependency file end to end.
//!
//! [`ResolveError`] wraps every failure the resolver can hit. Each error
//! belongs to an [`ErrorKind`], and each kind has its own user-facing
//! message, so front ends never need to show the underlying error types.

use std::path::PathBuf;

use crate::graph::TraversalError;
use crate::parser::ParseError;

/// Broad category of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file does not exist
    FileNotFound,
    /// The input file exists but could not be read
    Io,
    /// The input is not well-formed JSON
    Parse,
    /// The JSON does not describe a dependency map
    Schema,
    /// A package depends on itself, directly or transitively
    Cycle,
    /// A package references a dependency with no definition
    UndefinedDependency,
}

/// Failure while reading, parsing or formatting a dependency file.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

impl ResolveError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ResolveError::Read { .. } => ErrorKind::Io,
            ResolveError::Parse(ParseError::IoError(_)) => ErrorKind::Io,
            ResolveError::Parse(ParseError::JsonError(_)) => ErrorKind::Parse,
            ResolveError::Parse(ParseError::SchemaError(_)) => ErrorKind::Schema,
            ResolveError::Traversal(TraversalError::Cycle { .. }) => ErrorKind::Cycle,
            ResolveError::Traversal(TraversalError::UndefinedDependency { .. }) => {
                ErrorKind::UndefinedDependency
            }
        }
    }

    /// Message suitable for showing to an end user.
    ///
    /// Malformed JSON additionally reports the decoder's description of the
    /// problem on a second line.
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::Parse(ParseError::JsonError(e)) => {
                format!("{}\n{}", self.kind().message(), e)
            }
            _ => self.kind().message().to_string(),
        }
    }
}

impl ErrorKind {
    /// Fixed user-facing message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "Error: Could not find given file",
            ErrorKind::Io => "Error: Could not read given file",
            ErrorKind::Parse => "Error: JSON file could not be parsed",
            ErrorKind::Schema => "Error: Incorrect JSON format (likely wrong types)",
            ErrorKind::Cycle => "Error: Dependency cycle detected. Refusing to continue",
            ErrorKind::UndefinedDependency => "Error: Dependency referenced but not defined",
        }
    }
}
