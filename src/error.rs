//! Error types for api-surface

use std::process::ExitCode;

use thiserror::Error;

use crate::schema::DeclKind;

/// Errors produced by the extraction pipeline
#[derive(Debug, Error)]
pub enum ApiSurfaceError {
    /// A formatter was handed a declaration whose kind does not match.
    ///
    /// This indicates an internal wiring defect, never bad input, and aborts
    /// the whole run.
    #[error("declaration kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: DeclKind, actual: DeclKind },

    /// An entry-point file or packages root does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The TypeScript grammar could not be loaded or a source file could not
    /// be parsed
    #[error("parse failure: {message}")]
    ParseFailure { message: String },

    /// Underlying I/O failure while reading sources or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the output payload failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiSurfaceError {
    /// Map the error to a process exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        let code: u8 = match self {
            Self::FileNotFound { .. } => 2,
            Self::ParseFailure { .. } => 3,
            Self::KindMismatch { .. } => 4,
            Self::Io(_) => 5,
            Self::Serialization(_) => 6,
        };
        ExitCode::from(code)
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ApiSurfaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_message() {
        let err = ApiSurfaceError::KindMismatch {
            expected: DeclKind::Function,
            actual: DeclKind::Class,
        };
        let msg = err.to_string();
        assert!(msg.contains("function"));
        assert!(msg.contains("class"));
    }
}
