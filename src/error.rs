//! Error types for model construction and table loading.

use thiserror::Error;

/// Precondition violations rejected by the model constructors.
///
/// Lookup misses in the registries or the cross-locale terms index are
/// ordinary control flow, never errors; only malformed construction input
/// is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("term text must not be empty")]
    EmptyTerm,
    #[error("correspond key must not be empty")]
    EmptyCorrespond,
}

/// Errors from the table-document front end.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read table document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse table document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid table document at {path}: {message}")]
    Invalid {
        /// Path into the document (e.g. `rows[3].ja.word[0]`).
        path: String,
        message: String,
    },
}

impl LoadError {
    pub(crate) fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid { path: path.into(), message: message.into() }
    }
}
