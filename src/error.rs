//! Error types for file-lookup
//!
//! This module defines the error hierarchy that covers:
//! - Lookup validation errors (required query field unset)
//! - Traversal errors (unreadable directories, missing root)
//! - Configuration and CLI errors
//!
//! Library code returns these typed errors; the binary wraps them with
//! anyhow context.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lookups
#[derive(Error, Debug)]
pub enum LookupError {
    /// A lookup was invoked without the field it needs
    #[error("Invalid argument: {field} must be set for this lookup")]
    InvalidArgument { field: &'static str },

    /// Traversal failed and the error policy is to abort
    #[error("Failed to walk '{path}': {reason}")]
    Walk { path: PathBuf, reason: String },

    /// Root directory could not be read at all
    #[error("Cannot read root '{path}': {reason}")]
    RootUnreadable { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LookupError {
    /// Build a traversal error from a walkdir failure
    pub fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());

        // The root itself failing means nothing could be searched
        if err.depth() == 0 {
            return LookupError::RootUnreadable {
                path,
                reason: describe_walk_error(&err),
            };
        }

        LookupError::Walk {
            path,
            reason: describe_walk_error(&err),
        }
    }

    /// Check if this error was raised before any traversal started
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LookupError::InvalidArgument { .. } | LookupError::Config(_)
        )
    }
}

/// Render a walkdir error without repeating the path
pub(crate) fn describe_walk_error(err: &walkdir::Error) -> String {
    if err.loop_ancestor().is_some() {
        return "filesystem loop detected".to_string();
    }
    match err.io_error() {
        Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
            "permission denied".to_string()
        }
        Some(io) if io.kind() == std::io::ErrorKind::NotFound => "no such file or directory".to_string(),
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Root does not exist
    #[error("Root '{path}' does not exist")]
    RootMissing { path: PathBuf },

    /// Root exists but is not a directory
    #[error("Root '{path}' is not a directory")]
    RootNotDirectory { path: PathBuf },

    /// Root could not be made absolute
    #[error("Invalid root '{path}': {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// Empty query strings are rejected at the CLI
    #[error("Empty {what} query is not allowed")]
    EmptyQuery { what: &'static str },
}

/// Result type alias for LookupError
pub type Result<T> = std::result::Result<T, LookupError>;
