#![forbid(unsafe_code)]

//! Error types shared by the store, formatters and command dispatcher

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by any mudnix-mgr operation
///
/// Every variant aborts the whole command. Nothing is retried or skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// The users file does not exist
    #[error("users file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    /// The users file is not a well-formed registry document
    #[error("failed to parse users file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be rendered as JSON
    #[error("failed to serialize users for '{}': {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed for a reason other than absence
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user record lacks one of the fields needed to process it
    #[error("user record #{index} has no '{field}' field")]
    FieldMissing { field: &'static str, index: usize },

    /// A user record field is present but has the wrong type or range
    #[error("user record #{index} has an invalid '{field}' field: {reason}")]
    InvalidField {
        field: &'static str,
        index: usize,
        reason: String,
    },

    /// The configuration file could not be read or parsed
    #[error("invalid configuration '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// No operation was selected on the command line
    #[error("no operation given; use one of --list, --userinfo or --userdel")]
    UnknownCommand,

    /// Writing command output failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
