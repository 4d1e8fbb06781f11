//! Error handling utilities for the jotter application.
//!
//! This module provides the central error type `AppError` which represents
//! all possible error conditions that might occur in the application, as well
//! as the convenience type alias `AppResult` for functions that can return
//! these errors.
//!
//! Domain errors a user can recover from at the prompt (`CommandError`) are
//! kept separate from collaborator failures (`EditorError`, `StoreError`):
//! the dispatcher prints the former and keeps looping, while the latter
//! propagate out of `main` and terminate the process.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur when launching the
/// external editor.
///
/// Each variant captures the editor command and, where applicable, the
/// underlying I/O error. All of these are fatal: an editor that cannot be
/// launched is an environment failure, not a user mistake.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents error cases that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Recoverable domain errors raised while dispatching a command.
///
/// These surface a user mistake, are printed as a single line at the
/// dispatcher's report step, and never terminate the loop. `InvalidId`
/// signals a malformed reference; `NotFound` signals a well-formed reference
/// to an entry that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The token supplied where an entry id was expected is not an integer.
    #[error("Expected integer, unlike: {0}")]
    InvalidId(String),

    /// No entry exists under the given id.
    #[error("Entry with id {0} not found")]
    NotFound(i64),
}

/// Represents all possible errors that can occur in the jotter application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors when launching the external editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Errors from the storage collaborator.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Recoverable domain errors; the dispatcher prints these and continues.
    #[error("{0}")]
    Command(#[from] CommandError),

    /// Errors from the interactive line editor.
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Errors installing the interrupt handler.
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),

    /// Internal dispatch invariant violations.
    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
