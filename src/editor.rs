//! External editor collaborator.
//!
//! This module provides an abstraction for authoring text in an external
//! editor, allowing the application to work with different editors and to be
//! testable by mocking the editor functionality. The seed text is staged in
//! a temporary file, the editor subprocess blocks until the user is done,
//! and the buffer is read back.

use crate::errors::{AppResult, EditorError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::debug;

/// Trait defining the interface for the editor component.
///
/// Implementations block until the editing session is over and return the
/// final buffer contents.
pub trait Editor {
    /// Opens an editing session seeded with `seed` and returns the edited
    /// text.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Editor` if the editor process cannot be launched,
    /// and `AppError::Io` if staging or reading the buffer fails.
    fn edit(&self, seed: &str) -> AppResult<String>;
}

/// An implementation of the `Editor` trait that launches a system command.
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        SystemEditor {
            command: command.into(),
        }
    }
}

impl Editor for SystemEditor {
    /// Stages `seed` in a temporary file, blocks on the editor subprocess,
    /// and reads the buffer back.
    ///
    /// The temporary file is removed by its guard on every exit path from
    /// this call, including editor crashes. A nonzero editor exit is
    /// tolerated: the buffer on disk is whatever the user last wrote, and
    /// that is what the caller gets.
    fn edit(&self, seed: &str) -> AppResult<String> {
        let mut buffer = NamedTempFile::new()?;
        buffer.write_all(seed.as_bytes())?;
        buffer.flush()?;

        debug!("launching editor {} on {:?}", self.command, buffer.path());
        let status = Command::new(&self.command)
            .arg(buffer.path())
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => EditorError::CommandNotFound {
                    command: self.command.clone(),
                    source: e,
                },
                ErrorKind::PermissionDenied => EditorError::PermissionDenied {
                    command: self.command.clone(),
                    source: e,
                },
                _ => EditorError::ExecutionFailed {
                    command: self.command.clone(),
                    source: e,
                },
            })?;
        if !status.success() {
            debug!("editor exited with {:?}; reading buffer anyway", status.code());
        }

        // Read back by path: editors that save via rename leave the original
        // handle pointing at a stale inode.
        Ok(fs::read_to_string(buffer.path())?)
    }
}
