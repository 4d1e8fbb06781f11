//! Configuration management for the jotter application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring
//! the data directory and the editor command used to author entries.
//!
//! # Environment Variables
//!
//! - `JOTTER_DIR`: Path to the data directory (defaults to ~/.jotter)
//! - `JOTTER_EDITOR`: Editor to use for authoring entries
//! - `EDITOR`: Fallback editor if JOTTER_EDITOR is not set (defaults to "vim")

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_EDITOR_COMMAND, EDITOR_FORBIDDEN_CHARS, ENV_VAR_EDITOR,
    ENV_VAR_JOTTER_DIR, ENV_VAR_JOTTER_EDITOR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the jotter application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Editor command used to author entry bodies.
    ///
    /// Loaded from environment variables in order of precedence:
    /// 1. JOTTER_EDITOR
    /// 2. EDITOR
    /// 3. Defaults to "vim" if neither is set
    pub editor: String,

    /// Directory holding the journal database. This is also the location the
    /// destructive reset action wipes.
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables with sensible
    /// defaults, expanding `~` in the data directory path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the editor command fails validation
    /// (empty, contains spaces or shell metacharacters).
    pub fn load() -> AppResult<Self> {
        let editor = env::var(ENV_VAR_JOTTER_EDITOR)
            .or_else(|_| env::var(ENV_VAR_EDITOR))
            .unwrap_or_else(|_| DEFAULT_EDITOR_COMMAND.to_string());
        Self::validate_editor_command(&editor)?;

        let raw_dir = env::var(ENV_VAR_JOTTER_DIR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let data_dir = PathBuf::from(shellexpand::tilde(&raw_dir).into_owned());

        Ok(Config { editor, data_dir })
    }

    /// Validates an editor command string for security.
    ///
    /// The command must be non-empty, contain no spaces (wrapper scripts
    /// cover editors needing arguments), and contain no shell
    /// metacharacters.
    fn validate_editor_command(editor_cmd: &str) -> AppResult<()> {
        if editor_cmd.is_empty() {
            return Err(AppError::Config(
                "Editor command cannot be empty".to_string(),
            ));
        }

        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
            ));
        }

        for &ch in EDITOR_FORBIDDEN_CHARS.iter() {
            if editor_cmd.contains(ch) {
                return Err(AppError::Config(format!(
                    "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
                    ch
                )));
            }
        }

        Ok(())
    }
}
