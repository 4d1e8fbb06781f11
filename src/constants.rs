//! Constants used throughout the application.
//!
//! This module contains all constants used in the Jotter application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Jotter data directory.
pub const ENV_VAR_JOTTER_DIR: &str = "JOTTER_DIR";
/// Environment variable for specifying the preferred Jotter editor.
pub const ENV_VAR_JOTTER_EDITOR: &str = "JOTTER_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Default command for the editor if not specified otherwise.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";
/// Default data directory, expanded relative to the user's home.
pub const DEFAULT_DATA_DIR: &str = "~/.jotter";
/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "entries.db";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];

// Interactive Surface
/// Prompt shown at the start of every read-eval cycle.
pub const PROMPT: &str = "> ";
/// Question asked before a destructive action runs.
pub const CONFIRM_PROMPT: &str = "Are you sure? (y/*)";
/// Question asked when an action needs an entry id and none was typed inline.
pub const ENTRY_ID_PROMPT: &str = "entry id?";
/// Farewell line printed on interrupt.
pub const FAREWELL: &str = "bye";

// Authoring
/// Number of header lines prepended to editor buffers and stripped back off.
pub const DEFAULT_HEADER_SIZE: usize = 2;
/// Timestamp format used in headers and list rows.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d:%H.%M";
/// Timestamp format used for database storage.
pub const TIMESTAMP_STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Rendering
/// Width of the entry preview column in list rows.
pub const PREVIEW_WIDTH: usize = 32;
/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: &str = "...";

// Test Data
/// Length of the gibberish text produced by the random action.
pub const RANDOM_TEXT_SIZE: usize = 64;
