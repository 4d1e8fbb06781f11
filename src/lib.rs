/*!
# Jotter

Jotter is an interactive command-line journal. It runs a prompt loop in which
short commands create, list, view, edit, and delete free-text entries. Entry
bodies are authored in an external text editor; entries are persisted through
a SQLite-backed store.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line argument handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entry`: The text + timestamp data entity
- `authoring`: Conversion between entries and editor-facing text
- `completer`: Tab-completion over command aliases
- `editor`: The external editor collaborator
- `store`: The storage collaborator
- `ops`: The action registry and the actions it dispatches to
- `repl`: The interactive dispatch engine
*/

/// Conversion between entries and editor-facing text
pub mod authoring;
/// Command-line interface for parsing user arguments
pub mod cli;
/// Tab-completion over command aliases
pub mod completer;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// External editor collaborator
pub mod editor;
/// The journal entry data entity
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Action registry and action implementations
pub mod ops;
/// The interactive dispatch engine
pub mod repl;
/// Storage collaborator
pub mod store;

// Re-export important types for convenience
pub use config::Config;
pub use entry::Entry;
pub use errors::{AppError, AppResult};
pub use repl::{LoopControl, Repl};
