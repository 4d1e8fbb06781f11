/*!
# Jotter - An Interactive Command-Line Journal

Jotter runs a prompt loop in which short commands create, list, view, edit,
and delete timestamped free-text entries. Entry bodies are authored in an
external editor; entries persist in a SQLite database under the data
directory.

## Usage

```
jotter [OPTIONS]

Options:
  -d, --dir <DIR>   Directory holding the journal database (overrides JOTTER_DIR)
  -v, --verbose     Print verbose output
  -h, --help        Print help information
  -V, --version     Print version information
```

At the prompt, `h` lists the available commands, tab completes command
names, and `q` or Ctrl-C leaves.

## Configuration

- `JOTTER_EDITOR` or `EDITOR`: editor used to author entries (defaults to "vim")
- `JOTTER_DIR`: data directory (defaults to "~/.jotter")
*/

use clap::Parser;
use jotter::cli::CliArgs;
use jotter::completer::ReplHelper;
use jotter::config::Config;
use jotter::constants::{FAREWELL, PROMPT};
use jotter::editor::SystemEditor;
use jotter::errors::AppResult;
use jotter::repl::{LoopControl, Repl, StdinPrompt};
use jotter::store::{EntryStore, SqliteStore};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as LineConfig, Editor as LineEditor};
use std::io;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the jotter application.
///
/// Wires up logging, the interrupt handler, configuration, the storage and
/// editor collaborators, and the readline loop, then dispatches lines until
/// the user quits. Fatal errors propagate out of this function and terminate
/// the process; recoverable domain errors never leave the dispatcher.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    debug!("CLI arguments: {:?}", args);

    // Fires at blocking points outside the readline prompt (editor sessions,
    // stdin prompts); the prompt itself reports Ctrl-C as
    // ReadlineError::Interrupted. Its only job is the farewell and an
    // immediate exit.
    ctrlc::set_handler(|| {
        println!("\n{}", FAREWELL);
        process::exit(0);
    })?;

    let mut config = Config::load()?;
    if let Some(dir) = args.dir {
        config.data_dir = dir;
    }
    info!("using data directory {:?}", config.data_dir);

    let store = SqliteStore::open(&config.data_dir);
    store.init_table()?;
    let editor = SystemEditor::new(config.editor.clone());

    let mut repl = Repl::new(store, editor, StdinPrompt, io::stdout());
    let helper = ReplHelper::new(repl.registry().completion_options());

    let line_config = LineConfig::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut lines: LineEditor<ReplHelper, DefaultHistory> = LineEditor::with_config(line_config)?;
    lines.set_helper(Some(helper));

    loop {
        match lines.readline(PROMPT) {
            Ok(line) => {
                let _ = lines.add_history_entry(line.as_str());
                match repl.process_line(&line)? {
                    LoopControl::Continue => {}
                    LoopControl::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", FAREWELL);
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
