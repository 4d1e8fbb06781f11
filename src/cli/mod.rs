//! Command-line interface for parsing user arguments.
//!
//! Jotter has no subcommands: the program is the prompt loop. The flags here
//! only adjust how that loop is set up.

use clap::Parser;
use std::path::PathBuf;

/// An interactive command-line journal
#[derive(Parser, Debug)]
#[clap(name = "jotter", about = "An interactive command-line journal")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Directory holding the journal database (overrides JOTTER_DIR)
    #[clap(short, long)]
    pub dir: Option<PathBuf>,

    /// Print verbose output
    #[clap(short, long)]
    pub verbose: bool,
}
