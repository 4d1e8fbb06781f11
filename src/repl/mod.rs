//! The interactive dispatch engine.
//!
//! `Repl` owns the collaborators the actions need (store, editor, prompt,
//! output) and drives one read-eval cycle per input line: tokenize, match
//! the head token against every registered alias set, gate destructive
//! actions behind a confirmation, resolve the matched action's declared
//! providers, invoke it, and report recoverable domain errors as a single
//! printed line. Anything that is not a domain error propagates out and
//! terminates the process.
//!
//! All dependencies are handed to the constructor; the dispatcher never
//! reaches into ambient global state.

use crate::constants::{CONFIRM_PROMPT, ENTRY_ID_PROMPT};
use crate::editor::Editor;
use crate::errors::{AppError, AppResult, CommandError};
use crate::ops::{ActionSpec, Ctx, Provider, Registry};
use crate::store::EntryStore;
use std::io::{self, Write};
use tracing::debug;

/// Whether the loop should keep reading lines.
pub enum LoopControl {
    Continue,
    Exit,
}

/// Source of answers for the dispatcher's blocking questions: the
/// destructive-action confirmation and the interactive entry-id prompt.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> AppResult<String>;
}

/// Production prompt reading answers from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> AppResult<String> {
        print!("{}", question);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        // Only the line terminator comes off; surrounding spaces are the
        // user's answer.
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// The dispatcher: collaborators plus the action registry.
pub struct Repl<S, E, P, W> {
    store: S,
    editor: E,
    prompt: P,
    out: W,
    registry: Registry,
}

impl<S, E, P, W> Repl<S, E, P, W>
where
    S: EntryStore,
    E: Editor,
    P: Prompt,
    W: Write,
{
    pub fn new(store: S, editor: E, prompt: P, out: W) -> Self {
        Repl {
            store,
            editor,
            prompt,
            out,
            registry: Registry::standard(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs one read-eval cycle over an already-read line.
    ///
    /// A blank line and an unmatched head token are both silent no-ops. The
    /// `q`/`quit` check runs after the action sweep, so those tokens would
    /// also fire any action that claimed them as an alias.
    pub fn process_line(&mut self, line: &str) -> AppResult<LoopControl> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(LoopControl::Continue);
        };
        let tail: Vec<&str> = tokens.collect();

        // Every action whose alias set contains the head fires; iteration
        // deliberately does not stop at the first match.
        for index in 0..self.registry.actions().len() {
            let spec = self.registry.actions()[index];
            if !spec.aliases.contains(&head) {
                continue;
            }

            if spec.destructive && !self.confirm()? {
                writeln!(self.out, "nothing happened")?;
                continue;
            }

            debug!("dispatching action {}", spec.name);
            match self.invoke(spec, &tail) {
                Ok(()) => {}
                Err(AppError::Command(err)) => writeln!(self.out, "{}", err)?,
                Err(err) => return Err(err),
            }
        }

        if matches!(head, "q" | "quit") {
            return Ok(LoopControl::Exit);
        }
        Ok(LoopControl::Continue)
    }

    /// Asks for explicit confirmation; anything but exactly `y` declines.
    fn confirm(&mut self) -> AppResult<bool> {
        Ok(self.prompt.ask(CONFIRM_PROMPT)? == "y")
    }

    /// Resolves the action's declared providers and runs it. An unparseable
    /// entry id surfaces here as a domain error, so the caller's report step
    /// sees it exactly like an error thrown by the action itself.
    fn invoke(&mut self, spec: ActionSpec, tail: &[&str]) -> AppResult<()> {
        let mut entry_id = None;
        for provider in spec.params {
            if matches!(provider, Provider::EntryId) {
                entry_id = Some(self.resolve_entry_id(tail)?);
            }
        }

        let mut ctx = Ctx {
            store: &self.store,
            editor: &self.editor,
            registry: &self.registry,
            out: &mut self.out,
            entry_id,
        };
        (spec.run)(&mut ctx)
    }

    /// Takes the id from the first tail token, or prompts for one.
    fn resolve_entry_id(&mut self, tail: &[&str]) -> AppResult<i64> {
        let raw = match tail.first() {
            Some(token) => token.to_string(),
            None => self.prompt.ask(ENTRY_ID_PROMPT)?,
        };
        raw.parse()
            .map_err(|_| CommandError::InvalidId(raw).into())
    }
}
