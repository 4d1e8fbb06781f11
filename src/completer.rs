//! Tab-completion over command aliases.
//!
//! `AliasCompleter` implements the readline completion protocol: the caller
//! asks for matches one at a time with a monotonically increasing `state`
//! index, restarting at zero whenever the typed prefix changes. `ReplHelper`
//! adapts that protocol to rustyline's completion traits so the prompt loop
//! can drive it with the tab key.

use std::cell::RefCell;

use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Stateful prefix completer over a fixed candidate set.
///
/// Candidates are sorted lexicographically once at construction. The match
/// list is rebuilt only when `state == 0`; later states index into the list
/// computed for the session's prefix, so callers must restart at zero when
/// the prefix changes.
pub struct AliasCompleter {
    options: Vec<String>,
    matches: Vec<String>,
    query: String,
}

impl AliasCompleter {
    /// Creates a completer over the given candidates, sorting them once.
    pub fn new(mut options: Vec<String>) -> Self {
        options.sort();
        AliasCompleter {
            options,
            matches: Vec::new(),
            query: String::new(),
        }
    }

    /// Returns the `state`-th match for `text`, or `None` past the end.
    ///
    /// At `state == 0` the match list is recomputed: all candidates starting
    /// with `text`, in sorted order, or every candidate when `text` is
    /// empty. Any other `state` only indexes the previously computed list.
    pub fn complete(&mut self, text: &str, state: usize) -> Option<&str> {
        if state == 0 {
            self.matches = if text.is_empty() {
                self.options.clone()
            } else {
                self.options
                    .iter()
                    .filter(|option| option.starts_with(text))
                    .cloned()
                    .collect()
            };
            self.query = text.to_string();
        }
        self.matches.get(state).map(String::as_str)
    }

    /// The prefix that produced the current match list.
    pub fn last_query(&self) -> &str {
        &self.query
    }
}

/// rustyline helper completing the word under the cursor against the
/// registry's alias candidates.
pub struct ReplHelper {
    // rustyline completes through &self; the loop is single-threaded.
    completer: RefCell<AliasCompleter>,
}

impl ReplHelper {
    pub fn new(options: Vec<String>) -> Self {
        ReplHelper {
            completer: RefCell::new(AliasCompleter::new(options)),
        }
    }
}

impl Completer for ReplHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |idx| idx + 1);
        let word = &line[start..pos];

        let mut completer = self.completer.borrow_mut();
        let mut candidates = Vec::new();
        let mut state = 0;
        while let Some(candidate) = completer.complete(word, state) {
            candidates.push(candidate.to_string());
            state += 1;
        }
        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}
