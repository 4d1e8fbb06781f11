//! Integration tests for the interactive dispatch engine.
//!
//! These drive `Repl::process_line` directly with a scripted editor and
//! prompt over a real SQLite store in a temporary directory, so the whole
//! command path from tokenizing to storage is exercised without a terminal.

use jotter::editor::Editor;
use jotter::errors::AppResult;
use jotter::repl::{LoopControl, Prompt, Repl};
use jotter::store::{EntryStore, SqliteStore};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tempfile::TempDir;

/// Editor double returning pre-scripted buffers and recording the seeds it
/// was given. Panics if invoked more often than scripted, which doubles as
/// the assertion that gated actions never reach the editor.
struct ScriptedEditor {
    buffers: RefCell<VecDeque<String>>,
    seeds: Rc<RefCell<Vec<String>>>,
}

impl ScriptedEditor {
    fn returning(texts: &[&str]) -> Self {
        ScriptedEditor {
            buffers: RefCell::new(texts.iter().map(|t| t.to_string()).collect()),
            seeds: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn seeds(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.seeds)
    }
}

impl Editor for ScriptedEditor {
    fn edit(&self, seed: &str) -> AppResult<String> {
        self.seeds.borrow_mut().push(seed.to_string());
        Ok(self
            .buffers
            .borrow_mut()
            .pop_front()
            .expect("editor invoked more times than scripted"))
    }
}

/// Prompt double answering from a script. Panics if asked more questions
/// than scripted.
struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    fn answering(answers: &[&str]) -> Self {
        ScriptedPrompt {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _question: &str) -> AppResult<String> {
        Ok(self
            .answers
            .pop_front()
            .expect("prompt asked more questions than scripted"))
    }
}

fn fresh_store() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(dir.path());
    store.init_table().unwrap();
    (dir, store)
}

/// Feeds `lines` through a dispatcher wired to the given doubles and
/// returns everything it printed.
fn run_lines(
    store: &SqliteStore,
    editor: ScriptedEditor,
    answers: &[&str],
    lines: &[&str],
) -> String {
    let mut out = Vec::new();
    {
        let mut repl = Repl::new(
            store.clone(),
            editor,
            ScriptedPrompt::answering(answers),
            &mut out,
        );
        for line in lines {
            match repl.process_line(line).expect("unexpected fatal error") {
                LoopControl::Exit => break,
                LoopControl::Continue => {}
            }
        }
    }
    String::from_utf8(out).unwrap()
}

fn run_quiet(store: &SqliteStore, answers: &[&str], lines: &[&str]) -> String {
    run_lines(store, ScriptedEditor::returning(&[]), answers, lines)
}

#[test]
fn end_to_end_journal_session() {
    let (_dir, store) = fresh_store();

    // new: the editor hands back a buffer whose two header lines get
    // stripped off.
    let out = run_lines(
        &store,
        ScriptedEditor::returning(&["HEADER\nHEADER\nhello"]),
        &[],
        &["n"],
    );
    assert_eq!(out, "");
    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0, 1);
    assert_eq!(all[0].1.text, "hello");

    // list: one row, preview padded, id bracketing both ends.
    let out = run_quiet(&store, &[], &["l"]);
    assert!(out.starts_with("1| hello"), "unexpected row: {:?}", out);
    assert!(out.trim_end().ends_with("|1"));
    assert_eq!(out.lines().count(), 1);

    // show: body between '=' bars sized to the longest line.
    let out = run_quiet(&store, &[], &["s 1"]);
    assert_eq!(out, "=====\nhello\n=====\n");

    // delete with confirmation.
    let out = run_quiet(&store, &["y"], &["d 1"]);
    assert_eq!(out, "nb of rows deleted: 1\n");

    // Nothing left.
    let out = run_quiet(&store, &[], &["l"]);
    assert_eq!(out, "");
}

#[test]
fn new_seeds_editor_with_header_template() {
    let (_dir, store) = fresh_store();
    let editor = ScriptedEditor::returning(&["a\nb\nbody"]);
    let seeds = editor.seeds();

    run_lines(&store, editor, &[], &["new"]);

    let seeds = seeds.borrow();
    assert_eq!(seeds.len(), 1);
    let mut lines = seeds[0].split('\n');
    let first = lines.next().unwrap();
    let bar = lines.next().unwrap();
    assert!(first.starts_with("created: ("));
    assert_eq!(bar.chars().count(), first.chars().count());
    assert!(bar.chars().all(|c| c == '~'));
    // Empty template body after the header.
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn update_rewrites_entry_under_same_id() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\nfirst version"]),
        &[],
        &["n"],
    );

    let editor = ScriptedEditor::returning(&["x\nx\nsecond version"]);
    let seeds = editor.seeds();
    run_lines(&store, editor, &[], &["u 1"]);

    // The editor was seeded with the existing body under its header.
    assert!(seeds.borrow()[0].ends_with("\nfirst version"));

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0, 1);
    assert_eq!(all[0].1.text, "second version");
}

#[test]
fn update_of_missing_entry_reports_and_skips_editor() {
    let (_dir, store) = fresh_store();
    // Scripted with no buffers: reaching the editor would panic the test.
    let out = run_quiet(&store, &[], &["u 7"]);
    assert_eq!(out, "Entry with id 7 not found\n");
}

#[test]
fn show_of_missing_entry_reports_not_found() {
    let (_dir, store) = fresh_store();
    let out = run_quiet(&store, &[], &["s 42"]);
    assert_eq!(out, "Entry with id 42 not found\n");
}

#[test]
fn non_integer_id_reports_and_continues() {
    let (_dir, store) = fresh_store();
    let out = run_quiet(&store, &[], &["s abc", "h"]);
    assert_eq!(
        out,
        "Expected integer, unlike: abc\nh/l/s/u/n/random/d/reset\n"
    );
}

#[test]
fn missing_id_is_prompted_for() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\nalpha"]),
        &[],
        &["n"],
    );

    let out = run_quiet(&store, &["1"], &["s"]);
    assert_eq!(out, "=====\nalpha\n=====\n");
}

#[test]
fn declined_confirmation_leaves_storage_untouched() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\nkeep me"]),
        &[],
        &["n"],
    );

    let out = run_quiet(&store, &["n"], &["delete 1"]);
    assert_eq!(out, "nothing happened\n");
    assert_eq!(store.get_all().unwrap().len(), 1);

    // Only an exact "y" confirms; "yes" declines too.
    let out = run_quiet(&store, &["yes"], &["delete 1"]);
    assert_eq!(out, "nothing happened\n");
    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn confirmed_delete_removes_exactly_once() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\ndoomed"]),
        &[],
        &["n"],
    );

    let out = run_quiet(&store, &["y"], &["delete 5"]);
    assert_eq!(out, "nb of rows deleted: 0\n");

    let out = run_quiet(&store, &["y"], &["delete 1"]);
    assert_eq!(out, "nb of rows deleted: 1\n");
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn delete_confirms_before_prompting_for_id() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\ntarget"]),
        &[],
        &["n"],
    );

    // Confirmation is answered first, then the id prompt.
    let out = run_quiet(&store, &["y", "1"], &["d"]);
    assert_eq!(out, "nb of rows deleted: 1\n");
}

#[test]
fn reset_wipes_storage_and_reinitializes() {
    let (dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\none", "x\nx\ntwo"]),
        &[],
        &["n", "n"],
    );
    assert_eq!(store.get_all().unwrap().len(), 2);

    let out = run_quiet(&store, &["y"], &["reset"]);
    assert_eq!(out, "");
    assert!(store.get_all().unwrap().is_empty());
    assert!(dir.path().exists());

    // Ids restart on the fresh schema.
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\nreborn"]),
        &[],
        &["n"],
    );
    assert_eq!(store.get_all().unwrap()[0].0, 1);
}

#[test]
fn random_fills_storage_with_gibberish() {
    let (_dir, store) = fresh_store();
    let out = run_quiet(&store, &[], &["random"]);
    assert_eq!(out, "");

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    let text = &all[0].1.text;
    assert_eq!(text.chars().count(), 64);
    assert!(text.chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
}

#[test]
fn blank_and_unknown_lines_are_silent_no_ops() {
    let (_dir, store) = fresh_store();
    let out = run_quiet(&store, &[], &["", "   ", "frobnicate", "frobnicate 3"]);
    assert_eq!(out, "");
}

#[test]
fn quit_stops_the_loop_before_later_lines() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&["x\nx\nvisible"]),
        &[],
        &["n"],
    );

    for quit in ["q", "quit"] {
        let out = run_quiet(&store, &[], &[quit, "l"]);
        assert_eq!(out, "", "{} should exit before the list runs", quit);
    }
}

#[test]
fn help_prints_shortest_alias_cheat_sheet() {
    let (_dir, store) = fresh_store();
    let out = run_quiet(&store, &[], &["h"]);
    assert_eq!(out, "h/l/s/u/n/random/d/reset\n");
    let out = run_quiet(&store, &[], &["help"]);
    assert_eq!(out, "h/l/s/u/n/random/d/reset\n");
}

#[test]
fn list_flattens_newlines_and_truncates_previews() {
    let (_dir, store) = fresh_store();
    run_lines(
        &store,
        ScriptedEditor::returning(&[
            "x\nx\nfirst line\nsecond line",
            &format!("x\nx\n{}", "z".repeat(60)),
        ]),
        &[],
        &["n", "n"],
    );

    let out = run_quiet(&store, &[], &["l"]);
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1| first line second line"));
    assert!(rows[1].starts_with(&format!("2| {}...", "z".repeat(29))));
}
