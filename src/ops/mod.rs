//! Action registry and the actions it dispatches to.
//!
//! Every command a user can type is described by an `ActionSpec`: its alias
//! set, the providers it needs resolved before invocation, whether it is
//! destructive (confirmation-gated), and the function that runs it. The
//! registry is the single source of truth for dispatch, help text, and
//! tab-completion candidates.

pub mod admin;
pub mod edit;
pub mod view;

use crate::editor::Editor;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use std::io::Write;

/// The closed set of sources an action can declare parameters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// The storage collaborator.
    Store,
    /// An entry id, parsed from the command tail or prompted for.
    EntryId,
    /// The action registry itself (help introspects it).
    Registry,
}

/// Signature shared by all action implementations.
pub type ActionFn = fn(&mut Ctx<'_>) -> AppResult<()>;

/// Descriptor for one registered action, built once at registration.
#[derive(Clone, Copy)]
pub struct ActionSpec {
    /// Stable identifier, used for logging.
    pub name: &'static str,
    /// User-typed tokens that invoke this action.
    pub aliases: &'static [&'static str],
    /// Providers to resolve before invocation. Only `EntryId` resolution has
    /// side effects (tail parsing or an interactive prompt); the others are
    /// borrows carried in `Ctx`.
    pub params: &'static [Provider],
    /// Destructive actions are confirmation-gated by the dispatcher.
    pub destructive: bool,
    /// The action implementation.
    pub run: ActionFn,
}

/// Resolved providers handed to an action's `run` function for one
/// invocation.
pub struct Ctx<'a> {
    pub store: &'a dyn EntryStore,
    pub editor: &'a dyn Editor,
    pub registry: &'a Registry,
    pub out: &'a mut dyn Write,
    /// Set by the dispatcher when the action declares `Provider::EntryId`.
    pub entry_id: Option<i64>,
}

impl Ctx<'_> {
    /// The id resolved for this invocation.
    ///
    /// Actions that declare `Provider::EntryId` always find it set; anything
    /// else reaching for it is a dispatch bug, reported as fatal.
    pub fn entry_id(&self) -> AppResult<i64> {
        self.entry_id.ok_or_else(|| {
            AppError::Dispatch("action invoked without a resolved entry id".to_string())
        })
    }
}

/// Ordered mapping of actions to their alias sets.
pub struct Registry {
    actions: Vec<ActionSpec>,
}

impl Registry {
    /// The standard journal actions, in their canonical order.
    pub fn standard() -> Self {
        Registry {
            actions: vec![
                ActionSpec {
                    name: "help",
                    aliases: &["h", "help"],
                    params: &[Provider::Registry],
                    destructive: false,
                    run: help,
                },
                ActionSpec {
                    name: "list",
                    aliases: &["list", "l"],
                    params: &[Provider::Store],
                    destructive: false,
                    run: view::list,
                },
                ActionSpec {
                    name: "show",
                    aliases: &["s", "show"],
                    params: &[Provider::EntryId, Provider::Store],
                    destructive: false,
                    run: view::show,
                },
                ActionSpec {
                    name: "update",
                    aliases: &["update", "u"],
                    params: &[Provider::Store, Provider::EntryId],
                    destructive: false,
                    run: edit::update,
                },
                ActionSpec {
                    name: "new",
                    aliases: &["new", "n"],
                    params: &[Provider::Store],
                    destructive: false,
                    run: edit::create,
                },
                ActionSpec {
                    name: "random",
                    aliases: &["random"],
                    params: &[Provider::Store],
                    destructive: false,
                    run: edit::random_fill,
                },
                ActionSpec {
                    name: "delete",
                    aliases: &["delete", "d"],
                    params: &[Provider::EntryId, Provider::Store],
                    destructive: true,
                    run: admin::delete,
                },
                ActionSpec {
                    name: "reset",
                    aliases: &["reset"],
                    params: &[Provider::Store],
                    destructive: true,
                    run: admin::reset,
                },
            ],
        }
    }

    pub fn actions(&self) -> &[ActionSpec] {
        &self.actions
    }

    /// One line of help: the shortest alias of every action, in registry
    /// order, joined by `/`. Ties go to the earlier alias.
    pub fn help_line(&self) -> String {
        self.actions
            .iter()
            .map(|spec| {
                spec.aliases
                    .iter()
                    .min_by_key(|alias| alias.len())
                    .copied()
                    .unwrap_or(spec.name)
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Tab-completion candidates: the longest alias of every action. Ties go
    /// to the later alias. Help favors brevity, completion favors
    /// descriptiveness.
    pub fn completion_options(&self) -> Vec<String> {
        self.actions
            .iter()
            .map(|spec| {
                spec.aliases
                    .iter()
                    .max_by_key(|alias| alias.len())
                    .copied()
                    .unwrap_or(spec.name)
                    .to_string()
            })
            .collect()
    }
}

/// Prints the shortest-alias cheat sheet.
fn help(ctx: &mut Ctx<'_>) -> AppResult<()> {
    writeln!(ctx.out, "{}", ctx.registry.help_line())?;
    Ok(())
}
