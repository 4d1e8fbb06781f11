//! Read-only views over stored entries: the list and show actions.

use super::Ctx;
use crate::authoring::format_timestamp;
use crate::constants::{PREVIEW_ELLIPSIS, PREVIEW_WIDTH};
use crate::errors::{AppResult, CommandError};
use std::io::Write;

/// Prints one row per stored entry:
/// `id| <preview> (<YYYY-MM-DD:HH.MM>) |id`.
pub fn list(ctx: &mut Ctx<'_>) -> AppResult<()> {
    for (id, entry) in ctx.store.get_all()? {
        writeln!(
            ctx.out,
            "{}| {} {} |{}",
            id,
            text_beginning(entry.text.trim()),
            format_timestamp(&entry.timestamp),
            id
        )?;
    }
    Ok(())
}

/// Prints an entry body between `=` bars sized to its longest line.
pub fn show(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let id = ctx.entry_id()?;
    let entry = ctx.store.get(id)?.ok_or(CommandError::NotFound(id))?;

    let width = entry
        .text
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let bar = "=".repeat(width);

    writeln!(ctx.out, "{}", bar)?;
    writeln!(ctx.out, "{}", entry.text.trim())?;
    writeln!(ctx.out, "{}", bar)?;
    Ok(())
}

/// Fixed-width preview of a body: newlines flattened to spaces, truncated
/// with an ellipsis past `PREVIEW_WIDTH` characters, padded otherwise.
fn text_beginning(text: &str) -> String {
    let cut: String = text
        .chars()
        .take(PREVIEW_WIDTH + 1)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if cut.chars().count() > PREVIEW_WIDTH {
        let kept: String = cut
            .chars()
            .take(PREVIEW_WIDTH - PREVIEW_ELLIPSIS.len())
            .collect();
        format!("{}{}", kept, PREVIEW_ELLIPSIS)
    } else {
        format!("{:<width$}", cut, width = PREVIEW_WIDTH)
    }
}
