//! Destructive maintenance actions: delete and reset.
//!
//! Both are confirmation-gated by the dispatcher before they ever run.

use super::Ctx;
use crate::errors::AppResult;
use std::fs;
use std::io::Write;
use tracing::info;

/// Deletes one entry and reports how many rows went away.
pub fn delete(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let id = ctx.entry_id()?;
    let removed = ctx.store.delete(id)?;
    writeln!(ctx.out, "nb of rows deleted: {}", removed)?;
    Ok(())
}

/// Wipes the entire storage location and reinitializes the schema.
///
/// Filesystem failures here are environment problems and propagate as
/// fatal.
pub fn reset(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let base = ctx.store.base_dir().to_path_buf();
    if base.exists() {
        fs::remove_dir_all(&base)?;
    }
    ctx.store.init_table()?;
    info!("storage reset at {:?}", base);
    Ok(())
}
