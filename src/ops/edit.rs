//! Actions that author or synthesize entries: new, update, and random.

use super::Ctx;
use crate::authoring::{from_editable, to_editable};
use crate::constants::{DEFAULT_HEADER_SIZE, RANDOM_TEXT_SIZE};
use crate::entry::Entry;
use crate::errors::{AppResult, CommandError};
use chrono::Local;
use rand::Rng;
use tracing::debug;

/// Spaces come up eight times as often as any single letter.
const SPACE_WEIGHT: usize = 8;

/// Opens an empty authoring template in the editor and persists the result
/// as a new entry stamped with the current time.
pub fn create(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let edited = ctx.editor.edit(&to_editable(&Entry::default()))?;
    let mut entry = from_editable(&edited, DEFAULT_HEADER_SIZE);
    entry.timestamp = Local::now().naive_local();
    let id = ctx.store.write(&entry)?;
    debug!("stored new entry with id {}", id);
    Ok(())
}

/// Opens an existing entry in the editor and persists the edited result
/// under the same id with a fresh timestamp.
pub fn update(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let id = ctx.entry_id()?;
    let current = ctx.store.get(id)?.ok_or(CommandError::NotFound(id))?;

    let edited = ctx.editor.edit(&to_editable(&current))?;
    let mut entry = from_editable(&edited, DEFAULT_HEADER_SIZE);
    entry.timestamp = Local::now().naive_local();
    ctx.store.update(id, &entry)?;
    debug!("updated entry {}", id);
    Ok(())
}

/// Persists an entry of lowercase gibberish, for test and demo data.
pub fn random_fill(ctx: &mut Ctx<'_>) -> AppResult<()> {
    let entry = Entry {
        text: gibberish(RANDOM_TEXT_SIZE),
        timestamp: Local::now().naive_local(),
    };
    let id = ctx.store.write(&entry)?;
    debug!("stored random entry with id {}", id);
    Ok(())
}

fn gibberish(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let roll = rng.gen_range(0..26 + SPACE_WEIGHT);
            if roll < SPACE_WEIGHT {
                ' '
            } else {
                (b'a' + (roll - SPACE_WEIGHT) as u8) as char
            }
        })
        .collect()
}
