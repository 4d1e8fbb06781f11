//! Conversion between entries and editor-facing text.
//!
//! An entry travels to the editor with a short header prepended (a
//! human-readable `created:` line and a `~` bar of the same width) and comes
//! back as raw buffer text. `from_editable` strips the header positionally:
//! the first `header_size` lines are discarded without checking that they
//! still look like a header, so a user who deletes header lines in the
//! editor loses that many body lines.

use crate::constants::TIMESTAMP_DISPLAY_FORMAT;
use crate::entry::Entry;
use chrono::NaiveDateTime;

/// Formats a timestamp the way headers and list rows display it:
/// `(YYYY-MM-DD:HH.MM)`.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    format!("({})", timestamp.format(TIMESTAMP_DISPLAY_FORMAT))
}

/// The two-line editor header: a `created:` line and a `~` bar of exactly
/// the same character length.
fn make_header(timestamp: &NaiveDateTime) -> String {
    let line = format!("created: {}", format_timestamp(timestamp));
    let bar = "~".repeat(line.chars().count());
    format!("{}\n{}", line, bar)
}

/// Renders an entry as editor-ready text: header, newline, body.
///
/// Pure function of the entry; deterministic input gives deterministic
/// output.
pub fn to_editable(entry: &Entry) -> String {
    format!("{}\n{}", make_header(&entry.timestamp), entry.text)
}

/// Parses edited buffer text back into an entry body.
///
/// The first `header_size` lines are discarded unconditionally and the rest
/// are rejoined with newlines. If the buffer has fewer lines than
/// `header_size` the body is empty. The returned entry keeps the sentinel
/// timestamp; a fresh-write flow is responsible for stamping the current
/// time before persisting.
pub fn from_editable(text: &str, header_size: usize) -> Entry {
    let body = text
        .split('\n')
        .skip(header_size)
        .collect::<Vec<_>>()
        .join("\n");
    Entry::with_text(body)
}
