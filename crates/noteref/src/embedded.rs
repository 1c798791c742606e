//! Notes serialized inside another note's content.
//!
//! Legacy kind-6 reposts carry the reposted note as a JSON string in
//! `content`. Decoding is best effort: anything that is not a structurally
//! valid note comes back as `None`, never as an error.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::trace;

use enote::Note;

/// Decode a note embedded as JSON in `content`.
///
/// A missing `tags` field is treated as empty, since some legacy clients
/// dropped it when re-serializing.
pub fn embedded_note(note: &Note) -> Option<Note> {
    let mut json: Value = match serde_json::from_str(&note.content) {
        Ok(json) => json,
        Err(err) => {
            trace!("embedded content is not json: {err}");
            return None;
        }
    };

    let object = json.as_object_mut()?;
    object
        .entry("tags")
        .or_insert_with(|| Value::Array(Vec::new()));

    serde_json::from_value(json).ok()
}

/// Newest-first ordering by `created_at`, for chronological listings.
pub fn newest_first(a: &Note, b: &Note) -> Ordering {
    b.created_at.cmp(&a.created_at)
}
