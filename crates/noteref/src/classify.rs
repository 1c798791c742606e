//! Note identity and relationship classification.

use enote::{Note, Pubkey};

use crate::content::{filter_tags_by_content_refs, link_regex};
use crate::coordinate::note_coordinate;
use crate::thread::note_references;
use crate::Result;

/// Kind-6 repost of another note.
pub const KIND_REPOST: u64 = 6;

/// Kinds where only the newest note per (kind, pubkey[, identifier]) is
/// current.
pub fn is_replaceable(kind: u64) -> bool {
    kind == 0
        || kind == 3
        || kind == 41
        || (10000..20000).contains(&kind)
        || (30000..40000).contains(&kind)
}

/// Deduplication key across updates: the coordinate for replaceable kinds,
/// the note id otherwise.
pub fn note_uid(note: &Note) -> String {
    if is_replaceable(note.kind) {
        note_coordinate(note)
    } else {
        note.id.hex()
    }
}

/// Whether the note sits below another note in a thread.
pub fn is_reply(note: &Note) -> Result<bool> {
    if note.kind == KIND_REPOST {
        return Ok(false);
    }
    Ok(note_references(note)?.reply.is_some())
}

/// Kind-6 reposts, and notes whose entire content is a single entity link.
pub fn is_repost(note: &Note) -> bool {
    if note.kind == KIND_REPOST {
        return true;
    }
    link_regex()
        .find(&note.content)
        .is_some_and(|found| found.len() == note.content.len())
}

/// Whether the content's inline links reference a "p" tag for `pubkey`.
pub fn is_mentioned_in_content(note: &Note, pubkey: &Pubkey) -> bool {
    let hex = pubkey.hex();
    filter_tags_by_content_refs(&note.content, &note.tags, true)
        .iter()
        .any(|tag| tag[0] == "p" && tag[1] == hex)
}
