//! Root and reply references for threaded notes.
//!
//! Thread position comes from "e" and "a" tags. Current clients mark them
//! with an explicit "root"/"reply" marker; older clients relied on tag
//! position. The rules are applied in order: marker lookup, direct-reply
//! shorthand, then the legacy positional scan.

use enote::{ATag, AddressPointer, ETag, EventPointer, Note};

use crate::content::content_tag_ref_slots;
use crate::coordinate::{a_tag_to_address_pointer, e_tag_to_event_pointer};
use crate::Result;

const MARKER_ROOT: &str = "root";
const MARKER_REPLY: &str = "reply";

/// Thread position of a note, as raw tag views.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadTags<'a> {
    pub root: Option<ThreadRefTags<'a>>,
    pub reply: Option<ThreadRefTags<'a>>,
}

/// One thread reference; at least one of `e`/`a` is present.
#[derive(Debug, Clone, Copy)]
pub struct ThreadRefTags<'a> {
    pub e: Option<ETag<'a>>,
    pub a: Option<ATag<'a>>,
}

/// Thread position of a note, as pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteReferences {
    pub root: Option<ThreadRef>,
    pub reply: Option<ThreadRef>,
}

/// One thread reference; at least one of `e`/`a` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRef {
    pub e: Option<EventPointer>,
    pub a: Option<AddressPointer>,
}

/// Resolve the note's root and reply tags.
pub fn interpret_tags(note: &Note) -> ThreadTags<'_> {
    let e_tags: Vec<(usize, ETag)> = note
        .tags
        .iter()
        .enumerate()
        .filter_map(|(slot, tag)| ETag::parse(tag).map(|e| (slot, e)))
        .collect();
    let a_tags: Vec<(usize, ATag)> = note
        .tags
        .iter()
        .enumerate()
        .filter_map(|(slot, tag)| ATag::parse(tag).map(|a| (slot, a)))
        .collect();

    let marked_e = |marker| {
        e_tags
            .iter()
            .find(|(_, tag)| tag.marker == Some(marker))
            .map(|(_, tag)| *tag)
    };
    let marked_a = |marker| {
        a_tags
            .iter()
            .find(|(_, tag)| tag.marker == Some(marker))
            .map(|(_, tag)| *tag)
    };

    let mut root_e = marked_e(MARKER_ROOT);
    let mut reply_e = marked_e(MARKER_REPLY);
    let mut root_a = marked_a(MARKER_ROOT);
    let mut reply_a = marked_a(MARKER_REPLY);

    // a direct reply to the root does not need its own "reply" marker; when
    // only one of the two was marked, that tag stands for both
    if root_e.is_none() != reply_e.is_none() {
        let only = root_e.or(reply_e);
        root_e = only;
        reply_e = only;
    }
    if root_a.is_none() != reply_a.is_none() {
        let only = root_a.or(reply_a);
        root_a = only;
        reply_a = only;
    }

    // legacy positional convention: no marker matched anywhere, so among the
    // unmarked e-tags not referenced from content the first is the root and
    // the last is the reply
    if root_e.is_none() && reply_e.is_none() {
        let referenced = content_tag_ref_slots(&note.content, &note.tags);
        let legacy: Vec<ETag> = e_tags
            .iter()
            .filter(|(slot, tag)| tag.marker.is_none() && !referenced.contains(slot))
            .map(|(_, tag)| *tag)
            .collect();

        if !legacy.is_empty() {
            root_e = legacy.first().copied();
            reply_e = legacy.last().copied();
        }
    }

    ThreadTags {
        root: thread_ref_tags(root_e, root_a),
        reply: thread_ref_tags(reply_e, reply_a),
    }
}

fn thread_ref_tags<'a>(e: Option<ETag<'a>>, a: Option<ATag<'a>>) -> Option<ThreadRefTags<'a>> {
    if e.is_none() && a.is_none() {
        None
    } else {
        Some(ThreadRefTags { e, a })
    }
}

/// [`interpret_tags`] projected to pointer form.
///
/// A malformed "a" tag coordinate propagates as an error.
pub fn note_references(note: &Note) -> Result<NoteReferences> {
    let tags = interpret_tags(note);
    Ok(NoteReferences {
        root: project(tags.root)?,
        reply: project(tags.reply)?,
    })
}

fn project(tags: Option<ThreadRefTags<'_>>) -> Result<Option<ThreadRef>> {
    let Some(tags) = tags else {
        return Ok(None);
    };
    let e = tags.e.map(|tag| e_tag_to_event_pointer(&tag));
    let a = match tags.a {
        Some(tag) => Some(a_tag_to_address_pointer(&tag)?),
        None => None,
    };
    Ok(Some(ThreadRef { e, a }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Component, Error};
    use enote::{NoteId, Pubkey};
    use pretty_assertions::assert_eq;

    fn test_note(tags: Vec<Vec<String>>, content: &str) -> Note {
        Note {
            id: NoteId::new([0xab; 32]),
            pubkey: Pubkey::new([0xcd; 32]),
            created_at: 0,
            kind: 1,
            tags,
            content: content.to_owned(),
            sig: String::new(),
        }
    }

    fn tag(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn root_e_id(refs: &NoteReferences) -> String {
        refs.root.as_ref().unwrap().e.as_ref().unwrap().id.clone()
    }

    fn reply_e_id(refs: &NoteReferences) -> String {
        refs.reply.as_ref().unwrap().e.as_ref().unwrap().id.clone()
    }

    #[test]
    fn explicit_markers() {
        let note = test_note(
            vec![tag(&["e", "R", "", "root"]), tag(&["e", "X", "", "reply"])],
            "",
        );
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "R");
        assert_eq!(reply_e_id(&refs), "X");
    }

    #[test]
    fn direct_reply_shorthand() {
        let note = test_note(vec![tag(&["e", "R", "", "root"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "R");
        assert_eq!(reply_e_id(&refs), "R");

        // a lone "reply" marker also stands for both
        let note = test_note(vec![tag(&["e", "X", "", "reply"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "X");
        assert_eq!(reply_e_id(&refs), "X");
    }

    #[test]
    fn legacy_positional() {
        let note = test_note(
            vec![tag(&["e", "A"]), tag(&["e", "B"]), tag(&["e", "C"])],
            "no inline references",
        );
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "A");
        assert_eq!(reply_e_id(&refs), "C");
    }

    #[test]
    fn single_legacy_tag_is_both() {
        let note = test_note(vec![tag(&["e", "A"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "A");
        assert_eq!(reply_e_id(&refs), "A");
    }

    #[test]
    fn legacy_scan_skips_marked_and_referenced_tags() {
        let quoted = NoteId::new([0x11; 32]);
        let bech = quoted.to_bech().expect("note");
        let note = test_note(
            vec![
                tag(&["e", "A"]),
                tag(&["e", &quoted.hex()]),
                tag(&["e", "M", "", "mention"]),
                tag(&["e", "B"]),
            ],
            &format!("quoting nostr:{bech}"),
        );
        let refs = note_references(&note).expect("refs");
        assert_eq!(root_e_id(&refs), "A");
        assert_eq!(reply_e_id(&refs), "B");
    }

    #[test]
    fn mention_markers_alone_give_no_thread() {
        let note = test_note(vec![tag(&["e", "M", "", "mention"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(refs.root, None);
        assert_eq!(refs.reply, None);
    }

    #[test]
    fn no_tags_no_references() {
        let refs = note_references(&test_note(vec![], "hello")).expect("refs");
        assert_eq!(refs, NoteReferences::default());
    }

    #[test]
    fn address_rooted_thread() {
        let note = test_note(
            vec![
                tag(&["a", "30023:P:abc", "wss://r", "root"]),
                tag(&["e", "X", "", "reply"]),
            ],
            "",
        );
        let refs = note_references(&note).expect("refs");

        let root = refs.root.as_ref().expect("root");
        let root_a = root.a.as_ref().expect("a pointer");
        assert_eq!(root_a.kind, 30023);
        assert_eq!(root_a.identifier, "abc");
        assert_eq!(root_a.relays, vec!["wss://r".to_string()]);
        // each partition applies its own shorthand, so the lone marked tag
        // of either kind serves both positions
        assert_eq!(root.e.as_ref().expect("e pointer").id, "X");

        let reply = refs.reply.as_ref().expect("reply");
        assert!(reply.a.is_some());
        assert_eq!(reply.e.as_ref().expect("e pointer").id, "X");
    }

    #[test]
    fn a_tags_have_no_positional_fallback() {
        let note = test_note(vec![tag(&["a", "30023:P:abc"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(refs.root, None);
        assert_eq!(refs.reply, None);
    }

    #[test]
    fn relay_hints_carry_into_pointers() {
        let note = test_note(vec![tag(&["e", "R", "wss://r", "root"])], "");
        let refs = note_references(&note).expect("refs");
        assert_eq!(
            refs.root.as_ref().unwrap().e.as_ref().unwrap().relays,
            vec!["wss://r".to_string()]
        );
    }

    #[test]
    fn malformed_a_tag_coordinate_is_an_error() {
        let note = test_note(vec![tag(&["a", "junk", "", "root"])], "");
        assert_eq!(
            note_references(&note),
            Err(Error::MissingComponent(Component::Kind))
        );
    }

    #[test]
    fn interpret_tags_exposes_raw_views() {
        let note = test_note(
            vec![tag(&["e", "R", "wss://r", "root"]), tag(&["e", "X", "", "reply"])],
            "",
        );
        let tags = interpret_tags(&note);
        let root = tags.root.expect("root").e.expect("e tag");
        assert_eq!(root.id, "R");
        assert_eq!(root.relay, Some("wss://r"));
        assert_eq!(tags.reply.expect("reply").e.expect("e tag").id, "X");
    }
}
