//! Inline reference links in note content.
//!
//! Content may reference the note's own tags with `nostr:` (or `@`) prefixed
//! bech32 entity links. Matching is by value against the tag's type and id
//! columns; de-duplication is by tag slot, so two tags with identical
//! contents still count separately.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use enote::nip19::{self, Nip19};

static NOSTR_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:nostr:|@)((?:npub|note|nprofile|nevent|naddr)1[023456789acdefghjklmnpqrstuvwxyz]+)")
        .unwrap()
});

pub(crate) fn link_regex() -> &'static Regex {
    &NOSTR_LINK
}

/// Slot indexes of `tags` referenced by inline links, in first-seen order.
pub fn content_tag_ref_slots(content: &str, tags: &[Vec<String>]) -> Vec<usize> {
    let mut slots: Vec<usize> = Vec::new();

    for capture in NOSTR_LINK.captures_iter(content) {
        let Some(link) = capture.get(1) else {
            continue;
        };
        let decoded = match nip19::decode(link.as_str()) {
            Ok(decoded) => decoded,
            Err(err) => {
                trace!("skipping undecodable link {}: {err}", link.as_str());
                continue;
            }
        };

        let (tag_type, id) = match decoded {
            Nip19::Npub(pubkey) => ("p", pubkey.hex()),
            Nip19::Nprofile(profile) => ("p", profile.pubkey),
            Nip19::Note(note_id) => ("e", note_id.hex()),
            Nip19::Nevent(event) => ("e", event.id),
            // address links don't reference tags by id
            Nip19::Naddr(_) => continue,
        };

        for (slot, tag) in tags.iter().enumerate() {
            if tag.len() >= 2 && tag[0] == tag_type && tag[1] == id && !slots.contains(&slot) {
                slots.push(slot);
            }
        }
    }

    slots
}

/// The tags referenced by inline links, de-duplicated by slot.
pub fn content_tag_refs<'a>(content: &str, tags: &'a [Vec<String>]) -> Vec<&'a Vec<String>> {
    content_tag_ref_slots(content, tags)
        .into_iter()
        .map(|slot| &tags[slot])
        .collect()
}

/// The referenced (or unreferenced) side of `tags`, preserving tag order.
pub fn filter_tags_by_content_refs<'a>(
    content: &str,
    tags: &'a [Vec<String>],
    referenced: bool,
) -> Vec<&'a Vec<String>> {
    let slots = content_tag_ref_slots(content, tags);
    tags.iter()
        .enumerate()
        .filter(|(slot, _)| slots.contains(slot) == referenced)
        .map(|(_, tag)| tag)
        .collect()
}
