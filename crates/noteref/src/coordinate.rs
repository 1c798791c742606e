//! Address coordinates for replaceable notes.
//!
//! A coordinate is the string `kind:pubkey` or `kind:pubkey:identifier` used
//! by "a" tags to locate the newest note of a replaceable kind. Segments past
//! the third are ignored.

use enote::tag::DTag;
use enote::{ATag, AddressPointer, CustomAddressPointer, ETag, EventPointer, Note};

use crate::classify::is_replaceable;
use crate::error::{Component, Error};
use crate::Result;

/// How [`parse_coordinate`] reports missing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateParse {
    /// Treat a coordinate without the identifier segment as incomplete.
    pub require_identifier: bool,
    /// Report an incomplete coordinate as `Ok(None)` instead of an error.
    pub silent: bool,
}

impl Default for CoordinateParse {
    fn default() -> Self {
        CoordinateParse {
            require_identifier: false,
            silent: true,
        }
    }
}

impl CoordinateParse {
    /// The configuration used when decoding "a" tags: every component
    /// required, failures reported to the caller.
    pub fn strict() -> Self {
        CoordinateParse {
            require_identifier: true,
            silent: false,
        }
    }
}

/// Parse `kind:pubkey[:identifier]`.
///
/// The kind segment must be a whole non-negative integer; trailing garbage
/// is a miss, not a partial parse. Empty segments count as missing.
pub fn parse_coordinate(
    text: &str,
    opts: CoordinateParse,
) -> Result<Option<CustomAddressPointer>> {
    let mut parts = text.split(':');
    let kind = parts.next().and_then(|s| s.parse::<u64>().ok());
    let pubkey = parts.next().filter(|s| !s.is_empty());
    let identifier = parts.next().filter(|s| !s.is_empty());

    let Some(kind) = kind else {
        return missing(Component::Kind, opts);
    };
    let Some(pubkey) = pubkey else {
        return missing(Component::Pubkey, opts);
    };
    if opts.require_identifier && identifier.is_none() {
        return missing(Component::Identifier, opts);
    }

    Ok(Some(CustomAddressPointer {
        kind,
        pubkey: pubkey.to_owned(),
        identifier: identifier.map(str::to_owned),
        relays: Vec::new(),
    }))
}

fn missing(component: Component, opts: CoordinateParse) -> Result<Option<CustomAddressPointer>> {
    if opts.silent {
        Ok(None)
    } else {
        Err(Error::MissingComponent(component))
    }
}

/// Default-configuration convenience: identifier optional, misses silent.
pub fn coordinate(text: &str) -> Option<CustomAddressPointer> {
    parse_coordinate(text, CoordinateParse::default()).ok().flatten()
}

fn note_identifier(note: &Note) -> Option<&str> {
    // only the first "d" tag counts, even when its identifier is empty
    note.tags
        .iter()
        .find_map(|tag| DTag::parse(tag))
        .and_then(|d| d.identifier)
}

/// The note's own coordinate, `kind:pubkey` extended with the "d"
/// identifier when the note carries one.
pub fn note_coordinate(note: &Note) -> String {
    match note_identifier(note) {
        Some(identifier) => format!("{}:{}:{}", note.kind, note.pubkey.hex(), identifier),
        None => format!("{}:{}", note.kind, note.pubkey.hex()),
    }
}

/// The note's own address pointer.
///
/// Callers must check replaceability and identifier presence first if they
/// want to avoid the errors.
pub fn note_address_pointer(note: &Note) -> Result<AddressPointer> {
    if !is_replaceable(note.kind) {
        return Err(Error::NotReplaceable(note.kind));
    }
    let identifier = note_identifier(note).ok_or(Error::MissingIdentifier)?;

    Ok(AddressPointer {
        kind: note.kind,
        pubkey: note.pubkey.hex(),
        identifier: identifier.to_owned(),
        relays: Vec::new(),
    })
}

/// Render an address pointer back to its "a" tag form, carrying the first
/// relay hint when the pointer has one.
pub fn pointer_to_a_tag(pointer: &AddressPointer) -> Vec<String> {
    let coordinate = pointer.coordinate();
    match pointer.relays.first() {
        Some(relay) => vec!["a".to_string(), coordinate, relay.clone()],
        None => vec!["a".to_string(), coordinate],
    }
}

/// Project an "e" tag to its pointer form, keeping at most one relay hint.
pub fn e_tag_to_event_pointer(tag: &ETag<'_>) -> EventPointer {
    EventPointer {
        id: tag.id.to_owned(),
        relays: tag.relay.map(|relay| vec![relay.to_owned()]).unwrap_or_default(),
    }
}

/// Project an "a" tag to its pointer form, keeping at most one relay hint.
///
/// The coordinate is parsed strictly; a malformed coordinate propagates as
/// [`Error::MissingComponent`].
pub fn a_tag_to_address_pointer(tag: &ATag<'_>) -> Result<AddressPointer> {
    let mut pointer = parse_coordinate(tag.coordinate, CoordinateParse::strict())?
        .and_then(CustomAddressPointer::into_address_pointer)
        .ok_or(Error::MissingComponent(Component::Identifier))?;

    if let Some(relay) = tag.relay {
        pointer.relays = vec![relay.to_owned()];
    }
    Ok(pointer)
}
