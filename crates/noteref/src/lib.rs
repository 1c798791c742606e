mod abbrev;
mod classify;
mod content;
mod coordinate;
mod embedded;
mod error;
pub mod relayspec;
mod thread;

pub use abbrev::abbreviated;
pub use classify::{
    is_mentioned_in_content, is_replaceable, is_reply, is_repost, note_uid, KIND_REPOST,
};
pub use content::{content_tag_ref_slots, content_tag_refs, filter_tags_by_content_refs};
pub use coordinate::{
    a_tag_to_address_pointer, coordinate, e_tag_to_event_pointer, note_address_pointer,
    note_coordinate, parse_coordinate, pointer_to_a_tag, CoordinateParse,
};
pub use embedded::{embedded_note, newest_first};
pub use error::{Component, Error};
pub use relayspec::{relay_configs, RelayConfig, RelayMode};
pub use thread::{
    interpret_tags, note_references, NoteReferences, ThreadRef, ThreadRefTags, ThreadTags,
};

pub type Result<T> = std::result::Result<T, error::Error>;
