mod error;
pub mod nip19;
mod note;
mod pointer;
mod pubkey;
pub mod tag;

pub use error::Error;
pub use nip19::Nip19;
pub use note::{Note, NoteId};
pub use pointer::{AddressPointer, CustomAddressPointer, EventPointer, ProfilePointer};
pub use pubkey::Pubkey;
pub use tag::{ATag, DTag, ETag, RTag, TagView};

pub type Result<T> = std::result::Result<T, error::Error>;
