//! Pointer records handed to lookup and fetch collaborators.

use serde::{Deserialize, Serialize};

/// Locates a note by id, with optional relay hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPointer {
    pub id: String,
    #[serde(default)]
    pub relays: Vec<String>,
}

/// Locates a profile by pubkey, with optional relay hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePointer {
    pub pubkey: String,
    #[serde(default)]
    pub relays: Vec<String>,
}

/// Locates the current note of a replaceable kind by coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPointer {
    pub kind: u64,
    pub pubkey: String,
    pub identifier: String,
    #[serde(default)]
    pub relays: Vec<String>,
}

impl AddressPointer {
    /// The `kind:pubkey:identifier` coordinate string.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.kind, self.pubkey, self.identifier)
    }
}

/// [`AddressPointer`] from a coordinate parse that did not require the
/// identifier component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAddressPointer {
    pub kind: u64,
    pub pubkey: String,
    pub identifier: Option<String>,
    #[serde(default)]
    pub relays: Vec<String>,
}

impl CustomAddressPointer {
    /// The full pointer form, if the identifier component is present.
    pub fn into_address_pointer(self) -> Option<AddressPointer> {
        Some(AddressPointer {
            kind: self.kind,
            pubkey: self.pubkey,
            identifier: self.identifier?,
            relays: self.relays,
        })
    }
}
