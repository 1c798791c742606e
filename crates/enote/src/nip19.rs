//! Bech32-encoded entity codec.
//!
//! Entities are either a bare 32-byte payload (`npub`, `note`) or a TLV
//! stream (`nprofile`, `nevent`, `naddr`). Unknown TLV types are skipped so
//! newer encoders stay decodable.

use tracing::debug;

use crate::note::HRP_NOTE;
use crate::pubkey::HRP_NPUB;
use crate::{AddressPointer, Error, EventPointer, NoteId, ProfilePointer, Pubkey};

static HRP_NPROFILE: bech32::Hrp = bech32::Hrp::parse_unchecked("nprofile");
static HRP_NEVENT: bech32::Hrp = bech32::Hrp::parse_unchecked("nevent");
static HRP_NADDR: bech32::Hrp = bech32::Hrp::parse_unchecked("naddr");

const TLV_SPECIAL: u8 = 0;
const TLV_RELAY: u8 = 1;
const TLV_AUTHOR: u8 = 2;
const TLV_KIND: u8 = 3;

/// A decoded bech32 entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nip19 {
    Npub(Pubkey),
    Note(NoteId),
    Nprofile(ProfilePointer),
    Nevent(EventPointer),
    Naddr(AddressPointer),
}

/// Decode any recognized bech32 entity.
pub fn decode(encoded: &str) -> Result<Nip19, Error> {
    let (hrp, data) = bech32::decode(encoded).map_err(|_| Error::InvalidBech32)?;

    if hrp == HRP_NPUB {
        Ok(Nip19::Npub(Pubkey::new(fixed32(&data)?)))
    } else if hrp == HRP_NOTE {
        Ok(Nip19::Note(NoteId::new(fixed32(&data)?)))
    } else if hrp == HRP_NPROFILE {
        decode_nprofile(&data)
    } else if hrp == HRP_NEVENT {
        decode_nevent(&data)
    } else if hrp == HRP_NADDR {
        decode_naddr(&data)
    } else {
        debug!("unhandled bech32 hrp in entity {}", encoded);
        Err(Error::DecodeFailed)
    }
}

fn fixed32(data: &[u8]) -> Result<[u8; 32], Error> {
    if data.len() != 32 {
        return Err(Error::InvalidByteSize);
    }
    Ok(data.try_into()?)
}

fn tlv_entries(data: &[u8]) -> Result<Vec<(u8, &[u8])>, Error> {
    let mut entries = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        if rest.len() < 2 {
            return Err(Error::DecodeFailed);
        }
        let tlv_type = rest[0];
        let len = rest[1] as usize;
        if rest.len() < 2 + len {
            return Err(Error::DecodeFailed);
        }
        entries.push((tlv_type, &rest[2..2 + len]));
        rest = &rest[2 + len..];
    }
    Ok(entries)
}

fn utf8(value: &[u8]) -> Result<String, Error> {
    String::from_utf8(value.to_vec()).map_err(|_| Error::DecodeFailed)
}

fn decode_nprofile(data: &[u8]) -> Result<Nip19, Error> {
    let mut pubkey = None;
    let mut relays = Vec::new();

    for (tlv_type, value) in tlv_entries(data)? {
        match tlv_type {
            TLV_SPECIAL => pubkey = Some(hex::encode(fixed32(value)?)),
            TLV_RELAY => relays.push(utf8(value)?),
            _ => {}
        }
    }

    let pubkey = pubkey.ok_or(Error::DecodeFailed)?;
    Ok(Nip19::Nprofile(ProfilePointer { pubkey, relays }))
}

fn decode_nevent(data: &[u8]) -> Result<Nip19, Error> {
    let mut id = None;
    let mut relays = Vec::new();

    for (tlv_type, value) in tlv_entries(data)? {
        match tlv_type {
            TLV_SPECIAL => id = Some(hex::encode(fixed32(value)?)),
            TLV_RELAY => relays.push(utf8(value)?),
            // author and kind hints are not part of the pointer
            TLV_AUTHOR | TLV_KIND => {}
            _ => {}
        }
    }

    let id = id.ok_or(Error::DecodeFailed)?;
    Ok(Nip19::Nevent(EventPointer { id, relays }))
}

fn decode_naddr(data: &[u8]) -> Result<Nip19, Error> {
    let mut identifier = None;
    let mut pubkey = None;
    let mut kind = None;
    let mut relays = Vec::new();

    for (tlv_type, value) in tlv_entries(data)? {
        match tlv_type {
            TLV_SPECIAL => identifier = Some(utf8(value)?),
            TLV_RELAY => relays.push(utf8(value)?),
            TLV_AUTHOR => pubkey = Some(hex::encode(fixed32(value)?)),
            TLV_KIND => {
                let bytes: [u8; 4] = value.try_into().map_err(|_| Error::DecodeFailed)?;
                kind = Some(u32::from_be_bytes(bytes) as u64);
            }
            _ => {}
        }
    }

    Ok(Nip19::Naddr(AddressPointer {
        kind: kind.ok_or(Error::DecodeFailed)?,
        pubkey: pubkey.ok_or(Error::DecodeFailed)?,
        identifier: identifier.ok_or(Error::DecodeFailed)?,
        relays,
    }))
}

fn push_tlv(buf: &mut Vec<u8>, tlv_type: u8, value: &[u8]) -> Option<()> {
    let len = u8::try_from(value.len()).ok()?;
    buf.push(tlv_type);
    buf.push(len);
    buf.extend_from_slice(value);
    Some(())
}

fn hex32(s: &str) -> Option<[u8; 32]> {
    let bytes = hex::decode(s).ok()?;
    bytes.as_slice().try_into().ok()
}

/// `nprofile1...` for a profile pointer.
pub fn encode_nprofile(pointer: &ProfilePointer) -> Option<String> {
    let mut data = Vec::new();
    push_tlv(&mut data, TLV_SPECIAL, &hex32(&pointer.pubkey)?)?;
    for relay in &pointer.relays {
        push_tlv(&mut data, TLV_RELAY, relay.as_bytes())?;
    }
    bech32::encode::<bech32::Bech32>(HRP_NPROFILE, &data).ok()
}

/// `nevent1...` for an event pointer.
pub fn encode_nevent(pointer: &EventPointer) -> Option<String> {
    let mut data = Vec::new();
    push_tlv(&mut data, TLV_SPECIAL, &hex32(&pointer.id)?)?;
    for relay in &pointer.relays {
        push_tlv(&mut data, TLV_RELAY, relay.as_bytes())?;
    }
    bech32::encode::<bech32::Bech32>(HRP_NEVENT, &data).ok()
}

/// `naddr1...` for an address pointer.
pub fn encode_naddr(pointer: &AddressPointer) -> Option<String> {
    let mut data = Vec::new();
    push_tlv(&mut data, TLV_SPECIAL, pointer.identifier.as_bytes())?;
    for relay in &pointer.relays {
        push_tlv(&mut data, TLV_RELAY, relay.as_bytes())?;
    }
    push_tlv(&mut data, TLV_AUTHOR, &hex32(&pointer.pubkey)?)?;
    let kind = u32::try_from(pointer.kind).ok()?;
    push_tlv(&mut data, TLV_KIND, &kind.to_be_bytes())?;
    bech32::encode::<bech32::Bech32>(HRP_NADDR, &data).ok()
}
