use std::cmp::Ordering;
use std::fmt;

use enote::{Note, RTag, TagView};

// A relay config comes from an "r" tag whose third element marks the relay
// as read-only or write-only; an omitted marker means both.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    Read,
    Write,
    All,
}

#[derive(Clone)]
pub struct RelayConfig {
    pub url: String,
    pub mode: RelayMode,
}

impl RelayConfig {
    pub fn new(url: impl Into<String>, mode: RelayMode) -> Self {
        RelayConfig {
            url: url.into(),
            mode,
        }
    }

    /// Interpret `["r", <url>, <mode?>]`; unrecognized modes mean both.
    pub fn from_tag(tag: &RTag<'_>) -> Self {
        let mode = match tag.marker {
            Some("read") => RelayMode::Read,
            Some("write") => RelayMode::Write,
            _ => RelayMode::All,
        };
        RelayConfig::new(tag.url, mode)
    }

    pub fn is_readable(&self) -> bool {
        self.mode != RelayMode::Write // only write-only relays are not readable
    }

    pub fn is_writable(&self) -> bool {
        self.mode != RelayMode::Read // only read-only relays are not writable
    }
}

/// All relay configs listed by a note's "r" tags, in tag order.
pub fn relay_configs(note: &Note) -> Vec<RelayConfig> {
    note.tags
        .iter()
        .filter_map(|tag| match TagView::parse(tag) {
            TagView::Relay(r) => Some(RelayConfig::from_tag(&r)),
            _ => None,
        })
        .collect()
}

// just the url part
impl fmt::Display for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

// add the read and write markers if present
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)?;
        match self.mode {
            RelayMode::Read => write!(f, " [r]")?,
            RelayMode::Write => write!(f, " [w]")?,
            RelayMode::All => {}
        }
        Ok(())
    }
}

// For purposes of set arithmetic only the url is considered, two
// RelayConfig which differ only in mode are the same ...

impl PartialEq for RelayConfig {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for RelayConfig {}

impl PartialOrd for RelayConfig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RelayConfig {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url.cmp(&other.url)
    }
}
