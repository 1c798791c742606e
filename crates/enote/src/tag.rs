//! Typed views over the raw tag arrays attached to a note.
//!
//! Wire tags are positional string arrays whose first element picks the
//! interpretation. Parsing happens once here; everything downstream matches
//! on [`TagView`] or the individual view structs instead of re-inspecting
//! array shape. Empty-string positional elements count as absent, since
//! clients pad earlier positions with `""` to reach a later one.

/// True for an event reference: `["e", <id>, ...]`.
pub fn is_e_tag(tag: &[String]) -> bool {
    tag.len() >= 2 && tag[0] == "e"
}

/// True for an address reference: `["a", <coordinate>, ...]`.
pub fn is_a_tag(tag: &[String]) -> bool {
    tag.len() >= 2 && tag[0] == "a"
}

/// True for a replaceable-note identifier tag: `["d", <identifier>]`.
pub fn is_d_tag(tag: &[String]) -> bool {
    tag.first().is_some_and(|t| t == "d")
}

/// True for a relay tag: `["r", <url>, <mode?>]`.
pub fn is_r_tag(tag: &[String]) -> bool {
    tag.first().is_some_and(|t| t == "r")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn element(tag: &[String], index: usize) -> Option<&str> {
    tag.get(index).map(String::as_str).and_then(non_empty)
}

/// `["e", <id>, <relay?>, <marker?>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ETag<'a> {
    pub id: &'a str,
    pub relay: Option<&'a str>,
    pub marker: Option<&'a str>,
}

impl<'a> ETag<'a> {
    pub fn parse(tag: &'a [String]) -> Option<Self> {
        if !is_e_tag(tag) {
            return None;
        }
        Some(ETag {
            id: &tag[1],
            relay: element(tag, 2),
            marker: element(tag, 3),
        })
    }
}

/// `["a", <coordinate>, <relay?>, <marker?>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ATag<'a> {
    pub coordinate: &'a str,
    pub relay: Option<&'a str>,
    pub marker: Option<&'a str>,
}

impl<'a> ATag<'a> {
    pub fn parse(tag: &'a [String]) -> Option<Self> {
        if !is_a_tag(tag) {
            return None;
        }
        Some(ATag {
            coordinate: &tag[1],
            relay: element(tag, 2),
            marker: element(tag, 3),
        })
    }
}

/// `["r", <url>, <mode?>]` where mode is "read", "write" or absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RTag<'a> {
    pub url: &'a str,
    pub marker: Option<&'a str>,
}

impl<'a> RTag<'a> {
    pub fn parse(tag: &'a [String]) -> Option<Self> {
        if !is_r_tag(tag) {
            return None;
        }
        Some(RTag {
            url: element(tag, 1)?,
            marker: element(tag, 2),
        })
    }
}

/// `["d", <identifier?>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DTag<'a> {
    pub identifier: Option<&'a str>,
}

impl<'a> DTag<'a> {
    pub fn parse(tag: &'a [String]) -> Option<Self> {
        if !is_d_tag(tag) {
            return None;
        }
        Some(DTag {
            identifier: element(tag, 1),
        })
    }
}

/// Closed set of tag interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagView<'a> {
    Event(ETag<'a>),
    Address(ATag<'a>),
    Relay(RTag<'a>),
    Identifier(DTag<'a>),
    Unknown(&'a [String]),
}

impl<'a> TagView<'a> {
    pub fn parse(tag: &'a [String]) -> TagView<'a> {
        if let Some(e) = ETag::parse(tag) {
            TagView::Event(e)
        } else if let Some(a) = ATag::parse(tag) {
            TagView::Address(a)
        } else if let Some(r) = RTag::parse(tag) {
            TagView::Relay(r)
        } else if let Some(d) = DTag::parse(tag) {
            TagView::Identifier(d)
        } else {
            TagView::Unknown(tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn predicates_check_shape() {
        assert!(is_e_tag(&tag(&["e", "abc"])));
        assert!(!is_e_tag(&tag(&["e"])));
        assert!(!is_e_tag(&tag(&["p", "abc"])));
        assert!(is_a_tag(&tag(&["a", "1:p:d"])));
        assert!(!is_a_tag(&tag(&["a"])));
        assert!(is_d_tag(&tag(&["d"])));
        assert!(is_r_tag(&tag(&["r", "wss://relay.example.com"])));
        assert!(!is_r_tag(&[]));
    }

    #[test]
    fn e_tag_fields() {
        let raw = tag(&["e", "abc", "wss://r", "root"]);
        let parsed = ETag::parse(&raw).expect("e tag");
        assert_eq!(parsed.id, "abc");
        assert_eq!(parsed.relay, Some("wss://r"));
        assert_eq!(parsed.marker, Some("root"));
    }

    #[test]
    fn empty_elements_are_absent() {
        let raw = tag(&["e", "abc", "", "reply"]);
        let parsed = ETag::parse(&raw).expect("e tag");
        assert_eq!(parsed.relay, None);
        assert_eq!(parsed.marker, Some("reply"));

        let raw = tag(&["d", ""]);
        assert_eq!(DTag::parse(&raw).expect("d tag").identifier, None);
    }

    #[test]
    fn view_dispatch() {
        assert!(matches!(
            TagView::parse(&tag(&["e", "abc"])),
            TagView::Event(_)
        ));
        assert!(matches!(
            TagView::parse(&tag(&["a", "1:p:d"])),
            TagView::Address(_)
        ));
        assert!(matches!(
            TagView::parse(&tag(&["r", "wss://r", "read"])),
            TagView::Relay(_)
        ));
        assert!(matches!(
            TagView::parse(&tag(&["d", "ident"])),
            TagView::Identifier(_)
        ));
        assert!(matches!(
            TagView::parse(&tag(&["t", "hashtag"])),
            TagView::Unknown(_)
        ));
        // an "r" tag without a url has no valid interpretation
        assert!(matches!(TagView::parse(&tag(&["r"])), TagView::Unknown(_)));
    }
}
