use std::fmt;
use thiserror::Error;

/// Coordinate component named by [`Error::MissingComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Kind,
    Pubkey,
    Identifier,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Kind => "kind",
            Component::Pubkey => "pubkey",
            Component::Identifier => "identifier",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("kind {0} is not replaceable")]
    NotReplaceable(u64),

    #[error("missing identifier")]
    MissingIdentifier,

    #[error("coordinate is missing its {0} component")]
    MissingComponent(Component),
}
