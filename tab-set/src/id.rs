use std::{fmt::Display, num::ParseIntError, str::FromStr};

const PREFIX: &str = "tab-";

/// Positional tab address, rendered as `tab-<index>`.
///
/// Only valid for the tab set it was read from; indices shift after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(usize);

impl TabId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TabId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for TabId {
    type Err = ParseTabIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(PREFIX).unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseTabIdError::Empty(s.to_owned()));
        }
        digits
            .parse()
            .map(Self)
            .map_err(|source| ParseTabIdError::InvalidIndex {
                token: s.to_owned(),
                source,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTabIdError {
    #[error("Tab id {0:?} has no index")]
    Empty(String),
    #[error("Tab id {token:?} has invalid index: {source}")]
    InvalidIndex {
        token: String,
        source: ParseIntError,
    },
}

/// Stable tab identity, never reused within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabKey(pub(crate) u64);
