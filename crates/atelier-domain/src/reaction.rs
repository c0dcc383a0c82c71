//! Reaction kinds viewers can leave on an artwork.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of reactions. Anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Love,
    MindBlown,
    Cosmic,
    Transcendent,
    Mystical,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction type: {0}")]
pub struct UnknownReactionKind(pub String);

impl ReactionKind {
    /// Every kind, in the order aggregation responses list them.
    pub const ALL: [ReactionKind; 5] = [
        Self::Love,
        Self::MindBlown,
        Self::Cosmic,
        Self::Transcendent,
        Self::Mystical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::MindBlown => "mind_blown",
            Self::Cosmic => "cosmic",
            Self::Transcendent => "transcendent",
            Self::Mystical => "mystical",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = UnknownReactionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownReactionKind(s.to_owned()))
    }
}
