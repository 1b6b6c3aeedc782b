//! Entry-type vocabulary shared by the policy compiler and the walkers.
//!
//! The single-character tags are the ones accepted by `find -type`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    File,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
}

impl EntryType {
    pub const ALL: [EntryType; 7] = [
        EntryType::File,
        EntryType::Directory,
        EntryType::Symlink,
        EntryType::BlockDevice,
        EntryType::CharDevice,
        EntryType::Fifo,
        EntryType::Socket,
    ];

    pub fn tag(self) -> char {
        match self {
            EntryType::File => 'f',
            EntryType::Directory => 'd',
            EntryType::Symlink => 'l',
            EntryType::BlockDevice => 'b',
            EntryType::CharDevice => 'c',
            EntryType::Fifo => 'p',
            EntryType::Socket => 's',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown entry type: {0:?} (expected one of f, d, l, b, c, p, s)")]
pub struct UnknownEntryType(pub String);

impl FromStr for EntryType {
    type Err = UnknownEntryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_tag(c).ok_or_else(|| UnknownEntryType(s.to_string())),
            _ => Err(UnknownEntryType(s.to_string())),
        }
    }
}
