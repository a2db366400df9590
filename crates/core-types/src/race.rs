use serde::{Deserialize, Serialize};
use std::fmt;

/// The opaque identifier of a record, assigned by the backing store.
///
/// Stores disagree on the wire form: some emit `"id": "r1"`, the heroes
/// service emits `"id": 7`. Both are accepted and kept as text, since this
/// side never does arithmetic on an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(u64),
}

impl From<WireId> for RecordId {
    fn from(wire: WireId) -> Self {
        match wire {
            WireId::Text(text) => RecordId(text),
            WireId::Number(n) => RecordId(n.to_string()),
        }
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four base attributes every race starts with.
///
/// All four are whole numbers. A negative or fractional value in a response
/// fails deserialization and surfaces as a malformed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseAttributes {
    /// Physical power.
    pub strength: u32,
    /// Velocity and dexterity.
    pub agility: u32,
    /// Smartness and spellcasting.
    pub intelligence: u32,
    /// Overall willpower.
    pub willpower: u32,
}

/// A playable race, such as Human or Elf.
///
/// The field set is closed: anything else the store sends along (skills,
/// recommended classes) is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub base_attributes: BaseAttributes,
}
