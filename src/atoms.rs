//! Atom interning for compact ids and O(1) graph lookups
//!
//! Atom names are interned into dense `u32` ids assigned in first-reference
//! order. Ids index directly into the rule graph's adjacency tables, so all
//! hot-path lookups are array-indexed rather than hash-keyed by string.
//! Ids are never freed or renumbered within a session.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned atom name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(pub(crate) u32);

impl AtomId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Get the ID as a table index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

// Serialized as a bare u32; name resolution happens via the view types in
// json.rs, which carry the atom table.

impl Serialize for AtomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(AtomId)
    }
}

/// Bidirectional name ↔ id table for atoms
///
/// Append-only arena: `names` is indexed by id, `lookup` maps a name back
/// to its id. The mapping is a total bijection over every atom ever
/// referenced; there is no removal.
#[derive(Debug, Clone, Default)]
pub struct AtomTable {
    /// Interned names, indexed by ID
    names: Vec<String>,
    /// Lookup table from name to ID
    lookup: HashMap<String, u32>,
}

impl AtomTable {
    /// Create a new empty table
    pub fn new() -> Self {
        AtomTable {
            names: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Intern a name, returning its ID (get-or-create)
    pub fn intern(&mut self, name: &str) -> AtomId {
        if let Some(&id) = self.lookup.get(name) {
            return AtomId(id);
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        AtomId(id)
    }

    /// Resolve an ID to its name
    pub fn resolve(&self, id: AtomId) -> &str {
        &self.names[id.index()]
    }

    /// Get the ID for an already-interned name (returns None if not found)
    pub fn get(&self, name: &str) -> Option<AtomId> {
        self.lookup.get(name).copied().map(AtomId)
    }

    /// Check if a name is already interned
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Number of interned atoms
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All interned names in id order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Drop every entry, restarting id assignment from zero
    pub(crate) fn clear(&mut self) {
        self.names.clear();
        self.lookup.clear();
    }
}
