//! Ordered string interning.
//!
//! [`StringTable`] assigns dense integer ids to distinct strings in first-seen
//! order. It backs the vocabularies of the nominal and token encoders.

use crate::error::{FtrGenError, Result};
use crate::types::ValueId;
use ahash::AHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered map from string to a dense, stable id.
///
/// Ids are assigned starting at 0 in insertion order and are never reused or
/// reassigned, so the id space is always exactly `[0, len())`.
///
/// Persisted as the ordered list of keys; the lookup index is rebuilt on load.
///
/// # Example
///
/// ```rust
/// use ftrgen::utils::StringTable;
///
/// let mut table = StringTable::new();
/// assert_eq!(table.insert_or_get_id("a"), 0);
/// assert_eq!(table.insert_or_get_id("b"), 1);
/// assert_eq!(table.insert_or_get_id("a"), 0);
///
/// assert_eq!(table.id_of("b"), Some(1));
/// assert_eq!(table.key_at(0), Some("a"));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct StringTable {
    /// Keys in id order.
    keys: Vec<String>,

    /// Lookup from key to id.
    ids: AHashMap<String, ValueId>,
}

impl StringTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `key`, inserting it with the next id if absent.
    pub fn insert_or_get_id(&mut self, key: &str) -> ValueId {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        let id = self.keys.len();
        self.keys.push(key.to_string());
        self.ids.insert(key.to_string(), id);
        tracing::trace!(key, id, "assigned new id");
        id
    }

    /// Returns true if `key` has an id.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    /// Returns the id of `key`, if it was inserted.
    #[inline]
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<ValueId> {
        self.ids.get(key).copied()
    }

    /// Returns the key with the given id.
    #[inline]
    #[must_use]
    pub fn key_at(&self, id: ValueId) -> Option<&str> {
        self.keys.get(id).map(String::as_str)
    }

    /// Returns the number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table holds no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over keys in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Returns the keys in id order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl PartialEq for StringTable {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl TryFrom<Vec<String>> for StringTable {
    type Error = FtrGenError;

    /// Rebuilds a table from its keys in id order.
    ///
    /// Duplicate keys would map two ids onto one string, so they are rejected.
    fn try_from(keys: Vec<String>) -> Result<Self> {
        let mut ids = AHashMap::with_capacity(keys.len());
        for (id, key) in keys.iter().enumerate() {
            if ids.insert(key.clone(), id).is_some() {
                return Err(FtrGenError::CorruptState {
                    message: format!("Duplicate key '{}' at id {}", key, id),
                });
            }
        }
        Ok(Self { keys, ids })
    }
}

impl From<StringTable> for Vec<String> {
    fn from(table: StringTable) -> Self {
        table.keys
    }
}
