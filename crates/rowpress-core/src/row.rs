use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// One table record: a column-name-to-value mapping that preserves
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, Value)>,
        N: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    /// Set a column value. Re-inserting an existing column replaces its
    /// value without changing its position.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        if let Some(entry) = self.columns.iter_mut().find(|(name, _)| *name == column) {
            entry.1 = value;
        } else {
            self.columns.push((column, value));
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Stable FNV-1a hash over column names and value key forms. Used to
    /// give deduplicated output a deterministic order across runs.
    pub fn fingerprint(&self) -> u64 {
        let mut hash: u64 = 0xcbf29ce484222325;
        let mut mix = |bytes: &[u8]| {
            for byte in bytes {
                hash ^= u64::from(*byte);
                hash = hash.wrapping_mul(0x100000001b3);
            }
        };
        for (name, value) in &self.columns {
            mix(name.as_bytes());
            mix(b"=");
            mix(value.to_key().as_bytes());
            mix(b"|");
        }
        hash
    }

    /// Structural match on every column except `ignored`, independent of
    /// column order. Used to suppress duplicate junction rows whose
    /// surrogate identifiers would otherwise defeat plain equality.
    pub fn matches_ignoring(&self, other: &Self, ignored: &str) -> bool {
        let mine = self.columns.iter().filter(|(name, _)| name != ignored);
        let theirs: Vec<&(String, Value)> = other
            .columns
            .iter()
            .filter(|(name, _)| name != ignored)
            .collect();
        let mut count = 0;
        for (name, value) in mine {
            match theirs.iter().find(|(other_name, _)| other_name == name) {
                Some((_, other_value)) if other_value == value => count += 1,
                _ => return false,
            }
        }
        count == theirs.len()
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
