// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Length-prefixed sequences and canonically sorted maps.
//!
//! `Sequence<T>` layout: `ULEB128(count) || (ULEB128(len) || BCS(item))*`.
//! Each element is encoded into its own buffer and written as a byte blob, so
//! a nested sequence is a blob holding another sequence. This is the layout
//! entry-function arguments use on chain.
//!
//! `BcsMap<V>` layout: `ULEB128(count) || (BCS(key) || BCS(value))*` with
//! entries ordered by the encoded key bytes.

use super::{to_bytes, BcsError, Deserializable, Deserializer, Serializable, Serializer};
use std::collections::BTreeMap;

/// Ordered, homogeneously typed list whose elements travel as byte blobs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Wrap `items` in order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Elements in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Unwrap into the element list.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Serializable> Sequence<T> {
    /// The per-element blobs exactly as they appear on the wire.
    pub fn element_bytes(&self) -> Result<Vec<Vec<u8>>, BcsError> {
        self.items.iter().map(to_bytes).collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Serializable> Serializable for Sequence<T> {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_len(self.items.len())?;
        for item in &self.items {
            serializer.serialize_as_bytes(item)?;
        }
        Ok(())
    }
}

impl<T: Deserializable> Deserializable for Sequence<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let len = deserializer.deserialize_len()?;
        let mut items = Vec::with_capacity(len.min(deserializer.remaining()));
        for _ in 0..len {
            items.push(deserializer.deserialize_from_bytes()?);
        }
        Ok(Self { items })
    }
}

/// String-keyed map kept in canonical (encoded key byte) order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BcsMap<V> {
    // encoded key -> (key, value)
    entries: BTreeMap<Vec<u8>, (String, V)>,
}

impl<V> Default for BcsMap<V> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<V> BcsMap<V> {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new key. Re-inserting an existing key is an error.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<(), BcsError> {
        let key = key.into();
        let encoded = to_bytes(key.as_str())?;
        if self.entries.contains_key(&encoded) {
            return Err(BcsError::DuplicateKey(key));
        }
        self.entries.insert(encoded, (key, value));
        Ok(())
    }

    /// Look up by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        let encoded = to_bytes(key).ok()?;
        self.entries.get(&encoded).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.values().map(|(k, v)| (k.as_str(), v))
    }

    /// Build from pairs in any order; duplicates are rejected.
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, BcsError> {
        let mut map = Self::new();
        for (k, v) in pairs {
            map.insert(k, v)?;
        }
        Ok(map)
    }
}

impl<V: Serializable> Serializable for BcsMap<V> {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_len(self.entries.len())?;
        for (encoded_key, (_, value)) in &self.entries {
            serializer.serialize_fixed_bytes(encoded_key);
            value.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<V: Deserializable> Deserializable for BcsMap<V> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let len = deserializer.deserialize_len()?;
        let mut entries = BTreeMap::new();
        let mut last: Option<Vec<u8>> = None;
        for _ in 0..len {
            let key = deserializer.deserialize_str()?;
            let encoded = to_bytes(key.as_str())?;
            if let Some(prev) = &last {
                if *prev == encoded {
                    return Err(BcsError::DuplicateKey(key));
                }
                if *prev > encoded {
                    return Err(BcsError::NonCanonicalMap);
                }
            }
            let value = V::deserialize(deserializer)?;
            last = Some(encoded.clone());
            entries.insert(encoded, (key, value));
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bcs::from_bytes;

    #[test]
    fn sequence_wraps_each_element() {
        let seq = Sequence::new(vec![7u64, 1]);
        let bytes = to_bytes(&seq).unwrap();
        assert_eq!(
            bytes,
            vec![2, 8, 7, 0, 0, 0, 0, 0, 0, 0, 8, 1, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(from_bytes::<Sequence<u64>>(&bytes).unwrap(), seq);
    }

    #[test]
    fn nested_sequence_is_blob_of_blob() {
        let inner = Sequence::new(vec![1u8, 2]);
        let outer = Sequence::new(vec![inner.clone()]);
        let bytes = to_bytes(&outer).unwrap();
        // outer count, blob len, inner count, (len, byte), (len, byte)
        assert_eq!(bytes, vec![1, 5, 2, 1, 1, 1, 2]);
        assert_eq!(from_bytes::<Sequence<Sequence<u8>>>(&bytes).unwrap(), outer);
    }

    #[test]
    fn sequence_element_must_fill_blob() {
        // blob of 2 bytes holding a single u8
        assert_eq!(
            from_bytes::<Sequence<u8>>(&[1, 2, 9, 9]),
            Err(BcsError::TrailingBytes(1))
        );
    }

    #[test]
    fn map_rejects_duplicates() {
        let mut m = BcsMap::new();
        m.insert("a", 1u8).unwrap();
        assert_eq!(m.insert("a", 2u8), Err(BcsError::DuplicateKey("a".into())));
    }

    #[test]
    fn map_orders_by_encoded_key() {
        // "b" encodes as [1, 98]; "aa" as [2, 97, 97] so "b" sorts first
        let m = BcsMap::from_pairs(vec![("aa", 1u8), ("b", 2u8)]).unwrap();
        let bytes = to_bytes(&m).unwrap();
        assert_eq!(bytes, vec![2, 1, 98, 2, 2, 97, 97, 1]);
        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "aa"]);
    }

    #[test]
    fn map_decode_rejects_unsorted() {
        let bytes = vec![2, 2, 97, 97, 1, 1, 98, 2];
        assert_eq!(from_bytes::<BcsMap<u8>>(&bytes), Err(BcsError::NonCanonicalMap));
        let dup = vec![2, 1, 98, 1, 1, 98, 2];
        assert_eq!(
            from_bytes::<BcsMap<u8>>(&dup),
            Err(BcsError::DuplicateKey("b".into()))
        );
    }
}
