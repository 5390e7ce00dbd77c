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

//! Append-only BCS output buffer.

use super::{BcsError, Serializable, MAX_SEQUENCE_LENGTH};
use primitive_types::U256;

/// Accumulates canonical bytes for a single encode operation.
#[derive(Debug, Default)]
pub struct Serializer {
    buf: Vec<u8>,
}

impl Serializer {
    /// Empty serializer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Empty serializer with preallocated capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self { buf: Vec::with_capacity(cap) }
    }

    /// Snapshot of the bytes written so far.
    pub fn output(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Finish and take the buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Single byte, 0x00 or 0x01.
    pub fn serialize_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    /// 1-byte unsigned integer.
    pub fn serialize_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    /// 2-byte little-endian unsigned integer.
    pub fn serialize_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// 4-byte little-endian unsigned integer.
    pub fn serialize_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// 8-byte little-endian unsigned integer.
    pub fn serialize_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// 16-byte little-endian unsigned integer.
    pub fn serialize_u128(&mut self, v: u128) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// 32-byte little-endian unsigned integer.
    pub fn serialize_u256(&mut self, v: &U256) {
        let mut le = [0u8; 32];
        v.to_little_endian(&mut le);
        self.buf.extend_from_slice(&le);
    }

    /// ULEB128, 7 bits per byte, continuation bit on all but the last.
    pub fn serialize_uleb128(&mut self, v: u32) {
        let mut value = v;
        while value >= 0x80 {
            self.buf.push(((value & 0x7f) as u8) | 0x80);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }

    /// Length prefix for a buffer, string or vector.
    pub fn serialize_len(&mut self, len: usize) -> Result<(), BcsError> {
        if len > MAX_SEQUENCE_LENGTH {
            return Err(BcsError::TooLong(len));
        }
        // MAX_SEQUENCE_LENGTH < u32::MAX
        self.serialize_uleb128(len as u32);
        Ok(())
    }

    /// Enum discriminant.
    pub fn serialize_variant_index(&mut self, index: u32) {
        self.serialize_uleb128(index);
    }

    /// Length-prefixed byte buffer.
    pub fn serialize_bytes(&mut self, bytes: &[u8]) -> Result<(), BcsError> {
        self.serialize_len(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Raw bytes with no length prefix (fixed-size fields).
    pub fn serialize_fixed_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Length-prefixed UTF-8 string.
    pub fn serialize_str(&mut self, s: &str) -> Result<(), BcsError> {
        self.serialize_bytes(s.as_bytes())
    }

    /// `vector<T>`: count then each element encoding back to back.
    pub fn serialize_vec<T: Serializable>(&mut self, items: &[T]) -> Result<(), BcsError> {
        self.serialize_len(items.len())?;
        for item in items {
            item.serialize(self)?;
        }
        Ok(())
    }

    /// Encode `value` into its own buffer and append it as a length-prefixed blob.
    pub fn serialize_as_bytes<T: Serializable + ?Sized>(&mut self, value: &T) -> Result<(), BcsError> {
        let mut inner = Serializer::new();
        value.serialize(&mut inner)?;
        self.serialize_bytes(&inner.buf)
    }

    /// `Option<T>`: 0 for none, 1 followed by the value for some.
    pub fn serialize_option<T: Serializable>(&mut self, v: Option<&T>) -> Result<(), BcsError> {
        match v {
            None => {
                self.serialize_bool(false);
                Ok(())
            }
            Some(inner) => {
                self.serialize_bool(true);
                inner.serialize(self)
            }
        }
    }
}
