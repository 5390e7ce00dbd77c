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

//! Bounds-checked BCS input cursor.

use super::{BcsError, Deserializable, MAX_SEQUENCE_LENGTH};
use primitive_types::U256;

/// ULEB128 for `u32` never needs more than 5 bytes.
const MAX_ULEB128_BYTES: usize = 5;

/// Read cursor over a borrowed byte slice. `pos <= input.len()` always holds.
#[derive(Debug)]
pub struct Deserializer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Deserializer<'a> {
    /// Cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Current read offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), BcsError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(BcsError::TrailingBytes(n)),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BcsError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(BcsError::Underflow { needed: n, remaining });
        }
        let out = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], BcsError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// One byte, which must be 0x00 or 0x01.
    pub fn deserialize_bool(&mut self) -> Result<bool, BcsError> {
        match self.deserialize_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(BcsError::InvalidBool(b)),
        }
    }

    /// 1-byte unsigned integer.
    pub fn deserialize_u8(&mut self) -> Result<u8, BcsError> {
        Ok(self.take_array::<1>()?[0])
    }

    /// 2-byte little-endian unsigned integer.
    pub fn deserialize_u16(&mut self) -> Result<u16, BcsError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    /// 4-byte little-endian unsigned integer.
    pub fn deserialize_u32(&mut self) -> Result<u32, BcsError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    /// 8-byte little-endian unsigned integer.
    pub fn deserialize_u64(&mut self) -> Result<u64, BcsError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    /// 16-byte little-endian unsigned integer.
    pub fn deserialize_u128(&mut self) -> Result<u128, BcsError> {
        Ok(u128::from_le_bytes(self.take_array()?))
    }

    /// 32-byte little-endian unsigned integer.
    pub fn deserialize_u256(&mut self) -> Result<U256, BcsError> {
        let le: [u8; 32] = self.take_array()?;
        Ok(U256::from_little_endian(&le))
    }

    /// ULEB128 in the `u32` range, shortest form only.
    ///
    /// The loop reads at most [`MAX_ULEB128_BYTES`] bytes whatever the input.
    pub fn deserialize_uleb128(&mut self) -> Result<u32, BcsError> {
        let mut value: u64 = 0;
        for i in 0..MAX_ULEB128_BYTES {
            let byte = self.deserialize_u8()?;
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                if i > 0 && byte == 0 {
                    return Err(BcsError::NonCanonicalUleb);
                }
                return u32::try_from(value).map_err(|_| BcsError::UlebOverflow);
            }
        }
        Err(BcsError::UlebOverflow)
    }

    /// Length prefix, bounded by [`MAX_SEQUENCE_LENGTH`].
    pub fn deserialize_len(&mut self) -> Result<usize, BcsError> {
        let len = self.deserialize_uleb128()? as usize;
        if len > MAX_SEQUENCE_LENGTH {
            return Err(BcsError::TooLong(len));
        }
        Ok(len)
    }

    /// Enum discriminant.
    pub fn deserialize_variant_index(&mut self) -> Result<u32, BcsError> {
        self.deserialize_uleb128()
    }

    /// Length-prefixed byte buffer.
    pub fn deserialize_bytes(&mut self) -> Result<Vec<u8>, BcsError> {
        let len = self.deserialize_len()?;
        Ok(self.take(len)?.to_vec())
    }

    /// Exactly `len` raw bytes.
    pub fn deserialize_fixed_bytes(&mut self, len: usize) -> Result<Vec<u8>, BcsError> {
        Ok(self.take(len)?.to_vec())
    }

    /// Exactly `N` raw bytes into an array.
    pub fn deserialize_array<const N: usize>(&mut self) -> Result<[u8; N], BcsError> {
        self.take_array()
    }

    /// Length-prefixed UTF-8 string.
    pub fn deserialize_str(&mut self) -> Result<String, BcsError> {
        let len = self.deserialize_len()?;
        let raw = self.take(len)?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| BcsError::InvalidUtf8)
    }

    /// `vector<T>`.
    pub fn deserialize_vec<T: Deserializable>(&mut self) -> Result<Vec<T>, BcsError> {
        let len = self.deserialize_len()?;
        // Every element takes at least one byte; don't trust `len` for allocation.
        let mut out = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            out.push(T::deserialize(self)?);
        }
        Ok(out)
    }

    /// Read a length-prefixed blob and decode exactly one `T` from it.
    pub fn deserialize_from_bytes<T: Deserializable>(&mut self) -> Result<T, BcsError> {
        let blob = self.deserialize_bytes()?;
        super::from_bytes(&blob)
    }

    /// `Option<T>`.
    pub fn deserialize_option<T: Deserializable>(&mut self) -> Result<Option<T>, BcsError> {
        if self.deserialize_bool()? {
            T::deserialize(self).map(Some)
        } else {
            Ok(None)
        }
    }
}
