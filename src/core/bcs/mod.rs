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

//! Binary Canonical Serialization (BCS).
//!
//! Wire rules:
//! - fixed-width unsigned integers are little-endian (`u8`..`u256`)
//! - `bool` is one byte, exactly `0x00` or `0x01`
//! - lengths and enum variant indices are ULEB128 (`u32` range, minimal form)
//! - byte buffers and strings are `ULEB128(len) || bytes`
//! - `vector<T>` is `ULEB128(count) || T*`
//!
//! Every encoding is unique: decoders reject anything a serializer would not
//! have produced (non-minimal ULEB128, bool bytes other than 0/1, unsorted map
//! keys, trailing bytes).

pub mod containers;
pub mod deserializer;
pub mod serializer;

pub use containers::{BcsMap, Sequence};
pub use deserializer::Deserializer;
pub use serializer::Serializer;

use crate::core::crypto::CryptoError;
use thiserror::Error;

/// Largest accepted length prefix for byte buffers, strings and vectors.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// BCS encode/decode error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BcsError {
    /// A read needed more bytes than remain in the input.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    Underflow {
        /// Bytes requested by the read.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },
    /// A string field does not hold valid UTF-8.
    #[error("invalid utf-8 in string")]
    InvalidUtf8,
    /// A tagged union discriminant has no matching variant.
    #[error("unknown {kind} variant {index}")]
    UnknownVariant {
        /// Name of the union being decoded.
        kind: &'static str,
        /// Discriminant read from the wire.
        index: u32,
    },
    /// ULEB128 value does not fit in `u32` or runs past five bytes.
    #[error("uleb128 overflow")]
    UlebOverflow,
    /// ULEB128 value was not written in its shortest form.
    #[error("non-canonical uleb128")]
    NonCanonicalUleb,
    /// A bool byte other than 0x00 / 0x01.
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),
    /// A value does not fit the target field.
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
    /// Fixed-length field had the wrong length.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },
    /// Length prefix exceeds [`MAX_SEQUENCE_LENGTH`].
    #[error("length {0} exceeds maximum")]
    TooLong(usize),
    /// Input was not fully consumed.
    #[error("{0} trailing bytes")]
    TrailingBytes(usize),
    /// Map key inserted or decoded twice.
    #[error("duplicate map key {0:?}")]
    DuplicateKey(String),
    /// Map keys on the wire are not in ascending byte order.
    #[error("map keys not in canonical order")]
    NonCanonicalMap,
    /// Type tag text could not be parsed.
    #[error("invalid type tag: {0}")]
    InvalidTypeTag(String),
    /// Account address text could not be parsed.
    #[error("invalid account address: {0}")]
    InvalidAddress(String),
    /// A multi-ed25519 key or signature blob decoded but failed validation.
    #[error("invalid {kind}: {reason}")]
    InvalidMultisig {
        /// Which blob was rejected.
        kind: &'static str,
        /// Validation failure.
        reason: Box<CryptoError>,
    },
    /// Encoding exists on the wire but is not implemented here.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

/// A value with a canonical BCS encoding.
pub trait Serializable {
    /// Append the canonical encoding of `self` to `serializer`.
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError>;
}

/// A value that can be decoded from its canonical BCS encoding.
pub trait Deserializable: Sized {
    /// Read one value from `deserializer`, advancing it.
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError>;
}

/// Encode `value` into a fresh buffer.
pub fn to_bytes<T: Serializable + ?Sized>(value: &T) -> Result<Vec<u8>, BcsError> {
    let mut s = Serializer::new();
    value.serialize(&mut s)?;
    Ok(s.into_bytes())
}

/// Decode a `T` that must span all of `bytes`.
pub fn from_bytes<T: Deserializable>(bytes: &[u8]) -> Result<T, BcsError> {
    let mut d = Deserializer::new(bytes);
    let v = T::deserialize(&mut d)?;
    d.finish()?;
    Ok(v)
}

impl Serializable for bool {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bool(*self);
        Ok(())
    }
}

impl Deserializable for bool {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserializer.deserialize_bool()
    }
}

macro_rules! impl_fixed_int {
    ($($ty:ty => $ser:ident, $de:ident;)*) => {
        $(
            impl Serializable for $ty {
                fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
                    serializer.$ser(*self);
                    Ok(())
                }
            }

            impl Deserializable for $ty {
                fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
                    deserializer.$de()
                }
            }
        )*
    };
}

impl_fixed_int! {
    u8 => serialize_u8, deserialize_u8;
    u16 => serialize_u16, deserialize_u16;
    u32 => serialize_u32, deserialize_u32;
    u64 => serialize_u64, deserialize_u64;
    u128 => serialize_u128, deserialize_u128;
}

impl Serializable for primitive_types::U256 {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_u256(self);
        Ok(())
    }
}

impl Deserializable for primitive_types::U256 {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserializer.deserialize_u256()
    }
}

impl Serializable for str {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_str(self)
    }
}

impl Serializable for String {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_str(self)
    }
}

impl Deserializable for String {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserializer.deserialize_str()
    }
}

/// `vector<T>`: count followed by the elements, no per-element prefix.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_vec(self)
    }
}

impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserializer.deserialize_vec()
    }
}

impl<T: Serializable + ?Sized> Serializable for &T {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        (**self).serialize(serializer)
    }
}

impl<T: Serializable + ?Sized> Serializable for Box<T> {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        (**self).serialize(serializer)
    }
}

impl<T: Deserializable> Deserializable for Box<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        T::deserialize(deserializer).map(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_wire_values() {
        assert_eq!(to_bytes(&true).unwrap(), vec![1]);
        assert_eq!(to_bytes(&false).unwrap(), vec![0]);
        assert_eq!(from_bytes::<bool>(&[2]), Err(BcsError::InvalidBool(2)));
    }

    #[test]
    fn string_vector_layout() {
        let v: Vec<String> = ["a", "abc", "def", "ghi"].iter().map(|s| s.to_string()).collect();
        let bytes = to_bytes(&v).unwrap();
        assert_eq!(
            bytes,
            vec![4, 1, 97, 3, 97, 98, 99, 3, 100, 101, 102, 3, 103, 104, 105]
        );
        assert_eq!(from_bytes::<Vec<String>>(&bytes).unwrap(), v);
    }

    #[test]
    fn trailing_bytes_rejected() {
        assert_eq!(from_bytes::<u8>(&[1, 2]), Err(BcsError::TrailingBytes(1)));
    }
}
