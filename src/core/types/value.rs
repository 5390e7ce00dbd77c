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

//! Tagged BCS values used as typed arguments.

use super::address::AccountAddress;
use super::type_tag::{StructTag, TypeTag};
use crate::core::bcs::{BcsError, Deserializable, Deserializer, Sequence, Serializable, Serializer};
use primitive_types::U256;

/// A value of one of the closed set of argument kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// `bool`
    Bool(bool),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `u128`
    U128(u128),
    /// `u256`
    U256(U256),
    /// UTF-8 string.
    BString(String),
    /// Opaque byte vector.
    Bytes(Vec<u8>),
    /// 32-byte address.
    AccountAddress(AccountAddress),
    /// Struct tag.
    StructTag(StructTag),
}

/// Which [`Value`] variant to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `u256`
    U256,
    /// UTF-8 string.
    BString,
    /// Byte vector.
    Bytes,
    /// Address.
    AccountAddress,
    /// Struct tag.
    StructTag,
}

impl ValueKind {
    /// Kind that carries values of `tag`, for the tags a [`Value`] can hold.
    pub fn from_type_tag(tag: &TypeTag) -> Result<Self, BcsError> {
        Ok(match tag {
            TypeTag::Bool => ValueKind::Bool,
            TypeTag::U8 => ValueKind::U8,
            TypeTag::U16 => ValueKind::U16,
            TypeTag::U32 => ValueKind::U32,
            TypeTag::U64 => ValueKind::U64,
            TypeTag::U128 => ValueKind::U128,
            TypeTag::U256 => ValueKind::U256,
            TypeTag::Address => ValueKind::AccountAddress,
            TypeTag::Vector(inner) if **inner == TypeTag::U8 => ValueKind::Bytes,
            TypeTag::Struct(s) if **s == StructTag::move_string() => ValueKind::BString,
            TypeTag::Signer => return Err(BcsError::Unsupported("signer argument")),
            TypeTag::Vector(_) => return Err(BcsError::Unsupported("vector argument other than vector<u8>")),
            TypeTag::Struct(_) => return Err(BcsError::Unsupported("struct argument other than 0x1::string::String")),
        })
    }

    /// Wire discriminant, using the type-tag numbering.
    pub fn variant(self) -> u32 {
        match self {
            ValueKind::Bool => TypeTag::BOOL,
            ValueKind::U8 => TypeTag::U8_TAG,
            ValueKind::U16 => TypeTag::U16_TAG,
            ValueKind::U32 => TypeTag::U32_TAG,
            ValueKind::U64 => TypeTag::U64_TAG,
            ValueKind::U128 => TypeTag::U128_TAG,
            ValueKind::U256 => TypeTag::U256_TAG,
            ValueKind::AccountAddress => TypeTag::ACCOUNT_ADDRESS,
            ValueKind::Bytes => TypeTag::VECTOR,
            // 0x1::string::String is a struct
            ValueKind::BString | ValueKind::StructTag => TypeTag::STRUCT,
        }
    }
}

impl Value {
    /// Variant kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::U128(_) => ValueKind::U128,
            Value::U256(_) => ValueKind::U256,
            Value::BString(_) => ValueKind::BString,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::AccountAddress(_) => ValueKind::AccountAddress,
            Value::StructTag(_) => ValueKind::StructTag,
        }
    }

    /// Type-tag discriminant of this value.
    pub fn variant(&self) -> u32 {
        self.kind().variant()
    }

    /// Decode one value of `kind`.
    pub fn deserialize_kind(deserializer: &mut Deserializer<'_>, kind: ValueKind) -> Result<Self, BcsError> {
        Ok(match kind {
            ValueKind::Bool => Value::Bool(deserializer.deserialize_bool()?),
            ValueKind::U8 => Value::U8(deserializer.deserialize_u8()?),
            ValueKind::U16 => Value::U16(deserializer.deserialize_u16()?),
            ValueKind::U32 => Value::U32(deserializer.deserialize_u32()?),
            ValueKind::U64 => Value::U64(deserializer.deserialize_u64()?),
            ValueKind::U128 => Value::U128(deserializer.deserialize_u128()?),
            ValueKind::U256 => Value::U256(deserializer.deserialize_u256()?),
            ValueKind::BString => Value::BString(deserializer.deserialize_str()?),
            ValueKind::Bytes => Value::Bytes(deserializer.deserialize_bytes()?),
            ValueKind::AccountAddress => Value::AccountAddress(AccountAddress::deserialize(deserializer)?),
            ValueKind::StructTag => Value::StructTag(StructTag::deserialize(deserializer)?),
        })
    }

    /// Decode a [`Sequence`] whose element `i` has kind `kinds[i]`.
    pub fn deserialize_sequence(
        deserializer: &mut Deserializer<'_>,
        kinds: &[ValueKind],
    ) -> Result<Sequence<Value>, BcsError> {
        let len = deserializer.deserialize_len()?;
        if len != kinds.len() {
            return Err(BcsError::LengthMismatch { expected: kinds.len(), got: len });
        }
        let mut items = Vec::with_capacity(len);
        for kind in kinds {
            let blob = deserializer.deserialize_bytes()?;
            let mut inner = Deserializer::new(&blob);
            items.push(Value::deserialize_kind(&mut inner, *kind)?);
            inner.finish()?;
        }
        Ok(Sequence::new(items))
    }

    /// Parse a decimal `u128`; negative or over-width input is out of range.
    pub fn u128_from_dec_str(text: &str) -> Result<Self, BcsError> {
        text.trim()
            .parse::<u128>()
            .map(Value::U128)
            .map_err(|_| BcsError::OutOfRange("u128"))
    }

    /// Parse a decimal `u256`; negative or over-width input is out of range.
    pub fn u256_from_dec_str(text: &str) -> Result<Self, BcsError> {
        let t = text.trim();
        if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BcsError::OutOfRange("u256"));
        }
        U256::from_dec_str(t)
            .map(Value::U256)
            .map_err(|_| BcsError::OutOfRange("u256"))
    }

    /// Parse the textual form of a value of `kind`.
    ///
    /// Integers are decimal, bytes are hex (optional `0x`), addresses are hex
    /// and struct tags use the `addr::module::name` form.
    pub fn parse(kind: ValueKind, text: &str) -> Result<Self, BcsError> {
        let t = text.trim();
        Ok(match kind {
            ValueKind::Bool => match t {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => return Err(BcsError::OutOfRange("bool")),
            },
            ValueKind::U8 => Value::U8(t.parse().map_err(|_| BcsError::OutOfRange("u8"))?),
            ValueKind::U16 => Value::U16(t.parse().map_err(|_| BcsError::OutOfRange("u16"))?),
            ValueKind::U32 => Value::U32(t.parse().map_err(|_| BcsError::OutOfRange("u32"))?),
            ValueKind::U64 => Value::U64(t.parse().map_err(|_| BcsError::OutOfRange("u64"))?),
            ValueKind::U128 => return Self::u128_from_dec_str(t),
            ValueKind::U256 => return Self::u256_from_dec_str(t),
            ValueKind::BString => Value::BString(text.to_string()),
            ValueKind::Bytes => {
                let digits = t.strip_prefix("0x").unwrap_or(t);
                Value::Bytes(hex::decode(digits).map_err(|_| BcsError::OutOfRange("bytes"))?)
            }
            ValueKind::AccountAddress => Value::AccountAddress(AccountAddress::from_hex(t)?),
            ValueKind::StructTag => Value::StructTag(t.parse()?),
        })
    }
}

impl Serializable for Value {
    /// Payload only; the kind is carried out of band.
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        match self {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::U128(v) => serializer.serialize_u128(*v),
            Value::U256(v) => serializer.serialize_u256(v),
            Value::BString(v) => serializer.serialize_str(v)?,
            Value::Bytes(v) => serializer.serialize_bytes(v)?,
            Value::AccountAddress(v) => v.serialize(serializer)?,
            Value::StructTag(v) => v.serialize(serializer)?,
        }
        Ok(())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Value::U128(v)
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::U256(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::BString(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::BString(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<AccountAddress> for Value {
    fn from(v: AccountAddress) -> Self {
        Value::AccountAddress(v)
    }
}

impl From<StructTag> for Value {
    fn from(v: StructTag) -> Self {
        Value::StructTag(v)
    }
}
