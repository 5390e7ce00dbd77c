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

//! Script payloads: compiled bytecode plus typed arguments.
//!
//! Script arguments carry their own discriminant, unlike entry-function
//! arguments which travel as untyped byte blobs.

use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::types::{AccountAddress, TypeTag};
use primitive_types::U256;

/// A single script argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptArgument {
    /// `u8` (0)
    U8(u8),
    /// `u64` (1)
    U64(u64),
    /// `u128` (2)
    U128(u128),
    /// `address` (3)
    Address(AccountAddress),
    /// `vector<u8>` (4)
    U8Vector(Vec<u8>),
    /// `bool` (5)
    Bool(bool),
    /// `u16` (6)
    U16(u16),
    /// `u32` (7)
    U32(u32),
    /// `u256` (8)
    U256(U256),
}

impl ScriptArgument {
    /// Wire discriminant.
    pub fn variant(&self) -> u32 {
        match self {
            ScriptArgument::U8(_) => 0,
            ScriptArgument::U64(_) => 1,
            ScriptArgument::U128(_) => 2,
            ScriptArgument::Address(_) => 3,
            ScriptArgument::U8Vector(_) => 4,
            ScriptArgument::Bool(_) => 5,
            ScriptArgument::U16(_) => 6,
            ScriptArgument::U32(_) => 7,
            ScriptArgument::U256(_) => 8,
        }
    }
}

impl Serializable for ScriptArgument {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_variant_index(self.variant());
        match self {
            ScriptArgument::U8(v) => serializer.serialize_u8(*v),
            ScriptArgument::U64(v) => serializer.serialize_u64(*v),
            ScriptArgument::U128(v) => serializer.serialize_u128(*v),
            ScriptArgument::Address(v) => v.serialize(serializer)?,
            ScriptArgument::U8Vector(v) => serializer.serialize_bytes(v)?,
            ScriptArgument::Bool(v) => serializer.serialize_bool(*v),
            ScriptArgument::U16(v) => serializer.serialize_u16(*v),
            ScriptArgument::U32(v) => serializer.serialize_u32(*v),
            ScriptArgument::U256(v) => serializer.serialize_u256(v),
        }
        Ok(())
    }
}

impl Deserializable for ScriptArgument {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        Ok(match deserializer.deserialize_variant_index()? {
            0 => ScriptArgument::U8(deserializer.deserialize_u8()?),
            1 => ScriptArgument::U64(deserializer.deserialize_u64()?),
            2 => ScriptArgument::U128(deserializer.deserialize_u128()?),
            3 => ScriptArgument::Address(AccountAddress::deserialize(deserializer)?),
            4 => ScriptArgument::U8Vector(deserializer.deserialize_bytes()?),
            5 => ScriptArgument::Bool(deserializer.deserialize_bool()?),
            6 => ScriptArgument::U16(deserializer.deserialize_u16()?),
            7 => ScriptArgument::U32(deserializer.deserialize_u32()?),
            8 => ScriptArgument::U256(deserializer.deserialize_u256()?),
            index => return Err(BcsError::UnknownVariant { kind: "ScriptArgument", index }),
        })
    }
}

/// Compiled script with type and value arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    /// Move bytecode.
    pub code: Vec<u8>,
    /// Type arguments.
    pub ty_args: Vec<TypeTag>,
    /// Value arguments.
    pub args: Vec<ScriptArgument>,
}

impl Script {
    /// Bundle code and arguments.
    pub fn new(code: Vec<u8>, ty_args: Vec<TypeTag>, args: Vec<ScriptArgument>) -> Self {
        Self { code, ty_args, args }
    }
}

impl Serializable for Script {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bytes(&self.code)?;
        serializer.serialize_vec(&self.ty_args)?;
        serializer.serialize_vec(&self.args)
    }
}

impl Deserializable for Script {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        Ok(Self {
            code: deserializer.deserialize_bytes()?,
            ty_args: deserializer.deserialize_vec()?,
            args: deserializer.deserialize_vec()?,
        })
    }
}
