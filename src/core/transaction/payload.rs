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

//! Entry functions and the transaction payload union.
//!
//! `EntryFunction` layout:
//! `ModuleId || str(function) || vector<TypeTag> || vector<vector<u8>>`,
//! where each argument blob is the BCS encoding of one value. That is the
//! same byte sequence as a [`Sequence`] of the argument values.

use super::module_id::ModuleId;
use super::script::Script;
use crate::core::bcs::{BcsError, Deserializable, Deserializer, Sequence, Serializable, Serializer};
use crate::core::types::type_tag::is_identifier;
use crate::core::types::{TypeTag, Value, ValueKind};

/// Call of a public entry function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFunction {
    /// Declaring module.
    pub module: ModuleId,
    /// Function name.
    pub function: String,
    /// Type arguments.
    pub ty_args: Vec<TypeTag>,
    /// Pre-encoded arguments.
    pub args: Vec<Vec<u8>>,
}

impl EntryFunction {
    /// Build from already encoded arguments.
    pub fn new(
        module: ModuleId,
        function: impl Into<String>,
        ty_args: Vec<TypeTag>,
        args: Vec<Vec<u8>>,
    ) -> Result<Self, BcsError> {
        let function = function.into();
        if !is_identifier(&function) {
            return Err(BcsError::InvalidTypeTag(function));
        }
        Ok(Self { module, function, ty_args, args })
    }

    /// Build from typed values; each value is encoded into its own blob.
    pub fn natural(
        module: ModuleId,
        function: impl Into<String>,
        ty_args: Vec<TypeTag>,
        args: &Sequence<Value>,
    ) -> Result<Self, BcsError> {
        Self::new(module, function, ty_args, args.element_bytes()?)
    }

    /// Decode the argument blobs given the expected kind of each.
    pub fn decode_args(&self, kinds: &[ValueKind]) -> Result<Sequence<Value>, BcsError> {
        if kinds.len() != self.args.len() {
            return Err(BcsError::LengthMismatch { expected: kinds.len(), got: self.args.len() });
        }
        let mut out = Vec::with_capacity(kinds.len());
        for (blob, kind) in self.args.iter().zip(kinds) {
            let mut d = Deserializer::new(blob);
            out.push(Value::deserialize_kind(&mut d, *kind)?);
            d.finish()?;
        }
        Ok(Sequence::new(out))
    }
}

impl Serializable for EntryFunction {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        self.module.serialize(serializer)?;
        serializer.serialize_str(&self.function)?;
        serializer.serialize_vec(&self.ty_args)?;
        serializer.serialize_len(self.args.len())?;
        for arg in &self.args {
            serializer.serialize_bytes(arg)?;
        }
        Ok(())
    }
}

impl Deserializable for EntryFunction {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let module = ModuleId::deserialize(deserializer)?;
        let function = deserializer.deserialize_str()?;
        let ty_args = deserializer.deserialize_vec()?;
        let len = deserializer.deserialize_len()?;
        let mut args = Vec::with_capacity(len.min(deserializer.remaining()));
        for _ in 0..len {
            args.push(deserializer.deserialize_bytes()?);
        }
        Ok(Self { module, function, ty_args, args })
    }
}

/// What a transaction executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionPayload {
    /// Compiled script (0).
    Script(Script),
    /// Module publishing bundle (1). Not supported; encoding fails.
    ModuleBundle,
    /// Entry function call (2).
    EntryFunction(EntryFunction),
}

impl TransactionPayload {
    /// Script discriminant.
    pub const SCRIPT: u32 = 0;
    /// Module bundle discriminant.
    pub const MODULE_BUNDLE: u32 = 1;
    /// Entry function discriminant.
    pub const ENTRY_FUNCTION: u32 = 2;

    /// Wire discriminant.
    pub fn variant(&self) -> u32 {
        match self {
            TransactionPayload::Script(_) => Self::SCRIPT,
            TransactionPayload::ModuleBundle => Self::MODULE_BUNDLE,
            TransactionPayload::EntryFunction(_) => Self::ENTRY_FUNCTION,
        }
    }
}

impl Serializable for TransactionPayload {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        match self {
            TransactionPayload::Script(s) => {
                serializer.serialize_variant_index(Self::SCRIPT);
                s.serialize(serializer)
            }
            TransactionPayload::ModuleBundle => Err(BcsError::Unsupported("module bundle payload")),
            TransactionPayload::EntryFunction(f) => {
                serializer.serialize_variant_index(Self::ENTRY_FUNCTION);
                f.serialize(serializer)
            }
        }
    }
}

impl Deserializable for TransactionPayload {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        match deserializer.deserialize_variant_index()? {
            Self::SCRIPT => Script::deserialize(deserializer).map(TransactionPayload::Script),
            Self::MODULE_BUNDLE => Err(BcsError::Unsupported("module bundle payload")),
            Self::ENTRY_FUNCTION => EntryFunction::deserialize(deserializer).map(TransactionPayload::EntryFunction),
            index => Err(BcsError::UnknownVariant { kind: "TransactionPayload", index }),
        }
    }
}

impl From<EntryFunction> for TransactionPayload {
    fn from(f: EntryFunction) -> Self {
        TransactionPayload::EntryFunction(f)
    }
}

impl From<Script> for TransactionPayload {
    fn from(s: Script) -> Self {
        TransactionPayload::Script(s)
    }
}
