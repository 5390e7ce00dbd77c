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

//! Module identifier: `address || name`.

use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::types::type_tag::is_identifier;
use crate::core::types::AccountAddress;
use std::fmt;
use std::str::FromStr;

/// Published module, e.g. `0x1::coin`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId {
    /// Publishing account.
    pub address: AccountAddress,
    /// Module name.
    pub name: String,
}

impl ModuleId {
    /// Build; `name` must be a valid identifier.
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Result<Self, BcsError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(BcsError::InvalidTypeTag(name));
        }
        Ok(Self { address, name })
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address.to_short_string(), self.name)
    }
}

impl FromStr for ModuleId {
    type Err = BcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, name) = s
            .trim()
            .split_once("::")
            .ok_or_else(|| BcsError::InvalidTypeTag(s.to_string()))?;
        Self::new(AccountAddress::from_hex(addr)?, name)
    }
}

impl Serializable for ModuleId {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        self.address.serialize(serializer)?;
        serializer.serialize_str(&self.name)
    }
}

impl Deserializable for ModuleId {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let address = AccountAddress::deserialize(deserializer)?;
        let name = deserializer.deserialize_str()?;
        Ok(Self { address, name })
    }
}
