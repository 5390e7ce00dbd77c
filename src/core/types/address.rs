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

//! 32-byte account addresses.
//!
//! address = SHA3-256( key_material || scheme_id )

use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::crypto::hash::sha3_256;
use std::fmt;
use std::str::FromStr;

/// Address length in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Signature scheme byte appended to key material before hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthScheme {
    /// Single Ed25519 key.
    Ed25519 = 0,
    /// K-of-N Ed25519 key set.
    MultiEd25519 = 1,
}

/// Account address (exactly 32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    /// `0x0`.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);
    /// `0x1`, the framework address.
    pub const ONE: Self = Self::one();

    const fn one() -> Self {
        let mut b = [0u8; ADDRESS_LENGTH];
        b[ADDRESS_LENGTH - 1] = 1;
        Self(b)
    }

    /// Construct from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Construct from a slice that must be exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BcsError> {
        let arr: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|_| BcsError::LengthMismatch {
            expected: ADDRESS_LENGTH,
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Parse hex with or without `0x`; short forms are left-padded with zeros.
    pub fn from_hex(s: &str) -> Result<Self, BcsError> {
        let raw = s.trim();
        let digits = raw.strip_prefix("0x").unwrap_or(raw);
        if digits.is_empty() || digits.len() > ADDRESS_LENGTH * 2 {
            return Err(BcsError::InvalidAddress(raw.to_string()));
        }
        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let bytes = hex::decode(padded).map_err(|_| BcsError::InvalidAddress(raw.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Derive from key material and scheme.
    pub fn from_key_material(key_material: &[u8], scheme: AuthScheme) -> Self {
        let mut buf = Vec::with_capacity(key_material.len() + 1);
        buf.extend_from_slice(key_material);
        buf.push(scheme as u8);
        Self(sha3_256(&buf))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// `0x` followed by all 64 hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// `0x` followed by the hex digits without leading zeros (`0x1`).
    pub fn to_short_string(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex())
    }
}

impl FromStr for AccountAddress {
    type Err = BcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serializable for AccountAddress {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_fixed_bytes(&self.0);
        Ok(())
    }
}

impl Deserializable for AccountAddress {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserializer.deserialize_array().map(Self)
    }
}
