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

//! K-of-N Ed25519 multisig.
//!
//! ## Raw layouts
//! - public key: `pk_0 || .. || pk_{n-1} || threshold(u8)`
//! - signature: `sig_a || sig_b || .. || bitmap(4)`
//!
//! Signatures appear in ascending key index. Key index `i` owns bit `31 - i`
//! of the big-endian bitmap word, so index 0 is the top bit of byte 0.
//! Both raw forms travel as a single length-prefixed byte buffer.

use super::ed25519::{Ed25519PublicKey, Ed25519Signature, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use super::CryptoError;
use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::types::{AccountAddress, AuthScheme};

/// Fewest keys in a set.
pub const MIN_KEYS: usize = 2;
/// Most keys in a set (one bitmap bit each).
pub const MAX_KEYS: usize = 32;
/// Bitmap length in bytes.
pub const BITMAP_LENGTH: usize = 4;

/// Threshold public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiPublicKey {
    keys: Vec<Ed25519PublicKey>,
    threshold: u8,
}

impl MultiPublicKey {
    /// Validated construction: `2 <= n <= 32` and `1 <= threshold < n`.
    pub fn new(keys: Vec<Ed25519PublicKey>, threshold: u8) -> Result<Self, CryptoError> {
        let n = keys.len();
        if !(MIN_KEYS..=MAX_KEYS).contains(&n) {
            return Err(CryptoError::KeyCount(n));
        }
        if threshold == 0 || usize::from(threshold) >= n {
            return Err(CryptoError::Threshold { threshold, keys: n });
        }
        Ok(Self { keys, threshold })
    }

    /// Construction without bounds checks.
    pub fn unchecked(keys: Vec<Ed25519PublicKey>, threshold: u8) -> Self {
        Self { keys, threshold }
    }

    /// Keys in index order.
    pub fn keys(&self) -> &[Ed25519PublicKey] {
        &self.keys
    }

    /// Signatures required.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Index of `key` in the set.
    pub fn index_of(&self, key: &Ed25519PublicKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Raw layout (keys then threshold).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.keys.len() * PUBLIC_KEY_LENGTH + 1);
        for k in &self.keys {
            out.extend_from_slice(k.as_bytes());
        }
        out.push(self.threshold);
        out
    }

    /// Parse and validate the raw layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let Some((&threshold, body)) = bytes.split_last() else {
            return Err(CryptoError::InvalidPublicKey);
        };
        if body.len() % PUBLIC_KEY_LENGTH != 0 {
            return Err(CryptoError::InvalidPublicKey);
        }
        let keys = body
            .chunks_exact(PUBLIC_KEY_LENGTH)
            .map(Ed25519PublicKey::from_bytes)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keys, threshold)
    }

    /// Multi-key account address.
    pub fn to_address(&self) -> AccountAddress {
        AccountAddress::from_key_material(&self.to_bytes(), AuthScheme::MultiEd25519)
    }

    /// True when the bitmap names at least `threshold` keys of this set and
    /// every named key's signature verifies.
    pub fn verify(&self, message: &[u8], signature: &MultiSignature) -> bool {
        let indices = signature.signer_indices();
        if indices.len() != signature.signatures.len() || indices.len() < usize::from(self.threshold) {
            return false;
        }
        indices.iter().zip(&signature.signatures).all(|(&i, sig)| match self.keys.get(i) {
            Some(key) => key.verify(message, sig),
            None => false,
        })
    }
}

impl Serializable for MultiPublicKey {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl Deserializable for MultiPublicKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let raw = deserializer.deserialize_bytes()?;
        Self::from_bytes(&raw).map_err(|e| BcsError::InvalidMultisig {
            kind: "multi-ed25519 public key",
            reason: Box::new(e),
        })
    }
}

/// Threshold signature: partial signatures plus the signer bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSignature {
    signatures: Vec<Ed25519Signature>,
    bitmap: [u8; BITMAP_LENGTH],
}

/// Set the bitmap bit for key `index`.
fn set_bit(bitmap: &mut [u8; BITMAP_LENGTH], index: usize) {
    bitmap[index / 8] |= 0x80 >> (index % 8);
}

/// Whether the bitmap bit for key `index` is set.
fn bit_is_set(bitmap: &[u8; BITMAP_LENGTH], index: usize) -> bool {
    bitmap[index / 8] & (0x80 >> (index % 8)) != 0
}

impl MultiSignature {
    /// Combine signatures from members of `public_key`, in any order.
    pub fn new(
        public_key: &MultiPublicKey,
        signed: Vec<(Ed25519PublicKey, Ed25519Signature)>,
    ) -> Result<Self, CryptoError> {
        let mut indexed = Vec::with_capacity(signed.len());
        for (key, sig) in signed {
            let index = public_key.index_of(&key).ok_or(CryptoError::UnknownSigner)?;
            indexed.push((index, sig));
        }
        Self::from_indexed(indexed)
    }

    /// Combine `(key index, signature)` pairs, in any order.
    pub fn from_indexed(mut indexed: Vec<(usize, Ed25519Signature)>) -> Result<Self, CryptoError> {
        indexed.sort_by_key(|(i, _)| *i);
        let mut bitmap = [0u8; BITMAP_LENGTH];
        for (i, _) in &indexed {
            if *i >= MAX_KEYS {
                return Err(CryptoError::UnknownSigner);
            }
            if bit_is_set(&bitmap, *i) {
                return Err(CryptoError::DuplicateSigner(*i));
            }
            set_bit(&mut bitmap, *i);
        }
        Ok(Self { signatures: indexed.into_iter().map(|(_, s)| s).collect(), bitmap })
    }

    /// Partial signatures in key order.
    pub fn signatures(&self) -> &[Ed25519Signature] {
        &self.signatures
    }

    /// Signer bitmap.
    pub fn bitmap(&self) -> [u8; BITMAP_LENGTH] {
        self.bitmap
    }

    /// Key indices named by the bitmap, ascending.
    pub fn signer_indices(&self) -> Vec<usize> {
        (0..MAX_KEYS).filter(|&i| bit_is_set(&self.bitmap, i)).collect()
    }

    /// Raw layout (signatures then bitmap).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.signatures.len() * SIGNATURE_LENGTH + BITMAP_LENGTH);
        for s in &self.signatures {
            out.extend_from_slice(s.as_bytes());
        }
        out.extend_from_slice(&self.bitmap);
        out
    }

    /// Parse the raw layout; signature count must match the bitmap.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < BITMAP_LENGTH {
            return Err(CryptoError::InvalidSignature);
        }
        let (body, tail) = bytes.split_at(bytes.len() - BITMAP_LENGTH);
        if body.len() % SIGNATURE_LENGTH != 0 {
            return Err(CryptoError::InvalidSignature);
        }
        let mut bitmap = [0u8; BITMAP_LENGTH];
        bitmap.copy_from_slice(tail);
        let signatures = body
            .chunks_exact(SIGNATURE_LENGTH)
            .map(Ed25519Signature::from_bytes)
            .collect::<Result<Vec<_>, _>>()?;
        let sig = Self { signatures, bitmap };
        if sig.signer_indices().len() != sig.signatures.len() {
            return Err(CryptoError::InvalidSignature);
        }
        Ok(sig)
    }
}

impl Serializable for MultiSignature {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl Deserializable for MultiSignature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let raw = deserializer.deserialize_bytes()?;
        Self::from_bytes(&raw).map_err(|e| BcsError::InvalidMultisig {
            kind: "multi-ed25519 signature",
            reason: Box::new(e),
        })
    }
}
