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

//! Ed25519 keys and signatures.
//!
//! Both public keys and signatures travel as length-prefixed byte buffers
//! (`0x20 || pk`, `0x40 || sig`).

use super::CryptoError;
use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::security::keystore::{KeystoreError, SignerBackend};
use crate::core::types::{AccountAddress, AuthScheme};
use ring::{
    rand::{SecureRandom, SystemRandom},
    signature::{Ed25519KeyPair, KeyPair, UnparsedPublicKey, ED25519},
};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// Public key length.
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Signature length.
pub const SIGNATURE_LENGTH: usize = 64;
/// Seed length.
pub const SEED_LENGTH: usize = 32;

/// Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ed25519PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl Ed25519PublicKey {
    /// Wrap raw key bytes.
    pub const fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse from a 32-byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        bytes.try_into().map(Self).map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Parse hex (optional `0x`).
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let s = s.trim();
        let raw = hex::decode(s.strip_prefix("0x").unwrap_or(s)).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(&raw)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Single-key account address.
    pub fn to_address(&self) -> AccountAddress {
        AccountAddress::from_key_material(&self.0, AuthScheme::Ed25519)
    }

    /// Check `signature` over `message`. Any failure is `false`.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        UnparsedPublicKey::new(&ED25519, &self.0)
            .verify(message, &signature.0)
            .is_ok()
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey({self})")
    }
}

impl Serializable for Ed25519PublicKey {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bytes(&self.0)
    }
}

impl Deserializable for Ed25519PublicKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let raw = deserializer.deserialize_bytes()?;
        raw.as_slice().try_into().map(Self).map_err(|_| BcsError::LengthMismatch {
            expected: PUBLIC_KEY_LENGTH,
            got: raw.len(),
        })
    }
}

/// Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature([u8; SIGNATURE_LENGTH]);

impl Ed25519Signature {
    /// Wrap raw signature bytes.
    pub const fn new(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse from a 64-byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        bytes.try_into().map(Self).map_err(|_| CryptoError::InvalidSignature)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signature(0x{})", hex::encode(self.0))
    }
}

impl Serializable for Ed25519Signature {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_bytes(&self.0)
    }
}

impl Deserializable for Ed25519Signature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        let raw = deserializer.deserialize_bytes()?;
        raw.as_slice().try_into().map(Self).map_err(|_| BcsError::LengthMismatch {
            expected: SIGNATURE_LENGTH,
            got: raw.len(),
        })
    }
}

/// Ed25519 private key. The seed is wiped on drop.
pub struct Ed25519PrivateKey {
    seed: [u8; SEED_LENGTH],
    keypair: Ed25519KeyPair,
}

impl Ed25519PrivateKey {
    /// Build from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Result<Self, CryptoError> {
        let keypair = Ed25519KeyPair::from_seed_unchecked(seed).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { seed: *seed, keypair })
    }

    /// Accepts a 32-byte seed or the 64-byte `seed || public_key` form.
    /// In the 64-byte form the trailing key must match the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            SEED_LENGTH => {
                let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
                seed.copy_from_slice(bytes);
                Self::from_seed(&seed)
            }
            64 => {
                let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
                seed.copy_from_slice(&bytes[..SEED_LENGTH]);
                let key = Self::from_seed(&seed)?;
                let matches: bool = key.public_key().as_bytes()[..].ct_eq(&bytes[SEED_LENGTH..]).into();
                if !matches {
                    return Err(CryptoError::InvalidPrivateKey);
                }
                Ok(key)
            }
            _ => Err(CryptoError::InvalidPrivateKey),
        }
    }

    /// Parse hex (optional `0x`), either form accepted by [`Self::from_bytes`].
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let s = s.trim();
        let raw = Zeroizing::new(
            hex::decode(s.strip_prefix("0x").unwrap_or(s)).map_err(|_| CryptoError::InvalidPrivateKey)?,
        );
        Self::from_bytes(&raw)
    }

    /// Fresh key from the system RNG.
    pub fn generate() -> Result<Self, CryptoError> {
        let rng = SystemRandom::new();
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        rng.fill(&mut seed[..]).map_err(|_| CryptoError::Rng)?;
        Self::from_seed(&seed)
    }

    /// Copy of the seed.
    pub fn to_seed(&self) -> Zeroizing<[u8; SEED_LENGTH]> {
        Zeroizing::new(self.seed)
    }

    /// Matching public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let mut out = [0u8; PUBLIC_KEY_LENGTH];
        out.copy_from_slice(self.keypair.public_key().as_ref());
        Ed25519PublicKey(out)
    }

    /// Single-key account address.
    pub fn to_address(&self) -> AccountAddress {
        self.public_key().to_address()
    }

    /// Deterministic signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out.copy_from_slice(self.keypair.sign(message).as_ref());
        Ed25519Signature(out)
    }
}

impl Drop for Ed25519PrivateKey {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PrivateKey(pk={})", self.public_key())
    }
}

impl SignerBackend for Ed25519PrivateKey {
    fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PrivateKey::public_key(self)
    }

    fn sign(&self, msg: &[u8]) -> Result<Ed25519Signature, KeystoreError> {
        Ok(Ed25519PrivateKey::sign(self, msg))
    }
}
