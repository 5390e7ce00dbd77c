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

//! Ed25519 keys, K-of-N multisig and hashing.

pub mod ed25519;
pub mod hash;
pub mod multisig;

pub use ed25519::{Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature};
pub use multisig::{MultiPublicKey, MultiSignature};

use crate::core::bcs::BcsError;
use thiserror::Error;

/// Key and signature validation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Public key bytes have the wrong length.
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Signature bytes have the wrong length.
    #[error("invalid signature")]
    InvalidSignature,
    /// Private key bytes are malformed or inconsistent.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// Multisig key count outside `2..=32`.
    #[error("multisig key count {0} out of range")]
    KeyCount(usize),
    /// Multisig threshold outside `1..n`.
    #[error("multisig threshold {threshold} invalid for {keys} keys")]
    Threshold {
        /// Requested threshold.
        threshold: u8,
        /// Number of keys.
        keys: usize,
    },
    /// A signature names a key that is not in the key set.
    #[error("signer not in key set")]
    UnknownSigner,
    /// The same key signed twice.
    #[error("duplicate signer at index {0}")]
    DuplicateSigner(usize),
    /// System randomness failed.
    #[error("rng")]
    Rng,
    /// Encoding failure.
    #[error("codec: {0}")]
    Codec(#[from] BcsError),
}
