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

//! Signed transactions: `BCS(raw) || BCS(authenticator)`.

use super::authenticator::Authenticator;
use super::raw::{MultiAgentRawTransaction, RawTransaction};
use super::TransactionError;
use crate::core::bcs::{to_bytes, BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::crypto::hash::{domain_separated, sha3_256, TRANSACTION_SALT};
use tracing::{debug, warn};

/// Discriminant of a user transaction inside the committed-transaction union.
const USER_TRANSACTION: u8 = 0;

/// Raw transaction with its authenticator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    raw: RawTransaction,
    authenticator: Authenticator,
}

impl SignedTransaction {
    /// Attach an authenticator.
    pub fn new(raw: RawTransaction, authenticator: Authenticator) -> Self {
        Self { raw, authenticator }
    }

    /// Transaction body.
    pub fn raw(&self) -> &RawTransaction {
        &self.raw
    }

    /// Attached proof.
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Split into parts.
    pub fn into_parts(self) -> (RawTransaction, Authenticator) {
        (self.raw, self.authenticator)
    }

    /// The message the authenticator must cover.
    pub fn signing_message(&self) -> Result<Vec<u8>, BcsError> {
        match &self.authenticator {
            Authenticator::MultiAgent { secondary_signer_addresses, .. } => {
                MultiAgentRawTransaction::new(self.raw.clone(), secondary_signer_addresses.clone()).keyed()
            }
            _ => self.raw.keyed(),
        }
    }

    /// Rebuild the signing message and check the authenticator against it.
    ///
    /// `Err` means the message could not be encoded; a bad signature is `Ok(false)`.
    pub fn verify(&self) -> Result<bool, BcsError> {
        let message = self.signing_message()?;
        let ok = self.authenticator.verify(&message);
        if ok {
            debug!(sender = %self.raw.sender, seq = self.raw.sequence_number, "signature verified");
        } else {
            warn!(sender = %self.raw.sender, seq = self.raw.sequence_number, "signature verification failed");
        }
        Ok(ok)
    }

    /// Verify, turning a bad signature into an error.
    pub fn into_verified(self) -> Result<Self, TransactionError> {
        if self.verify()? {
            Ok(self)
        } else {
            Err(TransactionError::VerificationFailed)
        }
    }

    /// `SHA3-256(SHA3-256("APTOS::Transaction") || 0x00 || BCS(self))`.
    pub fn committed_hash(&self) -> Result<[u8; 32], BcsError> {
        let mut body = Vec::with_capacity(1 + 256);
        body.push(USER_TRANSACTION);
        body.extend_from_slice(&to_bytes(self)?);
        Ok(sha3_256(&domain_separated(TRANSACTION_SALT, &body)))
    }
}

impl Serializable for SignedTransaction {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        self.raw.serialize(serializer)?;
        self.authenticator.serialize(serializer)
    }
}

impl Deserializable for SignedTransaction {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        Ok(Self {
            raw: RawTransaction::deserialize(deserializer)?,
            authenticator: Authenticator::deserialize(deserializer)?,
        })
    }
}
