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

//! Unsigned transactions and their signing messages.
//!
//! ## Signing message ("keyed" form)
//! - single signer: `SHA3-256("APTOS::RawTransaction") || BCS(raw)`
//! - multi-agent: `SHA3-256("APTOS::RawTransactionWithData") || 0x00 ||
//!   BCS(raw) || vector<address>`
//!
//! Every signer of a multi-agent transaction signs the same message.

use super::authenticator::{AccountAuthenticator, Authenticator};
use super::payload::TransactionPayload;
use super::signed::SignedTransaction;
use super::TransactionError;
use crate::core::bcs::{to_bytes, BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::crypto::hash::{domain_separated, RAW_TRANSACTION_SALT, RAW_TRANSACTION_WITH_DATA_SALT};
use crate::core::crypto::{MultiPublicKey, MultiSignature};
use crate::core::security::keystore::SignerBackend;
use crate::core::types::AccountAddress;
use tracing::debug;

/// Transaction before any signature is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    /// Sending account.
    pub sender: AccountAddress,
    /// Sender's next sequence number.
    pub sequence_number: u64,
    /// What to execute.
    pub payload: TransactionPayload,
    /// Gas limit.
    pub max_gas_amount: u64,
    /// Price per gas unit.
    pub gas_unit_price: u64,
    /// Expiry, unix seconds.
    pub expiration_timestamp_secs: u64,
    /// Target chain.
    pub chain_id: u8,
}

impl RawTransaction {
    /// Assemble a raw transaction.
    pub fn new(
        sender: AccountAddress,
        sequence_number: u64,
        payload: TransactionPayload,
        max_gas_amount: u64,
        gas_unit_price: u64,
        expiration_timestamp_secs: u64,
        chain_id: u8,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            payload,
            max_gas_amount,
            gas_unit_price,
            expiration_timestamp_secs,
            chain_id,
        }
    }

    /// Domain-separated signing message.
    pub fn keyed(&self) -> Result<Vec<u8>, BcsError> {
        Ok(domain_separated(RAW_TRANSACTION_SALT, &to_bytes(self)?))
    }

    /// Sign with a single Ed25519 signer.
    pub fn sign(self, signer: &dyn SignerBackend) -> Result<SignedTransaction, TransactionError> {
        let message = self.keyed()?;
        let signature = signer.sign(&message)?;
        debug!(sender = %self.sender, seq = self.sequence_number, "signed raw transaction");
        Ok(SignedTransaction::new(self, Authenticator::ed25519(signer.public_key(), signature)))
    }

    /// Sign with `threshold` or more members of a multi-key account.
    pub fn sign_multi_ed25519(
        self,
        public_key: &MultiPublicKey,
        signers: &[&dyn SignerBackend],
    ) -> Result<SignedTransaction, TransactionError> {
        let message = self.keyed()?;
        let mut parts = Vec::with_capacity(signers.len());
        for signer in signers {
            parts.push((signer.public_key(), signer.sign(&message)?));
        }
        let signature = MultiSignature::new(public_key, parts)?;
        debug!(sender = %self.sender, signers = signers.len(), "signed raw transaction (multi-ed25519)");
        Ok(SignedTransaction::new(self, Authenticator::multi_ed25519(public_key.clone(), signature)))
    }

    /// Sign with the sender and each secondary signer over the multi-agent message.
    pub fn sign_multi_agent(
        self,
        sender: &dyn SignerBackend,
        secondary_signers: &[&dyn SignerBackend],
    ) -> Result<SignedTransaction, TransactionError> {
        let addresses: Vec<AccountAddress> = secondary_signers.iter().map(|s| s.address()).collect();
        let message = MultiAgentRawTransaction::new(self.clone(), addresses.clone()).keyed()?;

        let sender_auth = AccountAuthenticator::ed25519(sender.public_key(), sender.sign(&message)?);
        let mut secondary = Vec::with_capacity(secondary_signers.len());
        for signer in secondary_signers {
            secondary.push(AccountAuthenticator::ed25519(signer.public_key(), signer.sign(&message)?));
        }
        debug!(sender = %self.sender, secondary = secondary.len(), "signed multi-agent transaction");
        Ok(SignedTransaction::new(self, Authenticator::multi_agent(sender_auth, addresses, secondary)))
    }
}

impl Serializable for RawTransaction {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        self.sender.serialize(serializer)?;
        serializer.serialize_u64(self.sequence_number);
        self.payload.serialize(serializer)?;
        serializer.serialize_u64(self.max_gas_amount);
        serializer.serialize_u64(self.gas_unit_price);
        serializer.serialize_u64(self.expiration_timestamp_secs);
        serializer.serialize_u8(self.chain_id);
        Ok(())
    }
}

impl Deserializable for RawTransaction {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        Ok(Self {
            sender: AccountAddress::deserialize(deserializer)?,
            sequence_number: deserializer.deserialize_u64()?,
            payload: TransactionPayload::deserialize(deserializer)?,
            max_gas_amount: deserializer.deserialize_u64()?,
            gas_unit_price: deserializer.deserialize_u64()?,
            expiration_timestamp_secs: deserializer.deserialize_u64()?,
            chain_id: deserializer.deserialize_u8()?,
        })
    }
}

/// Raw transaction together with its secondary signer addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiAgentRawTransaction {
    /// Transaction body.
    pub raw: RawTransaction,
    /// Secondary signers, in order.
    pub secondary_signer_addresses: Vec<AccountAddress>,
}

impl MultiAgentRawTransaction {
    /// Only variant of the "raw transaction with data" union.
    pub const MULTI_AGENT: u32 = 0;

    /// Pair a raw transaction with secondary signers.
    pub fn new(raw: RawTransaction, secondary_signer_addresses: Vec<AccountAddress>) -> Self {
        Self { raw, secondary_signer_addresses }
    }

    /// Domain-separated signing message.
    pub fn keyed(&self) -> Result<Vec<u8>, BcsError> {
        Ok(domain_separated(RAW_TRANSACTION_WITH_DATA_SALT, &to_bytes(self)?))
    }
}

impl Serializable for MultiAgentRawTransaction {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_variant_index(Self::MULTI_AGENT);
        self.raw.serialize(serializer)?;
        serializer.serialize_vec(&self.secondary_signer_addresses)
    }
}

impl Deserializable for MultiAgentRawTransaction {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        match deserializer.deserialize_variant_index()? {
            Self::MULTI_AGENT => Ok(Self {
                raw: RawTransaction::deserialize(deserializer)?,
                secondary_signer_addresses: deserializer.deserialize_vec()?,
            }),
            index => Err(BcsError::UnknownVariant { kind: "RawTransactionWithData", index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bcs::from_bytes;
    use crate::core::crypto::hash::domain_separator;
    use crate::core::transaction::payload::EntryFunction;
    use crate::core::transaction::script::Script;

    fn raw(payload: TransactionPayload) -> RawTransaction {
        RawTransaction::new(AccountAddress::ONE, 7, payload, 2000, 100, 1_700_000_000, 4)
    }

    fn entry() -> TransactionPayload {
        EntryFunction::new("0x1::coin".parse().unwrap(), "transfer", vec![], vec![vec![1]])
            .unwrap()
            .into()
    }

    #[test]
    fn field_layout() {
        let tx = raw(TransactionPayload::from(Script::new(vec![], vec![], vec![])));
        let bytes = to_bytes(&tx).unwrap();
        // address, seq, script payload (4), gas, price, expiry, chain
        assert_eq!(bytes.len(), 32 + 8 + 4 + 8 + 8 + 8 + 1);
        assert_eq!(&bytes[32..40], &7u64.to_le_bytes());
        assert_eq!(*bytes.last().unwrap(), 4);
        assert_eq!(from_bytes::<RawTransaction>(&bytes).unwrap(), tx);
    }

    #[test]
    fn keyed_prefix_is_shared() {
        let a = raw(entry()).keyed().unwrap();
        let b = raw(TransactionPayload::from(Script::new(vec![1], vec![], vec![]))).keyed().unwrap();
        assert_ne!(a, b);
        assert_eq!(a[..32], b[..32]);
        assert_eq!(a[..32], domain_separator(RAW_TRANSACTION_SALT));
    }

    #[test]
    fn multi_agent_message_differs() {
        let tx = raw(entry());
        let ma = MultiAgentRawTransaction::new(tx.clone(), vec![AccountAddress::ZERO]);
        let keyed = ma.keyed().unwrap();
        assert_eq!(keyed[..32], domain_separator(RAW_TRANSACTION_WITH_DATA_SALT));
        assert_eq!(keyed[32], 0);
        assert_eq!(&keyed[33..33 + to_bytes(&tx).unwrap().len()], to_bytes(&tx).unwrap().as_slice());
        assert_ne!(keyed, tx.keyed().unwrap());
        assert_eq!(from_bytes::<MultiAgentRawTransaction>(&to_bytes(&ma).unwrap()).unwrap(), ma);
    }

    #[test]
    fn module_bundle_cannot_be_keyed() {
        assert_eq!(
            raw(TransactionPayload::ModuleBundle).keyed(),
            Err(BcsError::Unsupported("module bundle payload"))
        );
    }
}
