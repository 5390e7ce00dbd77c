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

//! Transaction and per-account authenticators.
//!
//! | union | 0 | 1 | 2 |
//! |---|---|---|---|
//! | `Authenticator` | Ed25519 | MultiEd25519 | MultiAgent |
//! | `AccountAuthenticator` | Ed25519 | MultiEd25519 | - |

use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use crate::core::crypto::{Ed25519PublicKey, Ed25519Signature, MultiPublicKey, MultiSignature};
use crate::core::types::AccountAddress;

/// Proof for one account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountAuthenticator {
    /// Single key.
    Ed25519 {
        /// Signing key.
        public_key: Ed25519PublicKey,
        /// Signature.
        signature: Ed25519Signature,
    },
    /// Threshold key set.
    MultiEd25519 {
        /// Key set.
        public_key: MultiPublicKey,
        /// Partial signatures and bitmap.
        signature: MultiSignature,
    },
}

impl AccountAuthenticator {
    /// Ed25519 discriminant.
    pub const ED25519: u32 = 0;
    /// MultiEd25519 discriminant.
    pub const MULTI_ED25519: u32 = 1;

    /// Single-key proof.
    pub fn ed25519(public_key: Ed25519PublicKey, signature: Ed25519Signature) -> Self {
        Self::Ed25519 { public_key, signature }
    }

    /// Threshold proof.
    pub fn multi_ed25519(public_key: MultiPublicKey, signature: MultiSignature) -> Self {
        Self::MultiEd25519 { public_key, signature }
    }

    /// Wire discriminant.
    pub fn variant(&self) -> u32 {
        match self {
            Self::Ed25519 { .. } => Self::ED25519,
            Self::MultiEd25519 { .. } => Self::MULTI_ED25519,
        }
    }

    /// Check the proof over `message`.
    pub fn verify(&self, message: &[u8]) -> bool {
        match self {
            Self::Ed25519 { public_key, signature } => public_key.verify(message, signature),
            Self::MultiEd25519 { public_key, signature } => public_key.verify(message, signature),
        }
    }

    /// Address derived from the key material.
    pub fn derived_address(&self) -> AccountAddress {
        match self {
            Self::Ed25519 { public_key, .. } => public_key.to_address(),
            Self::MultiEd25519 { public_key, .. } => public_key.to_address(),
        }
    }
}

impl Serializable for AccountAuthenticator {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_variant_index(self.variant());
        match self {
            Self::Ed25519 { public_key, signature } => {
                public_key.serialize(serializer)?;
                signature.serialize(serializer)
            }
            Self::MultiEd25519 { public_key, signature } => {
                public_key.serialize(serializer)?;
                signature.serialize(serializer)
            }
        }
    }
}

impl Deserializable for AccountAuthenticator {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        match deserializer.deserialize_variant_index()? {
            Self::ED25519 => Ok(Self::Ed25519 {
                public_key: Ed25519PublicKey::deserialize(deserializer)?,
                signature: Ed25519Signature::deserialize(deserializer)?,
            }),
            Self::MULTI_ED25519 => Ok(Self::MultiEd25519 {
                public_key: MultiPublicKey::deserialize(deserializer)?,
                signature: MultiSignature::deserialize(deserializer)?,
            }),
            index => Err(BcsError::UnknownVariant { kind: "AccountAuthenticator", index }),
        }
    }
}

/// Proof attached to a signed transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authenticator {
    /// Single-key sender.
    Ed25519 {
        /// Signing key.
        public_key: Ed25519PublicKey,
        /// Signature.
        signature: Ed25519Signature,
    },
    /// Threshold sender.
    MultiEd25519 {
        /// Key set.
        public_key: MultiPublicKey,
        /// Partial signatures and bitmap.
        signature: MultiSignature,
    },
    /// Sender plus secondary signers, all over the same message.
    MultiAgent {
        /// Sender proof.
        sender: AccountAuthenticator,
        /// Secondary signer addresses, in order.
        secondary_signer_addresses: Vec<AccountAddress>,
        /// One proof per secondary address.
        secondary_signers: Vec<AccountAuthenticator>,
    },
}

impl Authenticator {
    /// Ed25519 discriminant.
    pub const ED25519: u32 = 0;
    /// MultiEd25519 discriminant.
    pub const MULTI_ED25519: u32 = 1;
    /// MultiAgent discriminant.
    pub const MULTI_AGENT: u32 = 2;

    /// Single-key proof.
    pub fn ed25519(public_key: Ed25519PublicKey, signature: Ed25519Signature) -> Self {
        Self::Ed25519 { public_key, signature }
    }

    /// Threshold proof.
    pub fn multi_ed25519(public_key: MultiPublicKey, signature: MultiSignature) -> Self {
        Self::MultiEd25519 { public_key, signature }
    }

    /// Multi-agent proof.
    pub fn multi_agent(
        sender: AccountAuthenticator,
        secondary_signer_addresses: Vec<AccountAddress>,
        secondary_signers: Vec<AccountAuthenticator>,
    ) -> Self {
        Self::MultiAgent { sender, secondary_signer_addresses, secondary_signers }
    }

    /// Wire discriminant.
    pub fn variant(&self) -> u32 {
        match self {
            Self::Ed25519 { .. } => Self::ED25519,
            Self::MultiEd25519 { .. } => Self::MULTI_ED25519,
            Self::MultiAgent { .. } => Self::MULTI_AGENT,
        }
    }

    /// The sender's proof as an account authenticator.
    pub fn sender_authenticator(&self) -> AccountAuthenticator {
        match self {
            Self::Ed25519 { public_key, signature } => AccountAuthenticator::ed25519(*public_key, *signature),
            Self::MultiEd25519 { public_key, signature } => {
                AccountAuthenticator::multi_ed25519(public_key.clone(), signature.clone())
            }
            Self::MultiAgent { sender, .. } => sender.clone(),
        }
    }

    /// Secondary signer addresses; empty unless multi-agent.
    pub fn secondary_signer_addresses(&self) -> &[AccountAddress] {
        match self {
            Self::MultiAgent { secondary_signer_addresses, .. } => secondary_signer_addresses,
            _ => &[],
        }
    }

    /// Check every proof over `message`. Stops at the first failure.
    pub fn verify(&self, message: &[u8]) -> bool {
        match self {
            Self::Ed25519 { public_key, signature } => public_key.verify(message, signature),
            Self::MultiEd25519 { public_key, signature } => public_key.verify(message, signature),
            Self::MultiAgent { sender, secondary_signer_addresses, secondary_signers } => {
                secondary_signer_addresses.len() == secondary_signers.len()
                    && sender.verify(message)
                    && secondary_signers.iter().all(|s| s.verify(message))
            }
        }
    }
}

impl Serializable for Authenticator {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serializer.serialize_variant_index(self.variant());
        match self {
            Self::Ed25519 { public_key, signature } => {
                public_key.serialize(serializer)?;
                signature.serialize(serializer)
            }
            Self::MultiEd25519 { public_key, signature } => {
                public_key.serialize(serializer)?;
                signature.serialize(serializer)
            }
            Self::MultiAgent { sender, secondary_signer_addresses, secondary_signers } => {
                sender.serialize(serializer)?;
                serializer.serialize_vec(secondary_signer_addresses)?;
                serializer.serialize_vec(secondary_signers)
            }
        }
    }
}

impl Deserializable for Authenticator {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        match deserializer.deserialize_variant_index()? {
            Self::ED25519 => Ok(Self::Ed25519 {
                public_key: Ed25519PublicKey::deserialize(deserializer)?,
                signature: Ed25519Signature::deserialize(deserializer)?,
            }),
            Self::MULTI_ED25519 => Ok(Self::MultiEd25519 {
                public_key: MultiPublicKey::deserialize(deserializer)?,
                signature: MultiSignature::deserialize(deserializer)?,
            }),
            Self::MULTI_AGENT => Ok(Self::MultiAgent {
                sender: AccountAuthenticator::deserialize(deserializer)?,
                secondary_signer_addresses: deserializer.deserialize_vec()?,
                secondary_signers: deserializer.deserialize_vec()?,
            }),
            index => Err(BcsError::UnknownVariant { kind: "Authenticator", index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bcs::{from_bytes, to_bytes};
    use crate::core::crypto::Ed25519PrivateKey;

    fn key(b: u8) -> Ed25519PrivateKey {
        Ed25519PrivateKey::from_seed(&[b; 32]).unwrap()
    }

    #[test]
    fn ed25519_layout() {
        let sk = key(1);
        let auth = Authenticator::ed25519(sk.public_key(), sk.sign(b"m"));
        let bytes = to_bytes(&auth).unwrap();
        // variant, pk len, pk, sig len, sig
        assert_eq!(bytes.len(), 1 + 1 + 32 + 1 + 64);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 32);
        assert_eq!(bytes[34], 64);
        assert_eq!(from_bytes::<Authenticator>(&bytes).unwrap(), auth);
    }

    #[test]
    fn multi_agent_requires_every_signer() {
        let (a, b, c) = (key(1), key(2), key(3));
        let msg = b"payload";
        let good = Authenticator::multi_agent(
            AccountAuthenticator::ed25519(a.public_key(), a.sign(msg)),
            vec![b.to_address(), c.to_address()],
            vec![
                AccountAuthenticator::ed25519(b.public_key(), b.sign(msg)),
                AccountAuthenticator::ed25519(c.public_key(), c.sign(msg)),
            ],
        );
        assert!(good.verify(msg));
        assert_eq!(to_bytes(&good).unwrap()[0], 2);
        assert_eq!(good.secondary_signer_addresses().len(), 2);
        let bytes = to_bytes(&good).unwrap();
        assert_eq!(from_bytes::<Authenticator>(&bytes).unwrap(), good);

        let bad = Authenticator::multi_agent(
            AccountAuthenticator::ed25519(a.public_key(), a.sign(msg)),
            vec![b.to_address(), c.to_address()],
            vec![
                AccountAuthenticator::ed25519(b.public_key(), b.sign(msg)),
                AccountAuthenticator::ed25519(c.public_key(), c.sign(b"other")),
            ],
        );
        assert!(!bad.verify(msg));

        let short = Authenticator::multi_agent(
            AccountAuthenticator::ed25519(a.public_key(), a.sign(msg)),
            vec![b.to_address(), c.to_address()],
            vec![AccountAuthenticator::ed25519(b.public_key(), b.sign(msg))],
        );
        assert!(!short.verify(msg));
    }

    #[test]
    fn multi_ed25519_round_trip() {
        let sks = [key(1), key(2), key(3)];
        let mpk = MultiPublicKey::new(sks.iter().map(|k| k.public_key()).collect(), 2).unwrap();
        let sig = MultiSignature::new(
            &mpk,
            vec![(sks[0].public_key(), sks[0].sign(b"m")), (sks[1].public_key(), sks[1].sign(b"m"))],
        )
        .unwrap();
        let auth = Authenticator::multi_ed25519(mpk.clone(), sig);
        assert!(auth.verify(b"m"));
        let bytes = to_bytes(&auth).unwrap();
        assert_eq!(bytes[0], 1);
        // blob prefix for 3 * 32 + 1 bytes
        assert_eq!(bytes[1], 97);
        assert_eq!(from_bytes::<Authenticator>(&bytes).unwrap(), auth);
        assert_eq!(auth.sender_authenticator().derived_address(), mpk.to_address());
    }

    #[test]
    fn unknown_variant() {
        assert_eq!(
            from_bytes::<Authenticator>(&[3]),
            Err(BcsError::UnknownVariant { kind: "Authenticator", index: 3 })
        );
        assert_eq!(
            from_bytes::<AccountAuthenticator>(&[2]),
            Err(BcsError::UnknownVariant { kind: "AccountAuthenticator", index: 2 })
        );
    }
}
