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

//! Transaction object model.
//!
//! Unsigned (`RawTransaction`) -> keyed (domain-separated signing message)
//! -> signed (`SignedTransaction`) -> verified.

pub mod authenticator;
pub mod module_id;
pub mod payload;
pub mod raw;
pub mod script;
pub mod signed;

pub use authenticator::{AccountAuthenticator, Authenticator};
pub use module_id::ModuleId;
pub use payload::{EntryFunction, TransactionPayload};
pub use raw::{MultiAgentRawTransaction, RawTransaction};
pub use script::{Script, ScriptArgument};
pub use signed::SignedTransaction;

use crate::core::bcs::BcsError;
use crate::core::crypto::CryptoError;
use crate::core::security::keystore::KeystoreError;
use thiserror::Error;

/// Building or signing a transaction failed.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Encoding failed.
    #[error("codec: {0}")]
    Codec(#[from] BcsError),
    /// Key or signature validation failed.
    #[error("crypto: {0}")]
    Crypto(#[from] CryptoError),
    /// The signer backend failed.
    #[error("keystore: {0}")]
    Keystore(#[from] KeystoreError),
    /// The authenticator does not cover the transaction.
    #[error("signature verification failed")]
    VerificationFailed,
}
