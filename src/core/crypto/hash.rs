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

//! SHA3-256 and domain separators.

use sha3::{Digest, Sha3_256};

/// Domain tag for single-signer raw transactions.
pub const RAW_TRANSACTION_SALT: &[u8] = b"APTOS::RawTransaction";
/// Domain tag for raw transactions carrying secondary signers.
pub const RAW_TRANSACTION_WITH_DATA_SALT: &[u8] = b"APTOS::RawTransactionWithData";
/// Domain tag for the committed transaction hash.
pub const TRANSACTION_SALT: &[u8] = b"APTOS::Transaction";

/// SHA3-256 digest.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// `SHA3-256(salt)`, the 32-byte prefix placed before signed bytes.
pub fn domain_separator(salt: &[u8]) -> [u8; 32] {
    sha3_256(salt)
}

/// `domain_separator(salt) || body`.
pub fn domain_separated(salt: &[u8], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(32 + body.len());
    out.extend_from_slice(&domain_separator(salt));
    out.extend_from_slice(body);
    out
}
