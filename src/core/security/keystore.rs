#![forbid(unsafe_code)]
#![deny(missing_docs)]
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


//! Keystore: signer backends and local accounts.
//!
//! ## Key file format
//! One line of lowercase hex: the 32-byte Ed25519 seed. The 64-byte
//! `seed || public_key` form is accepted on load.
//!
//! ## Hardening
//! - **Atomic writes** for private key material (temp file, fsync, rename).
//! - **0600 permissions** on unix (best-effort).
//! - Seeds are zeroized after use.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::info;
use zeroize::Zeroizing;

use crate::core::crypto::{CryptoError, Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature};
use crate::core::transaction::{RawTransaction, SignedTransaction, TransactionError};
use crate::core::types::AccountAddress;

/// Keystore errors.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// Filesystem failure.
    #[error("io: {0}")]
    Io(String),
    /// Key file content is not a valid key.
    #[error("invalid key encoding")]
    InvalidKey,
    /// Key file already exists.
    #[error("key file exists: {0}")]
    Exists(String),
    /// Key generation failed.
    #[error("crypto: {0}")]
    Crypto(#[from] CryptoError),
    /// An external backend refused to sign.
    #[error("backend: {0}")]
    Backend(String),
}

/// Signer backend abstraction (HSM compatible).
pub trait SignerBackend: Send + Sync {
    /// Ed25519 public key.
    fn public_key(&self) -> Ed25519PublicKey;
    /// Sign message bytes.
    fn sign(&self, msg: &[u8]) -> Result<Ed25519Signature, KeystoreError>;
    /// Account the key signs for. Defaults to the key's derived address.
    fn address(&self) -> AccountAddress {
        self.public_key().to_address()
    }
}

fn set_private_perms_best_effort(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    #[cfg(not(unix))]
    let _ = path;
}

/// Atomic write to disk (best-effort fsync, then rename).
fn atomic_write_private(path: &Path, bytes: &[u8]) -> Result<(), KeystoreError> {
    let io = |e: std::io::Error| KeystoreError::Io(format!("{}: {e}", path.display()));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io)?;
        }
    }

    let mut tmp = path.to_path_buf();
    tmp.set_extension("tmp");

    {
        let mut f = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&tmp)
            .map_err(io)?;
        set_private_perms_best_effort(&tmp);
        f.write_all(bytes).map_err(io)?;
        let _ = f.sync_all();
    }

    fs::rename(&tmp, path).map_err(io)?;
    set_private_perms_best_effort(path);
    Ok(())
}

/// File-backed Ed25519 signer.
#[derive(Debug)]
pub struct FileSigner {
    key: Ed25519PrivateKey,
    path: PathBuf,
}

impl FileSigner {
    /// Load an existing key file.
    pub fn load(path: &Path) -> Result<Self, KeystoreError> {
        let text = Zeroizing::new(
            fs::read_to_string(path).map_err(|e| KeystoreError::Io(format!("{}: {e}", path.display())))?,
        );
        let key = Ed25519PrivateKey::from_hex(text.trim()).map_err(|_| KeystoreError::InvalidKey)?;
        Ok(Self { key, path: path.to_path_buf() })
    }

    /// Generate a key and write it to a new file.
    pub fn create(path: &Path) -> Result<Self, KeystoreError> {
        if path.exists() {
            return Err(KeystoreError::Exists(path.display().to_string()));
        }
        let key = Ed25519PrivateKey::generate()?;
        let mut line = Zeroizing::new(hex::encode(key.to_seed().as_slice()));
        line.push('\n');
        atomic_write_private(path, line.as_bytes())?;
        info!(path = %path.display(), address = %key.to_address(), "created key file");
        Ok(Self { key, path: path.to_path_buf() })
    }

    /// Load the key at `path`, creating it first if missing.
    pub fn load_or_create(path: &Path) -> Result<Self, KeystoreError> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::create(path)
        }
    }

    /// Key file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SignerBackend for FileSigner {
    fn public_key(&self) -> Ed25519PublicKey {
        self.key.public_key()
    }

    fn sign(&self, msg: &[u8]) -> Result<Ed25519Signature, KeystoreError> {
        Ok(self.key.sign(msg))
    }
}

/// An account address paired with the signer that controls it.
pub struct LocalAccount {
    address: AccountAddress,
    signer: Box<dyn SignerBackend>,
    sequence_number: u64,
}

impl LocalAccount {
    /// Account at the signer's derived address.
    pub fn new(signer: Box<dyn SignerBackend>, sequence_number: u64) -> Self {
        let address = signer.address();
        Self { address, signer, sequence_number }
    }

    /// Account whose key has been rotated away from the derived address.
    pub fn with_address(address: AccountAddress, signer: Box<dyn SignerBackend>, sequence_number: u64) -> Self {
        Self { address, signer, sequence_number }
    }

    /// Account address.
    pub fn address(&self) -> AccountAddress {
        self.address
    }

    /// Next sequence number to use.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Advance after a transaction is built.
    pub fn increment_sequence_number(&mut self) -> u64 {
        let current = self.sequence_number;
        self.sequence_number = self.sequence_number.saturating_add(1);
        current
    }

    /// Sign as the only signer.
    pub fn sign_transaction(&self, raw: RawTransaction) -> Result<SignedTransaction, TransactionError> {
        raw.sign(self)
    }

    /// Sign as sender with secondary signers.
    pub fn sign_multi_agent_transaction(
        &self,
        raw: RawTransaction,
        secondary_signers: &[&dyn SignerBackend],
    ) -> Result<SignedTransaction, TransactionError> {
        raw.sign_multi_agent(self, secondary_signers)
    }
}

impl SignerBackend for LocalAccount {
    fn public_key(&self) -> Ed25519PublicKey {
        self.signer.public_key()
    }

    fn sign(&self, msg: &[u8]) -> Result<Ed25519Signature, KeystoreError> {
        self.signer.sign(msg)
    }

    fn address(&self) -> AccountAddress {
        self.address
    }
}

impl std::fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAccount")
            .field("address", &self.address)
            .field("public_key", &self.signer.public_key())
            .field("sequence_number", &self.sequence_number)
            .finish()
    }
}
