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

//! `bcs-sign`: build, sign and verify a transaction described in TOML.
//!
//! Usage: `bcs-sign <tx.toml>`. Prints the signed transaction as hex and
//! its committed hash on stdout.

use anyhow::{bail, Context, Result};
use aptos_bcs::config::TransactionConfig;
use aptos_bcs::core::bcs::to_bytes;
use aptos_bcs::core::security::keystore::{FileSigner, LocalAccount};
use aptos_bcs::monitoring::logging::{self, LogFormat};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    logging::init("info", LogFormat::from_env());

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: bcs-sign <tx.toml>");
    };

    let cfg = TransactionConfig::load(&path).with_context(|| format!("loading {}", path.display()))?;
    let signer = FileSigner::load(&cfg.sender_key)
        .with_context(|| format!("loading key {}", cfg.sender_key.display()))?;

    let account = match cfg.sender_address()? {
        Some(addr) => LocalAccount::with_address(addr, Box::new(signer), cfg.sequence_number),
        None => LocalAccount::new(Box::new(signer), cfg.sequence_number),
    };

    let raw = cfg.to_raw_transaction(account.address())?;
    let signed = account.sign_transaction(raw)?.into_verified()?;
    let hash = signed.committed_hash()?;

    info!(
        sender = %account.address(),
        seq = signed.raw().sequence_number,
        payload = signed.raw().payload.variant(),
        "transaction signed"
    );

    println!("{}", hex::encode(to_bytes(&signed)?));
    println!("0x{}", hex::encode(hash));
    Ok(())
}
