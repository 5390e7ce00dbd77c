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

use anyhow::Result;
use aptos_bcs::core::security::keystore::{FileSigner, SignerBackend};
use aptos_bcs::monitoring::logging::{self, LogFormat};
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init("info", LogFormat::from_env());

    let key_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data/sender.key".to_string()));
    let signer = FileSigner::create(&key_path)?;

    println!("public_key {}", signer.public_key());
    println!("address    {}", signer.address());
    Ok(())
}
