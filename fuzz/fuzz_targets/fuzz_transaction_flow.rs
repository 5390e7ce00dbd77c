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

#![no_main]
#![forbid(unsafe_code)]

use arbitrary::Arbitrary;
use aptos_bcs::core::bcs::{from_bytes, to_bytes};
use aptos_bcs::core::crypto::Ed25519PrivateKey;
use aptos_bcs::core::transaction::{EntryFunction, ModuleId, RawTransaction, SignedTransaction};
use aptos_bcs::core::types::AccountAddress;
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
struct Input {
    sender_seed: [u8; 32],
    secondary_seed: Option<[u8; 32]>,
    sequence_number: u64,
    max_gas_amount: u64,
    gas_unit_price: u64,
    expiration_timestamp_secs: u64,
    chain_id: u8,
    args: Vec<Vec<u8>>,
    flip: Option<u32>,
}

fuzz_target!(|inp: Input| {
    let Ok(sender) = Ed25519PrivateKey::from_seed(&inp.sender_seed) else { return };
    let Ok(module) = ModuleId::new(AccountAddress::ONE, "coin") else { return };
    let Ok(function) = EntryFunction::new(module, "transfer", vec![], inp.args) else { return };

    let raw = RawTransaction::new(
        sender.to_address(),
        inp.sequence_number,
        function.into(),
        inp.max_gas_amount,
        inp.gas_unit_price,
        inp.expiration_timestamp_secs,
        inp.chain_id,
    );
    let signed = match inp.secondary_seed.map(|s| Ed25519PrivateKey::from_seed(&s)) {
        Some(Ok(secondary)) => raw.sign_multi_agent(&sender, &[&secondary]),
        Some(Err(_)) => return,
        None => raw.sign(&sender),
    }
    .expect("fresh transaction signs");

    let mut bytes = to_bytes(&signed).expect("signed transaction encodes");
    let back = from_bytes::<SignedTransaction>(&bytes).expect("signed transaction decodes");
    assert_eq!(back, signed);
    assert_eq!(back.verify(), Ok(true));

    // Any single-bit change must either fail to decode or fail to verify.
    if let Some(bit) = inp.flip {
        let bit = bit as usize % (bytes.len() * 8);
        bytes[bit / 8] ^= 1 << (bit % 8);
        if let Ok(tampered) = from_bytes::<SignedTransaction>(&bytes) {
            assert_ne!(tampered.verify(), Ok(true));
        }
    }
});
