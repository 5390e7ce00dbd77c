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

use aptos_bcs::core::crypto::{CryptoError, Ed25519PrivateKey, Ed25519PublicKey, MultiPublicKey, MultiSignature};
use aptos_bcs::core::types::{AccountAddress, AuthScheme};

fn pks(n: usize) -> Vec<Ed25519PublicKey> {
    (0..n)
        .map(|i| Ed25519PrivateKey::from_seed(&[i as u8 + 1; 32]).unwrap().public_key())
        .collect()
}

#[test]
fn multisig_bounds() {
    assert_eq!(MultiPublicKey::new(pks(1), 1), Err(CryptoError::KeyCount(1)));
    assert_eq!(MultiPublicKey::new(pks(33), 2), Err(CryptoError::KeyCount(33)));
    assert!(matches!(MultiPublicKey::new(pks(3), 0), Err(CryptoError::Threshold { .. })));
    assert!(matches!(MultiPublicKey::new(pks(3), 3), Err(CryptoError::Threshold { .. })));
    assert!(MultiPublicKey::new(pks(3), 2).is_ok());
    assert!(MultiPublicKey::new(pks(32), 31).is_ok());
}

#[test]
fn signer_outside_set_rejected() {
    let sks: Vec<Ed25519PrivateKey> = (1..=4u8).map(|b| Ed25519PrivateKey::from_seed(&[b; 32]).unwrap()).collect();
    let mpk = MultiPublicKey::new(sks[..3].iter().map(|k| k.public_key()).collect(), 2).unwrap();
    let outsider = &sks[3];
    assert_eq!(
        MultiSignature::new(&mpk, vec![(outsider.public_key(), outsider.sign(b"x"))]),
        Err(CryptoError::UnknownSigner)
    );
}

#[test]
fn last_key_uses_lowest_bit() {
    let sks: Vec<Ed25519PrivateKey> = (1..=32u8).map(|b| Ed25519PrivateKey::from_seed(&[b; 32]).unwrap()).collect();
    let mpk = MultiPublicKey::new(sks.iter().map(|k| k.public_key()).collect(), 1).unwrap();
    let sig = MultiSignature::new(&mpk, vec![(sks[31].public_key(), sks[31].sign(b"m"))]).unwrap();
    assert_eq!(sig.bitmap(), [0, 0, 0, 1]);
    assert!(mpk.verify(b"m", &sig));
}

#[test]
fn address_derivation_known_answer() {
    let pk = Ed25519PublicKey::from_hex("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a").unwrap();
    let expected = "0x63c5215e87770d17b9f4cd47c777e322f4eb152cfd2054c1080fd9d57c48913b";
    assert_eq!(pk.to_address().to_hex(), expected);
    assert_eq!(
        AccountAddress::from_key_material(pk.as_bytes(), AuthScheme::Ed25519),
        expected.parse::<AccountAddress>().unwrap()
    );
    assert_ne!(
        AccountAddress::from_key_material(pk.as_bytes(), AuthScheme::MultiEd25519),
        pk.to_address()
    );
}
