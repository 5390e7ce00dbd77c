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

use aptos_bcs::core::bcs::{from_bytes, to_bytes, Sequence};
use aptos_bcs::core::crypto::hash::{domain_separator, RAW_TRANSACTION_SALT};
use aptos_bcs::core::crypto::{Ed25519PrivateKey, Ed25519Signature, MultiPublicKey};
use aptos_bcs::core::transaction::{
    Authenticator, EntryFunction, RawTransaction, SignedTransaction, TransactionPayload,
};
use aptos_bcs::core::types::{AccountAddress, Value};

const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

fn transfer(to: AccountAddress, amount: u64) -> TransactionPayload {
    let args = Sequence::new(vec![Value::AccountAddress(to), Value::U64(amount)]);
    EntryFunction::natural(
        "0x1::coin".parse().unwrap(),
        "transfer",
        vec!["0x1::aptos_coin::AptosCoin".parse().unwrap()],
        &args,
    )
    .unwrap()
    .into()
}

fn raw(sender: AccountAddress, payload: TransactionPayload) -> RawTransaction {
    RawTransaction::new(sender, 11, payload, 2_000, 100, 1_700_000_000, 4)
}

#[test]
fn fixed_message_sign_and_verify() {
    let sk = Ed25519PrivateKey::from_hex(SEED).unwrap();
    let other = Ed25519PrivateKey::from_seed(&[42; 32]).unwrap();
    let msg = b"aptos bcs signing";

    let sig = sk.sign(msg);
    assert!(sk.public_key().verify(msg, &sig));
    assert!(!other.public_key().verify(msg, &sig));

    for bit in 0..(64 * 8) {
        let mut bytes = *sig.as_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let flipped = Ed25519Signature::new(bytes);
        assert!(!sk.public_key().verify(msg, &flipped), "bit {bit} still verifies");
    }
}

#[test]
fn signed_transaction_end_to_end() {
    let sk = Ed25519PrivateKey::from_hex(SEED).unwrap();
    let tx = raw(sk.to_address(), transfer(AccountAddress::from_hex("0x2").unwrap(), 1000));
    let signed = tx.clone().sign(&sk).unwrap();
    assert_eq!(signed.verify(), Ok(true));

    let bytes = to_bytes(&signed).unwrap();
    let decoded = from_bytes::<SignedTransaction>(&bytes).unwrap();
    assert_eq!(decoded, signed);
    assert_eq!(decoded.verify(), Ok(true));
    assert_eq!(decoded.committed_hash().unwrap(), signed.committed_hash().unwrap());

    // authenticator with a different key over the same signature
    let other = Ed25519PrivateKey::from_seed(&[42; 32]).unwrap();
    let Authenticator::Ed25519 { signature, .. } = signed.authenticator().clone() else {
        panic!("expected ed25519 authenticator");
    };
    let forged = SignedTransaction::new(tx, Authenticator::ed25519(other.public_key(), signature));
    assert_eq!(forged.verify(), Ok(false));
}

#[test]
fn flipped_byte_in_encoded_signature_fails() {
    let sk = Ed25519PrivateKey::from_hex(SEED).unwrap();
    let signed = raw(sk.to_address(), transfer(AccountAddress::ONE, 5)).sign(&sk).unwrap();
    let mut bytes = to_bytes(&signed).unwrap();
    // the signature is the final 64 bytes
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    let tampered = from_bytes::<SignedTransaction>(&bytes).unwrap();
    assert_eq!(tampered.verify(), Ok(false));
}

#[test]
fn keyed_domain_separation() {
    let a = raw(AccountAddress::ONE, transfer(AccountAddress::ONE, 1)).keyed().unwrap();
    let b = raw(AccountAddress::ONE, transfer(AccountAddress::ONE, 2)).keyed().unwrap();
    assert_ne!(a, b);
    assert_eq!(a[..32], b[..32]);
    assert_eq!(
        hex::encode(&a[..32]),
        "b5e97db07fa0bd0e5598aa3643a9bc6f6693bddc1a9fec9e674a461eaa00b193"
    );
    assert_eq!(a[..32], domain_separator(RAW_TRANSACTION_SALT));
}

#[test]
fn multi_agent_round_trip() {
    let sender = Ed25519PrivateKey::from_seed(&[1; 32]).unwrap();
    let second = Ed25519PrivateKey::from_seed(&[2; 32]).unwrap();
    let third = Ed25519PrivateKey::from_seed(&[3; 32]).unwrap();
    let signed = raw(sender.to_address(), transfer(AccountAddress::ONE, 9))
        .sign_multi_agent(&sender, &[&second, &third])
        .unwrap();
    assert_eq!(signed.verify(), Ok(true));

    let decoded = from_bytes::<SignedTransaction>(&to_bytes(&signed).unwrap()).unwrap();
    assert_eq!(decoded.verify(), Ok(true));
    assert_eq!(
        decoded.authenticator().secondary_signer_addresses(),
        &[second.to_address(), third.to_address()]
    );

    // swapping secondary addresses changes the signed message
    let (raw_tx, auth) = decoded.into_parts();
    let Authenticator::MultiAgent { sender: s, mut secondary_signer_addresses, secondary_signers } = auth else {
        panic!("expected multi-agent authenticator");
    };
    secondary_signer_addresses.swap(0, 1);
    let swapped = SignedTransaction::new(
        raw_tx,
        Authenticator::multi_agent(s, secondary_signer_addresses, secondary_signers),
    );
    assert_eq!(swapped.verify(), Ok(false));
}

#[test]
fn multi_ed25519_sender() {
    let sks: Vec<Ed25519PrivateKey> = (1..=3u8).map(|b| Ed25519PrivateKey::from_seed(&[b; 32]).unwrap()).collect();
    let mpk = MultiPublicKey::new(sks.iter().map(|k| k.public_key()).collect(), 2).unwrap();
    let tx = raw(mpk.to_address(), transfer(AccountAddress::ONE, 3));

    let signed = tx.clone().sign_multi_ed25519(&mpk, &[&sks[2], &sks[0]]).unwrap();
    assert_eq!(signed.verify(), Ok(true));
    let decoded = from_bytes::<SignedTransaction>(&to_bytes(&signed).unwrap()).unwrap();
    assert_eq!(decoded.verify(), Ok(true));

    let short = tx.sign_multi_ed25519(&mpk, &[&sks[1]]).unwrap();
    assert_eq!(short.verify(), Ok(false));
}
