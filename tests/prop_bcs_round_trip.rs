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

use aptos_bcs::core::bcs::{from_bytes, to_bytes, BcsError, Deserializer, Sequence, Serializer};
use aptos_bcs::core::types::{AccountAddress, Value, ValueKind};
use primitive_types::U256;
use proptest::prelude::*;

fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(|b| U256::from_little_endian(&b))
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<u8>().prop_map(Value::U8),
        any::<u16>().prop_map(Value::U16),
        any::<u32>().prop_map(Value::U32),
        any::<u64>().prop_map(Value::U64),
        any::<u128>().prop_map(Value::U128),
        arb_u256().prop_map(Value::U256),
        ".{0,24}".prop_map(Value::BString),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Bytes),
        any::<[u8; 32]>().prop_map(|b| Value::AccountAddress(AccountAddress::new(b))),
    ]
}

proptest! {
    #[test]
    fn prop_integers_round_trip(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(),
                                d in any::<u64>(), e in any::<u128>(), f in arb_u256()) {
        prop_assert_eq!(from_bytes::<u8>(&to_bytes(&a).unwrap()).unwrap(), a);
        prop_assert_eq!(from_bytes::<u16>(&to_bytes(&b).unwrap()).unwrap(), b);
        prop_assert_eq!(from_bytes::<u32>(&to_bytes(&c).unwrap()).unwrap(), c);
        prop_assert_eq!(from_bytes::<u64>(&to_bytes(&d).unwrap()).unwrap(), d);
        prop_assert_eq!(from_bytes::<u128>(&to_bytes(&e).unwrap()).unwrap(), e);
        prop_assert_eq!(from_bytes::<U256>(&to_bytes(&f).unwrap()).unwrap(), f);
    }

    #[test]
    fn prop_uleb128_canonical(v in any::<u32>()) {
        let mut s = Serializer::new();
        s.serialize_uleb128(v);
        let bytes = s.into_bytes();
        prop_assert!(bytes.len() <= 5);
        // only the final byte lacks the continuation bit
        prop_assert_eq!(bytes.last().copied().unwrap_or(0) & 0x80, 0);
        let mut d = Deserializer::new(&bytes);
        prop_assert_eq!(d.deserialize_uleb128().unwrap(), v);
        prop_assert!(d.finish().is_ok());
    }

    #[test]
    fn prop_strings_prefix_is_byte_length(s in ".{0,64}") {
        let bytes = to_bytes(s.as_str()).unwrap();
        let mut d = Deserializer::new(&bytes);
        prop_assert_eq!(d.deserialize_uleb128().unwrap() as usize, s.len());
        prop_assert_eq!(from_bytes::<String>(&bytes).unwrap(), s);
    }

    #[test]
    fn prop_value_sequence_round_trip(values in prop::collection::vec(arb_value(), 0..12)) {
        let kinds: Vec<ValueKind> = values.iter().map(Value::kind).collect();
        let seq = Sequence::new(values);
        let bytes = to_bytes(&seq).unwrap();
        let mut d = Deserializer::new(&bytes);
        prop_assert_eq!(Value::deserialize_sequence(&mut d, &kinds).unwrap(), seq);
        prop_assert!(d.finish().is_ok());
    }

    #[test]
    fn prop_truncation_is_underflow(v in any::<u64>(), cut in 0usize..8) {
        let bytes = to_bytes(&v).unwrap();
        let err = from_bytes::<u64>(&bytes[..cut]).unwrap_err();
        prop_assert_eq!(err, BcsError::Underflow { needed: 8, remaining: cut });
    }

    #[test]
    fn prop_bool_rejects_other_bytes(b in 2u8..=255) {
        prop_assert_eq!(from_bytes::<bool>(&[b]), Err(BcsError::InvalidBool(b)));
    }
}
