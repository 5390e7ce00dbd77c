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

use aptos_bcs::core::bcs::{from_bytes, to_bytes, Serializer};
use primitive_types::U256;

#[test]
fn widths_zero_mid_max() {
    for v in [0u8, 128, u8::MAX] {
        assert_eq!(from_bytes::<u8>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
    for v in [0u16, 12_345, u16::MAX] {
        assert_eq!(from_bytes::<u16>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
    for v in [0u32, 57_615_782, u32::MAX] {
        assert_eq!(from_bytes::<u32>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
    for v in [0u64, 9_432_012_321_182, u64::MAX] {
        assert_eq!(from_bytes::<u64>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
    for v in [0u128, 1_111_111_111_111_111_111_111, u128::MAX] {
        assert_eq!(from_bytes::<u128>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
    for v in [U256::zero(), U256::from(u128::MAX) + U256::one(), U256::MAX] {
        assert_eq!(from_bytes::<U256>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
}

#[test]
fn uleb128_1160() {
    let mut s = Serializer::new();
    s.serialize_uleb128(1160);
    assert_eq!(s.into_bytes(), vec![136, 9]);
}

#[test]
fn bool_wire_values() {
    assert_eq!(to_bytes(&true).unwrap(), vec![1]);
    assert_eq!(to_bytes(&false).unwrap(), vec![0]);
}

#[test]
fn potato_prefix_is_utf8_length() {
    let s = "potato UTF8: 🥔";
    let bytes = to_bytes(s).unwrap();
    assert_eq!(bytes[0], 17);
    assert_eq!(bytes.len(), 18);
    assert_eq!(from_bytes::<String>(&bytes).unwrap(), s);
}

#[test]
fn string_vector_layout() {
    let v: Vec<String> = ["a", "abc", "def", "ghi"].iter().map(|s| s.to_string()).collect();
    assert_eq!(
        to_bytes(&v).unwrap(),
        vec![4, 1, 97, 3, 97, 98, 99, 3, 100, 101, 102, 3, 103, 104, 105]
    );
    assert_eq!(from_bytes::<Vec<String>>(&to_bytes(&v).unwrap()).unwrap(), v);
}
