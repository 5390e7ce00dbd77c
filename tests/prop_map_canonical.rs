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

use aptos_bcs::core::bcs::{from_bytes, to_bytes, BcsMap};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn three_permutations_encode_identically() {
    let entries = [("gamma", 3u64), ("alpha", 1u64), ("beta", 2u64)];
    let orders = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    let encodings: Vec<Vec<u8>> = orders
        .iter()
        .map(|order| {
            let mut m = BcsMap::new();
            for &i in order {
                m.insert(entries[i].0, entries[i].1).unwrap();
            }
            to_bytes(&m).unwrap()
        })
        .collect();
    assert_eq!(encodings[0], encodings[1]);
    assert_eq!(encodings[1], encodings[2]);

    // "beta" (len 4) sorts before "alpha"/"gamma" (len 5)
    assert_eq!(&encodings[0][..6], &[3, 4, b'b', b'e', b't', b'a']);
}

proptest! {
    #[test]
    fn prop_map_order_independent(
        kvs in prop::collection::btree_map(".{0,12}", any::<u32>(), 0..16),
        seed in any::<u64>(),
    ) {
        let pairs: Vec<(String, u32)> = kvs.clone().into_iter().collect();
        let mut shuffled = pairs.clone();
        // deterministic rotation + reverse based on the seed
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
            if seed & 1 == 1 {
                shuffled.reverse();
            }
        }
        let a = BcsMap::from_pairs(pairs).unwrap();
        let b = BcsMap::from_pairs(shuffled).unwrap();
        let bytes = to_bytes(&a).unwrap();
        prop_assert_eq!(&bytes, &to_bytes(&b).unwrap());

        let back = from_bytes::<BcsMap<u32>>(&bytes).unwrap();
        let round: BTreeMap<String, u32> = back.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        prop_assert_eq!(round, kvs);
    }
}
