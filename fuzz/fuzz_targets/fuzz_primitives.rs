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

use aptos_bcs::core::bcs::{BcsMap, Deserializable, Deserializer, Sequence};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoders must fail cleanly, never panic or over-read.
    let mut d = Deserializer::new(data);
    let _ = d.deserialize_uleb128();
    let _ = d.deserialize_str();
    let _ = d.deserialize_u256();
    assert!(d.position() <= data.len());

    let mut d = Deserializer::new(data);
    let _ = d.deserialize_vec::<Sequence<u64>>();

    let mut d = Deserializer::new(data);
    let _ = BcsMap::<String>::deserialize(&mut d);
});
