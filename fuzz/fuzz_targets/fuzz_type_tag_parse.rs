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

use aptos_bcs::core::bcs::{from_bytes, to_bytes};
use aptos_bcs::core::types::TypeTag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tag) = s.parse::<TypeTag>() {
            let bytes = to_bytes(&tag).expect("parsed tag encodes");
            assert_eq!(from_bytes::<TypeTag>(&bytes).expect("encoded tag decodes"), tag);
        }
    }
    let _ = from_bytes::<TypeTag>(data);
});
