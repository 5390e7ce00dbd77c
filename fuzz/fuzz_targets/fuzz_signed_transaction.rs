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
use aptos_bcs::core::transaction::SignedTransaction;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to the same bytes.
    if let Ok(tx) = from_bytes::<SignedTransaction>(data) {
        let again = to_bytes(&tx).expect("decoded transaction re-encodes");
        assert_eq!(again.as_slice(), data);
        let _ = tx.verify();
    }
});
