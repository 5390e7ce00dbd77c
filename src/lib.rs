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
#![warn(missing_docs)]

//! Binary Canonical Serialization (BCS) and Aptos transaction signing.
//!
//! This crate provides:
//! - A BCS codec with strict, unique encodings (primitives, ULEB128,
//!   sequences, sorted maps, tagged unions)
//! - Typed argument values, type tags and 32-byte account addresses
//! - The transaction object model: payloads, raw and multi-agent
//!   transactions, authenticators and signed transactions
//! - Ed25519 and K-of-N multi-Ed25519 keys, signatures and address derivation
//! - File-backed signers, TOML transaction descriptions and structured logging

/// Transaction description files.
pub mod config;
/// Codec, types, crypto and the transaction model.
pub mod core;
/// Observability (structured logging).
pub mod monitoring;

pub use crate::core::bcs::{from_bytes, to_bytes, BcsError};
