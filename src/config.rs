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

//! Transaction description files (TOML).
//!
//! ```toml
//! sender_key = "keys/sender.key"
//! sequence_number = 0
//! chain_id = 4
//!
//! [entry_function]
//! module = "0x1::coin"
//! function = "transfer"
//! type_args = ["0x1::aptos_coin::AptosCoin"]
//! args = [
//!   { type = "address", value = "0x2" },
//!   { type = "u64", value = "1000" },
//! ]
//! ```
//!
//! Argument types are type-tag names (`u64`, `address`, `vector<u8>`,
//! `0x1::string::String`) plus the aliases `string` and `bytes`.

use crate::core::bcs::{BcsError, Sequence};
use crate::core::transaction::{EntryFunction, ModuleId, RawTransaction};
use crate::core::types::{AccountAddress, TypeTag, Value, ValueKind};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use thiserror::Error;

const DEFAULT_MAX_GAS_AMOUNT: u64 = 2_000;
const DEFAULT_GAS_UNIT_PRICE: u64 = 100;
const DEFAULT_EXPIRATION_SECS: u64 = 600;

/// Config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("read {0}")]
    Read(String),
    /// TOML syntax or schema error.
    #[error("parse: {0}")]
    Parse(String),
    /// A field value is invalid.
    #[error("field {field}: {source}")]
    Value {
        /// Offending field.
        field: String,
        /// Underlying error.
        source: BcsError,
    },
}

fn default_max_gas_amount() -> u64 {
    DEFAULT_MAX_GAS_AMOUNT
}

fn default_gas_unit_price() -> u64 {
    DEFAULT_GAS_UNIT_PRICE
}

fn default_expiration_secs() -> u64 {
    DEFAULT_EXPIRATION_SECS
}

/// One typed argument.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ArgumentConfig {
    /// Type name.
    #[serde(rename = "type")]
    pub ty: String,
    /// Textual value.
    pub value: String,
}

/// Entry function to call.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EntryFunctionConfig {
    /// `address::module`.
    pub module: String,
    /// Function name.
    pub function: String,
    /// Type arguments.
    #[serde(default)]
    pub type_args: Vec<String>,
    /// Value arguments, in order.
    #[serde(default)]
    pub args: Vec<ArgumentConfig>,
}

/// An entry-function transaction to build and sign.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TransactionConfig {
    /// Sender key file.
    pub sender_key: PathBuf,
    /// Sender address when it differs from the key's derived address.
    #[serde(default)]
    pub sender: Option<String>,
    /// Sequence number.
    pub sequence_number: u64,
    /// Gas limit.
    #[serde(default = "default_max_gas_amount")]
    pub max_gas_amount: u64,
    /// Price per gas unit.
    #[serde(default = "default_gas_unit_price")]
    pub gas_unit_price: u64,
    /// Absolute expiry (unix seconds). Overrides `expiration_secs`.
    #[serde(default)]
    pub expiration_timestamp_secs: Option<u64>,
    /// Relative expiry from now.
    #[serde(default = "default_expiration_secs")]
    pub expiration_secs: u64,
    /// Target chain.
    pub chain_id: u8,
    /// Call to make.
    pub entry_function: EntryFunctionConfig,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn field_err(field: impl Into<String>) -> impl FnOnce(BcsError) -> ConfigError {
    let field = field.into();
    move |source| ConfigError::Value { field, source }
}

/// Map an argument type name to the value kind that carries it.
pub fn argument_kind(name: &str) -> Result<ValueKind, BcsError> {
    match name.trim() {
        "string" => Ok(ValueKind::BString),
        "bytes" => Ok(ValueKind::Bytes),
        other => ValueKind::from_type_tag(&other.parse::<TypeTag>()?),
    }
}

impl TransactionConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a file. A relative `sender_key` resolves against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        let mut cfg = Self::from_toml_str(&raw)?;
        if cfg.sender_key.is_relative() {
            if let Some(dir) = path.parent() {
                cfg.sender_key = dir.join(&cfg.sender_key);
            }
        }
        Ok(cfg)
    }

    /// Explicit sender, if configured.
    pub fn sender_address(&self) -> Result<Option<AccountAddress>, ConfigError> {
        self.sender
            .as_deref()
            .map(|s| AccountAddress::from_hex(s).map_err(field_err("sender")))
            .transpose()
    }

    /// Parsed argument values.
    pub fn arguments(&self) -> Result<Sequence<Value>, ConfigError> {
        let mut values = Vec::with_capacity(self.entry_function.args.len());
        for (i, arg) in self.entry_function.args.iter().enumerate() {
            let field = format!("entry_function.args[{i}]");
            let kind = argument_kind(&arg.ty).map_err(field_err(field.clone()))?;
            values.push(Value::parse(kind, &arg.value).map_err(field_err(field))?);
        }
        Ok(Sequence::new(values))
    }

    /// Entry function with encoded arguments.
    pub fn entry_function(&self) -> Result<EntryFunction, ConfigError> {
        let f = &self.entry_function;
        let module: ModuleId = f.module.parse().map_err(field_err("entry_function.module"))?;
        let type_args = f
            .type_args
            .iter()
            .map(|t| t.parse::<TypeTag>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(field_err("entry_function.type_args"))?;
        EntryFunction::natural(module, f.function.as_str(), type_args, &self.arguments()?)
            .map_err(field_err("entry_function.function"))
    }

    /// Expiry in unix seconds.
    pub fn expiration(&self) -> u64 {
        self.expiration_timestamp_secs
            .unwrap_or_else(|| now_secs().saturating_add(self.expiration_secs))
    }

    /// Build the raw transaction for `sender`.
    pub fn to_raw_transaction(&self, sender: AccountAddress) -> Result<RawTransaction, ConfigError> {
        Ok(RawTransaction::new(
            sender,
            self.sequence_number,
            self.entry_function()?.into(),
            self.max_gas_amount,
            self.gas_unit_price,
            self.expiration(),
            self.chain_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
sender_key = "sender.key"
sequence_number = 3
expiration_timestamp_secs = 1700000000
chain_id = 4

[entry_function]
module = "0x1::coin"
function = "transfer"
type_args = ["0x1::aptos_coin::AptosCoin"]
args = [
  { type = "address", value = "0x2" },
  { type = "u64", value = "1000" },
  { type = "string", value = "memo" },
]
"#;

    #[test]
    fn parses_and_builds() {
        let cfg = TransactionConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(cfg.max_gas_amount, DEFAULT_MAX_GAS_AMOUNT);
        assert_eq!(cfg.gas_unit_price, DEFAULT_GAS_UNIT_PRICE);

        let raw = cfg.to_raw_transaction(AccountAddress::ONE).unwrap();
        assert_eq!(raw.sequence_number, 3);
        assert_eq!(raw.expiration_timestamp_secs, 1_700_000_000);
        assert_eq!(raw.chain_id, 4);

        let f = cfg.entry_function().unwrap();
        assert_eq!(f.ty_args.len(), 1);
        assert_eq!(f.args[1], 1000u64.to_le_bytes().to_vec());
        assert_eq!(f.args[2], vec![4, b'm', b'e', b'm', b'o']);
    }

    #[test]
    fn bad_argument_names_field() {
        let bad = SAMPLE.replace("\"1000\"", "\"-1\"");
        let cfg = TransactionConfig::from_toml_str(&bad).unwrap();
        match cfg.entry_function() {
            Err(ConfigError::Value { field, source }) => {
                assert_eq!(field, "entry_function.args[1]");
                assert_eq!(source, BcsError::OutOfRange("u64"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn over_nested_type_arg_rejected() {
        let deep = format!("{}u8{}", "vector<".repeat(9), ">".repeat(9));
        let bad = SAMPLE.replace("0x1::aptos_coin::AptosCoin", &deep);
        let cfg = TransactionConfig::from_toml_str(&bad).unwrap();
        match cfg.to_raw_transaction(AccountAddress::ONE) {
            Err(ConfigError::Value { field, source }) => {
                assert_eq!(field, "entry_function.type_args");
                assert!(matches!(source, BcsError::InvalidTypeTag(_)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn argument_kinds() {
        assert_eq!(argument_kind("vector<u8>").unwrap(), ValueKind::Bytes);
        assert_eq!(argument_kind("bytes").unwrap(), ValueKind::Bytes);
        assert_eq!(argument_kind("0x1::string::String").unwrap(), ValueKind::BString);
        assert!(argument_kind("signer").is_err());
        assert!(argument_kind("float").is_err());
    }

    #[test]
    fn missing_field_is_parse_error() {
        assert!(matches!(
            TransactionConfig::from_toml_str("sequence_number = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_resolves_key_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx.toml");
        fs::write(&path, SAMPLE).unwrap();
        let cfg = TransactionConfig::load(&path).unwrap();
        assert_eq!(cfg.sender_key, dir.path().join("sender.key"));
    }
}
