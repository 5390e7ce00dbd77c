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

//! Move type tags and struct tags.
//!
//! Discriminants are part of the wire format. U16, U32 and U256 were added
//! after the first eight and take 8, 9 and 10.

use super::address::AccountAddress;
use crate::core::bcs::{BcsError, Deserializable, Deserializer, Serializable, Serializer};
use std::fmt;
use std::str::FromStr;

/// Deepest `vector`/struct nesting accepted when parsing, encoding or
/// decoding a type tag.
pub const MAX_TYPE_TAG_NESTING: usize = 8;

/// Move type tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `address`
    Address,
    /// `signer`
    Signer,
    /// `vector<T>`
    Vector(Box<TypeTag>),
    /// A struct type.
    Struct(Box<StructTag>),
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u256`
    U256,
}

impl TypeTag {
    /// `bool` discriminant.
    pub const BOOL: u32 = 0;
    /// `u8` discriminant.
    pub const U8_TAG: u32 = 1;
    /// `u64` discriminant.
    pub const U64_TAG: u32 = 2;
    /// `u128` discriminant.
    pub const U128_TAG: u32 = 3;
    /// `address` discriminant.
    pub const ACCOUNT_ADDRESS: u32 = 4;
    /// `signer` discriminant.
    pub const SIGNER: u32 = 5;
    /// `vector` discriminant.
    pub const VECTOR: u32 = 6;
    /// struct discriminant.
    pub const STRUCT: u32 = 7;
    /// `u16` discriminant.
    pub const U16_TAG: u32 = 8;
    /// `u32` discriminant.
    pub const U32_TAG: u32 = 9;
    /// `u256` discriminant.
    pub const U256_TAG: u32 = 10;

    /// Wire discriminant of this tag.
    pub fn variant(&self) -> u32 {
        match self {
            TypeTag::Bool => Self::BOOL,
            TypeTag::U8 => Self::U8_TAG,
            TypeTag::U64 => Self::U64_TAG,
            TypeTag::U128 => Self::U128_TAG,
            TypeTag::Address => Self::ACCOUNT_ADDRESS,
            TypeTag::Signer => Self::SIGNER,
            TypeTag::Vector(_) => Self::VECTOR,
            TypeTag::Struct(_) => Self::STRUCT,
            TypeTag::U16 => Self::U16_TAG,
            TypeTag::U32 => Self::U32_TAG,
            TypeTag::U256 => Self::U256_TAG,
        }
    }

    /// Shorthand for `TypeTag::Struct(Box::new(tag))`.
    pub fn from_struct(tag: StructTag) -> Self {
        TypeTag::Struct(Box::new(tag))
    }
}

fn too_deep() -> BcsError {
    BcsError::InvalidTypeTag("type tag nested too deep".to_string())
}

impl Serializable for TypeTag {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serialize_type_tag(self, serializer, 0)
    }
}

fn serialize_type_tag(tag: &TypeTag, serializer: &mut Serializer, depth: usize) -> Result<(), BcsError> {
    if depth > MAX_TYPE_TAG_NESTING {
        return Err(too_deep());
    }
    serializer.serialize_variant_index(tag.variant());
    match tag {
        TypeTag::Vector(inner) => serialize_type_tag(inner, serializer, depth + 1),
        TypeTag::Struct(s) => serialize_struct_tag(s, serializer, depth + 1),
        _ => Ok(()),
    }
}

fn serialize_struct_tag(tag: &StructTag, serializer: &mut Serializer, depth: usize) -> Result<(), BcsError> {
    tag.address.serialize(serializer)?;
    serializer.serialize_str(&tag.module)?;
    serializer.serialize_str(&tag.name)?;
    serializer.serialize_len(tag.type_args.len())?;
    for t in &tag.type_args {
        serialize_type_tag(t, serializer, depth)?;
    }
    Ok(())
}

impl Deserializable for TypeTag {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserialize_type_tag(deserializer, 0)
    }
}

fn deserialize_type_tag(deserializer: &mut Deserializer<'_>, depth: usize) -> Result<TypeTag, BcsError> {
    if depth > MAX_TYPE_TAG_NESTING {
        return Err(too_deep());
    }
    let index = deserializer.deserialize_variant_index()?;
    Ok(match index {
        TypeTag::BOOL => TypeTag::Bool,
        TypeTag::U8_TAG => TypeTag::U8,
        TypeTag::U64_TAG => TypeTag::U64,
        TypeTag::U128_TAG => TypeTag::U128,
        TypeTag::ACCOUNT_ADDRESS => TypeTag::Address,
        TypeTag::SIGNER => TypeTag::Signer,
        TypeTag::VECTOR => TypeTag::Vector(Box::new(deserialize_type_tag(deserializer, depth + 1)?)),
        TypeTag::STRUCT => TypeTag::Struct(Box::new(deserialize_struct_tag(deserializer, depth + 1)?)),
        TypeTag::U16_TAG => TypeTag::U16,
        TypeTag::U32_TAG => TypeTag::U32,
        TypeTag::U256_TAG => TypeTag::U256,
        index => return Err(BcsError::UnknownVariant { kind: "TypeTag", index }),
    })
}

fn deserialize_struct_tag(deserializer: &mut Deserializer<'_>, depth: usize) -> Result<StructTag, BcsError> {
    let address = AccountAddress::deserialize(deserializer)?;
    let module = deserializer.deserialize_str()?;
    let name = deserializer.deserialize_str()?;
    let len = deserializer.deserialize_len()?;
    let mut type_args = Vec::with_capacity(len.min(deserializer.remaining()));
    for _ in 0..len {
        type_args.push(deserialize_type_tag(deserializer, depth)?);
    }
    Ok(StructTag { address, module, name, type_args })
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::U256 => f.write_str("u256"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(tag) => write!(f, "{tag}"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = BcsError;

    /// Primitive names, `vector<..>` and struct tags with flat type arguments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s, 0)
    }
}

fn parse_type_tag(s: &str, depth: usize) -> Result<TypeTag, BcsError> {
    if depth > MAX_TYPE_TAG_NESTING {
        return Err(too_deep());
    }
    let s = s.trim();
    Ok(match s {
        "bool" => TypeTag::Bool,
        "u8" => TypeTag::U8,
        "u16" => TypeTag::U16,
        "u32" => TypeTag::U32,
        "u64" => TypeTag::U64,
        "u128" => TypeTag::U128,
        "u256" => TypeTag::U256,
        "address" => TypeTag::Address,
        "signer" => TypeTag::Signer,
        _ => {
            if let Some(inner) = s.strip_prefix("vector<").and_then(|r| r.strip_suffix('>')) {
                TypeTag::Vector(Box::new(parse_type_tag(inner, depth + 1)?))
            } else if s.contains("::") {
                TypeTag::Struct(Box::new(parse_struct_tag(s, depth + 1)?))
            } else {
                return Err(BcsError::InvalidTypeTag(s.to_string()));
            }
        }
    })
}

/// Fully qualified struct type: `address::module::name<type_args>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructTag {
    /// Publishing account.
    pub address: AccountAddress,
    /// Module name.
    pub module: String,
    /// Struct name.
    pub name: String,
    /// Generic instantiation.
    pub type_args: Vec<TypeTag>,
}

impl StructTag {
    /// Build a struct tag; module and name must be valid identifiers.
    pub fn new(
        address: AccountAddress,
        module: impl Into<String>,
        name: impl Into<String>,
        type_args: Vec<TypeTag>,
    ) -> Result<Self, BcsError> {
        let module = module.into();
        let name = name.into();
        if !is_identifier(&module) {
            return Err(BcsError::InvalidTypeTag(module));
        }
        if !is_identifier(&name) {
            return Err(BcsError::InvalidTypeTag(name));
        }
        Ok(Self { address, module, name, type_args })
    }

    /// `0x1::string::String`.
    pub fn move_string() -> Self {
        Self {
            address: AccountAddress::ONE,
            module: "string".to_string(),
            name: "String".to_string(),
            type_args: Vec::new(),
        }
    }
}

/// Move identifier: `[A-Za-z_][A-Za-z0-9_]*`, not just `_`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if s.len() > 1 => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Serializable for StructTag {
    fn serialize(&self, serializer: &mut Serializer) -> Result<(), BcsError> {
        serialize_struct_tag(self, serializer, 0)
    }
}

impl Deserializable for StructTag {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self, BcsError> {
        deserialize_struct_tag(deserializer, 0)
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address.to_short_string(), self.module, self.name)?;
        if !self.type_args.is_empty() {
            f.write_str("<")?;
            for (i, t) in self.type_args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{t}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for StructTag {
    type Err = BcsError;

    /// Parses `addr::module::name` with an optional flat `<T1, T2>` list.
    /// Generic arguments that are themselves generic are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_struct_tag(s, 0)
    }
}

fn parse_struct_tag(s: &str, depth: usize) -> Result<StructTag, BcsError> {
    let s = s.trim();
    let bad = || BcsError::InvalidTypeTag(s.to_string());

    let (head, type_args) = match s.find('<') {
        None => (s, Vec::new()),
        Some(open) => {
            let inner = s[open + 1..].strip_suffix('>').ok_or_else(bad)?;
            if inner.contains('<') || inner.contains('>') {
                return Err(BcsError::InvalidTypeTag(format!("nested generics unsupported: {s}")));
            }
            let args = inner
                .split(',')
                .map(|a| parse_type_tag(a, depth))
                .collect::<Result<Vec<_>, _>>()?;
            (&s[..open], args)
        }
    };

    let parts: Vec<&str> = head.split("::").collect();
    if parts.len() != 3 {
        return Err(bad());
    }
    let address = AccountAddress::from_hex(parts[0]).map_err(|_| bad())?;
    StructTag::new(address, parts[1], parts[2], type_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bcs::{from_bytes, to_bytes};

    fn aptos_coin() -> StructTag {
        StructTag::new(AccountAddress::ONE, "aptos_coin", "AptosCoin", vec![]).unwrap()
    }

    #[test]
    fn discriminants_are_fixed() {
        let expected = [
            (TypeTag::Bool, 0),
            (TypeTag::U8, 1),
            (TypeTag::U64, 2),
            (TypeTag::U128, 3),
            (TypeTag::Address, 4),
            (TypeTag::Signer, 5),
            (TypeTag::Vector(Box::new(TypeTag::U8)), 6),
            (TypeTag::from_struct(aptos_coin()), 7),
            (TypeTag::U16, 8),
            (TypeTag::U32, 9),
            (TypeTag::U256, 10),
        ];
        for (tag, idx) in expected {
            assert_eq!(tag.variant(), idx);
            assert_eq!(to_bytes(&tag).unwrap()[0], idx as u8);
        }
    }

    #[test]
    fn struct_tag_display_and_parse() {
        let tag = StructTag::new(
            AccountAddress::ONE,
            "coin",
            "CoinStore",
            vec![TypeTag::from_struct(aptos_coin()), TypeTag::U64],
        )
        .unwrap();
        let text = tag.to_string();
        assert_eq!(text, "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin, u64>");
        assert_eq!(text.parse::<StructTag>().unwrap(), tag);
    }

    #[test]
    fn struct_tag_parse_rejects_nested_generics() {
        let err = "0x1::coin::CoinStore<0x1::a::B<u8>>".parse::<StructTag>().unwrap_err();
        assert!(matches!(err, BcsError::InvalidTypeTag(_)));
        assert!("0x1::coin".parse::<StructTag>().is_err());
        assert!("0x1::1coin::X".parse::<StructTag>().is_err());
    }

    #[test]
    fn struct_tag_wire_layout() {
        let bytes = to_bytes(&aptos_coin()).unwrap();
        let mut expected = AccountAddress::ONE.as_bytes().to_vec();
        expected.push(10);
        expected.extend_from_slice(b"aptos_coin");
        expected.push(9);
        expected.extend_from_slice(b"AptosCoin");
        expected.push(0);
        assert_eq!(bytes, expected);
        assert_eq!(from_bytes::<StructTag>(&bytes).unwrap(), aptos_coin());
    }

    #[test]
    fn unknown_type_tag_variant() {
        assert_eq!(
            from_bytes::<TypeTag>(&[11]),
            Err(BcsError::UnknownVariant { kind: "TypeTag", index: 11 })
        );
    }

    #[test]
    fn deep_nesting_rejected() {
        let mut raw = vec![TypeTag::VECTOR as u8; MAX_TYPE_TAG_NESTING + 2];
        raw.push(TypeTag::U8_TAG as u8);
        assert!(matches!(from_bytes::<TypeTag>(&raw), Err(BcsError::InvalidTypeTag(_))));

        let mut ok = vec![TypeTag::VECTOR as u8; MAX_TYPE_TAG_NESTING];
        ok.push(TypeTag::U8_TAG as u8);
        assert!(from_bytes::<TypeTag>(&ok).is_ok());
    }

    fn nested_vectors(depth: usize) -> String {
        format!("{}u8{}", "vector<".repeat(depth), ">".repeat(depth))
    }

    #[test]
    fn text_nesting_matches_decoder_limit() {
        let deepest = nested_vectors(MAX_TYPE_TAG_NESTING);
        let tag: TypeTag = deepest.parse().unwrap();
        assert_eq!(tag.to_string(), deepest);
        assert_eq!(from_bytes::<TypeTag>(&to_bytes(&tag).unwrap()).unwrap(), tag);

        let over = nested_vectors(MAX_TYPE_TAG_NESTING + 1);
        assert!(matches!(over.parse::<TypeTag>(), Err(BcsError::InvalidTypeTag(_))));

        // fails fast instead of recursing through the whole string
        assert!(nested_vectors(200_000).parse::<TypeTag>().is_err());
    }

    #[test]
    fn over_deep_tag_does_not_encode() {
        let mut tag = TypeTag::U8;
        for _ in 0..=MAX_TYPE_TAG_NESTING {
            tag = TypeTag::Vector(Box::new(tag));
        }
        assert!(matches!(to_bytes(&tag), Err(BcsError::InvalidTypeTag(_))));

        let wrapped = StructTag::new(AccountAddress::ONE, "m", "S", vec![tag]).unwrap();
        assert!(to_bytes(&TypeTag::from_struct(wrapped)).is_err());
    }

    #[test]
    fn type_tag_text_round_trip() {
        for text in ["u8", "u256", "vector<u8>", "vector<vector<address>>", "0x1::string::String"] {
            let tag: TypeTag = text.parse().unwrap();
            assert_eq!(tag.to_string(), text);
        }
        assert!("float".parse::<TypeTag>().is_err());
    }
}
