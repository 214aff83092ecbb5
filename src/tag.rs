//! Closed registry of type tags and intrinsic kinds.
//!
//! `TypeTag` is the set of categories a caller may request; `Kind` is the
//! classification a value already carries. The two overlap but are not
//! identical: `class`, `int`, `float`, `number` and `object` are refinement
//! tags whose rules live in the predicate, everything else maps 1:1 onto a
//! kind. The set is closed — an unrecognized tag name is a usage error, not
//! a "no match".

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use thiserror::Error;

// ------------------------------ Kinds ------------------------------------ //

/// A value's own runtime classification, independent of any requested tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Arguments,
    Array,
    ArrayBuffer,
    AsyncFunction,
    BigInt,
    BigInt64Array,
    BigUint64Array,
    Boolean,
    DataView,
    Date,
    Error,
    Float32Array,
    Float64Array,
    Function,
    Generator,
    GeneratorFunction,
    Int8Array,
    Int16Array,
    Int32Array,
    Json,
    Map,
    Math,
    Module,
    Null,
    Number,
    Object,
    Promise,
    RegExp,
    Set,
    String,
    Symbol,
    Uint8Array,
    Uint8ClampedArray,
    Uint16Array,
    Uint32Array,
    WeakMap,
    WeakSet,
    Undefined,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Arguments => "arguments",
            Kind::Array => "array",
            Kind::ArrayBuffer => "arraybuffer",
            Kind::AsyncFunction => "asyncfunction",
            Kind::BigInt => "bigint",
            Kind::BigInt64Array => "bigint64array",
            Kind::BigUint64Array => "biguint64array",
            Kind::Boolean => "boolean",
            Kind::DataView => "dataview",
            Kind::Date => "date",
            Kind::Error => "error",
            Kind::Float32Array => "float32array",
            Kind::Float64Array => "float64array",
            Kind::Function => "function",
            Kind::Generator => "generator",
            Kind::GeneratorFunction => "generatorfunction",
            Kind::Int8Array => "int8array",
            Kind::Int16Array => "int16array",
            Kind::Int32Array => "int32array",
            Kind::Json => "json",
            Kind::Map => "map",
            Kind::Math => "math",
            Kind::Module => "module",
            Kind::Null => "null",
            Kind::Number => "number",
            Kind::Object => "object",
            Kind::Promise => "promise",
            Kind::RegExp => "regexp",
            Kind::Set => "set",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Uint8Array => "uint8array",
            Kind::Uint8ClampedArray => "uint8clampedarray",
            Kind::Uint16Array => "uint16array",
            Kind::Uint32Array => "uint32array",
            Kind::WeakMap => "weakmap",
            Kind::WeakSet => "weakset",
            Kind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ------------------------------ Tags -------------------------------------- //

/// A requested type category. Canonical names are lower-case; parsing is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Arguments,
    Array,
    ArrayBuffer,
    AsyncFunction,
    BigInt,
    BigInt64Array,
    BigUint64Array,
    Boolean,
    Class,
    DataView,
    Date,
    Error,
    Float,
    Float32Array,
    Float64Array,
    Function,
    Generator,
    GeneratorFunction,
    Int,
    Int8Array,
    Int16Array,
    Int32Array,
    Json,
    Map,
    Math,
    Module,
    Null,
    Number,
    Object,
    Promise,
    RegExp,
    Set,
    String,
    Symbol,
    Uint8Array,
    Uint8ClampedArray,
    Uint16Array,
    Uint32Array,
    WeakMap,
    WeakSet,
    Undefined,
}

impl TypeTag {
    /// Every recognized tag, in canonical name order.
    pub const ALL: [TypeTag; 41] = [
        TypeTag::Arguments,
        TypeTag::Array,
        TypeTag::ArrayBuffer,
        TypeTag::AsyncFunction,
        TypeTag::BigInt,
        TypeTag::BigInt64Array,
        TypeTag::BigUint64Array,
        TypeTag::Boolean,
        TypeTag::Class,
        TypeTag::DataView,
        TypeTag::Date,
        TypeTag::Error,
        TypeTag::Float,
        TypeTag::Float32Array,
        TypeTag::Float64Array,
        TypeTag::Function,
        TypeTag::Generator,
        TypeTag::GeneratorFunction,
        TypeTag::Int,
        TypeTag::Int8Array,
        TypeTag::Int16Array,
        TypeTag::Int32Array,
        TypeTag::Json,
        TypeTag::Map,
        TypeTag::Math,
        TypeTag::Module,
        TypeTag::Null,
        TypeTag::Number,
        TypeTag::Object,
        TypeTag::Promise,
        TypeTag::RegExp,
        TypeTag::Set,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Uint8Array,
        TypeTag::Uint8ClampedArray,
        TypeTag::Uint16Array,
        TypeTag::Uint32Array,
        TypeTag::WeakMap,
        TypeTag::WeakSet,
        TypeTag::Undefined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Arguments => "arguments",
            TypeTag::Array => "array",
            TypeTag::ArrayBuffer => "arraybuffer",
            TypeTag::AsyncFunction => "asyncfunction",
            TypeTag::BigInt => "bigint",
            TypeTag::BigInt64Array => "bigint64array",
            TypeTag::BigUint64Array => "biguint64array",
            TypeTag::Boolean => "boolean",
            TypeTag::Class => "class",
            TypeTag::DataView => "dataview",
            TypeTag::Date => "date",
            TypeTag::Error => "error",
            TypeTag::Float => "float",
            TypeTag::Float32Array => "float32array",
            TypeTag::Float64Array => "float64array",
            TypeTag::Function => "function",
            TypeTag::Generator => "generator",
            TypeTag::GeneratorFunction => "generatorfunction",
            TypeTag::Int => "int",
            TypeTag::Int8Array => "int8array",
            TypeTag::Int16Array => "int16array",
            TypeTag::Int32Array => "int32array",
            TypeTag::Json => "json",
            TypeTag::Map => "map",
            TypeTag::Math => "math",
            TypeTag::Module => "module",
            TypeTag::Null => "null",
            TypeTag::Number => "number",
            TypeTag::Object => "object",
            TypeTag::Promise => "promise",
            TypeTag::RegExp => "regexp",
            TypeTag::Set => "set",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Uint8Array => "uint8array",
            TypeTag::Uint8ClampedArray => "uint8clampedarray",
            TypeTag::Uint16Array => "uint16array",
            TypeTag::Uint32Array => "uint32array",
            TypeTag::WeakMap => "weakmap",
            TypeTag::WeakSet => "weakset",
            TypeTag::Undefined => "undefined",
        }
    }

    /// The dispatch table: `Some(kind)` for tags whose rule is plain kind
    /// equality, `None` for the five refinement tags (`class`, `number`,
    /// `int`, `float`, `object`) handled specially by the predicate.
    pub fn expected_kind(self) -> Option<Kind> {
        match self {
            TypeTag::Class
            | TypeTag::Number
            | TypeTag::Int
            | TypeTag::Float
            | TypeTag::Object => None,
            TypeTag::Arguments => Some(Kind::Arguments),
            TypeTag::Array => Some(Kind::Array),
            TypeTag::ArrayBuffer => Some(Kind::ArrayBuffer),
            TypeTag::AsyncFunction => Some(Kind::AsyncFunction),
            TypeTag::BigInt => Some(Kind::BigInt),
            TypeTag::BigInt64Array => Some(Kind::BigInt64Array),
            TypeTag::BigUint64Array => Some(Kind::BigUint64Array),
            TypeTag::Boolean => Some(Kind::Boolean),
            TypeTag::DataView => Some(Kind::DataView),
            TypeTag::Date => Some(Kind::Date),
            TypeTag::Error => Some(Kind::Error),
            TypeTag::Float32Array => Some(Kind::Float32Array),
            TypeTag::Float64Array => Some(Kind::Float64Array),
            TypeTag::Function => Some(Kind::Function),
            TypeTag::Generator => Some(Kind::Generator),
            TypeTag::GeneratorFunction => Some(Kind::GeneratorFunction),
            TypeTag::Int8Array => Some(Kind::Int8Array),
            TypeTag::Int16Array => Some(Kind::Int16Array),
            TypeTag::Int32Array => Some(Kind::Int32Array),
            TypeTag::Json => Some(Kind::Json),
            TypeTag::Map => Some(Kind::Map),
            TypeTag::Math => Some(Kind::Math),
            TypeTag::Module => Some(Kind::Module),
            TypeTag::Null => Some(Kind::Null),
            TypeTag::Promise => Some(Kind::Promise),
            TypeTag::RegExp => Some(Kind::RegExp),
            TypeTag::Set => Some(Kind::Set),
            TypeTag::String => Some(Kind::String),
            TypeTag::Symbol => Some(Kind::Symbol),
            TypeTag::Uint8Array => Some(Kind::Uint8Array),
            TypeTag::Uint8ClampedArray => Some(Kind::Uint8ClampedArray),
            TypeTag::Uint16Array => Some(Kind::Uint16Array),
            TypeTag::Uint32Array => Some(Kind::Uint32Array),
            TypeTag::WeakMap => Some(Kind::WeakMap),
            TypeTag::WeakSet => Some(Kind::WeakSet),
            TypeTag::Undefined => Some(Kind::Undefined),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tag registry is closed; anything outside it is a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized type tag {0:?}")]
pub struct UnknownTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == lower)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

// ------------------------------- Tests ------------------------------------ //
