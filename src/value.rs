//! Dynamic value representation.
//!
//! Validation operates on values whose type is only known at runtime, so the
//! crate carries its own `Value` enum spanning every intrinsic kind the tag
//! registry can name. Parsed JSON enters through [`Value::from_json`]; richer
//! host values (maps, typed arrays, class instances, ...) are constructed
//! directly.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::tag::Kind;

/// An arbitrary runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(String),
    Array(Vec<Value>),
    /// Plain object: bare key/value record, insertion-ordered.
    Object(IndexMap<String, Value>),
    /// Instance of a nominal type. Intrinsic kind is still `object`.
    Instance(Instance),
    Function(FunctionKind),
    Generator,
    Promise,
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    WeakMap,
    WeakSet,
    ArrayBuffer(Vec<u8>),
    DataView { byte_len: usize },
    /// Element count only; binary content is never inspected.
    TypedArray { kind: TypedArrayKind, len: usize },
    Date(DateTime<Utc>),
    Error(String),
    RegExp(String),
    Arguments(Vec<Value>),
    Math,
    Json,
    Module,
}

/// A nominally-typed object. `name` is the recovered type name; `None`
/// models a failed reflection probe (the `class` tag then rejects the value
/// rather than erroring).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Instance {
    pub name: Option<String>,
    pub fields: IndexMap<String, Value>,
}

impl Instance {
    pub fn new(name: impl Into<String>, fields: IndexMap<String, Value>) -> Self {
        Self { name: Some(name.into()), fields }
    }

    /// Instance whose nominal type could not be recovered.
    pub fn anonymous(fields: IndexMap<String, Value>) -> Self {
        Self { name: None, fields }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Plain,
    Async,
    Generator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub fn kind(self) -> Kind {
        match self {
            TypedArrayKind::Int8 => Kind::Int8Array,
            TypedArrayKind::Uint8 => Kind::Uint8Array,
            TypedArrayKind::Uint8Clamped => Kind::Uint8ClampedArray,
            TypedArrayKind::Int16 => Kind::Int16Array,
            TypedArrayKind::Uint16 => Kind::Uint16Array,
            TypedArrayKind::Int32 => Kind::Int32Array,
            TypedArrayKind::Uint32 => Kind::Uint32Array,
            TypedArrayKind::Float32 => Kind::Float32Array,
            TypedArrayKind::Float64 => Kind::Float64Array,
            TypedArrayKind::BigInt64 => Kind::BigInt64Array,
            TypedArrayKind::BigUint64 => Kind::BigUint64Array,
        }
    }
}

impl Value {
    /// Intrinsic kind. Total and cheap; class instances report `object`.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Array(_) => Kind::Array,
            Value::Object(_) | Value::Instance(_) => Kind::Object,
            Value::Function(FunctionKind::Plain) => Kind::Function,
            Value::Function(FunctionKind::Async) => Kind::AsyncFunction,
            Value::Function(FunctionKind::Generator) => Kind::GeneratorFunction,
            Value::Generator => Kind::Generator,
            Value::Promise => Kind::Promise,
            Value::Map(_) => Kind::Map,
            Value::Set(_) => Kind::Set,
            Value::WeakMap => Kind::WeakMap,
            Value::WeakSet => Kind::WeakSet,
            Value::ArrayBuffer(_) => Kind::ArrayBuffer,
            Value::DataView { .. } => Kind::DataView,
            Value::TypedArray { kind, .. } => kind.kind(),
            Value::Date(_) => Kind::Date,
            Value::Error(_) => Kind::Error,
            Value::RegExp(_) => Kind::RegExp,
            Value::Arguments(_) => Kind::Arguments,
            Value::Math => Kind::Math,
            Value::Json => Kind::Json,
            Value::Module => Kind::Module,
        }
    }

    /// Recovered nominal type name, when the value carries one distinct from
    /// plain-object/array. This is the `class`-tag probe.
    pub fn nominal_type(&self) -> Option<&str> {
        match self {
            Value::Instance(inst) => inst.name.as_deref().filter(|n| !n.is_empty()),
            _ => None,
        }
    }

    /// Bring a parsed JSON document across the trust boundary. Key order is
    /// preserved (serde_json `preserve_order`).
    pub fn from_json(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(xs) => {
                Value::Array(xs.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from_json(v))).collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from_json(value)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(xs: Vec<Value>) -> Self {
        Value::Array(xs)
    }
}

// ------------------------------- Tests ------------------------------------ //
