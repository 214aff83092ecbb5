//! Tag-dispatch predicate engine.
//!
//! [`Validator::check`] decides whether a value satisfies a requested tag,
//! applying tag-specific coercion (numeric strings, trimming) and the
//! kind-specific size rules. Expected failures are boolean `false`, never
//! errors; diagnostics are advisory `tracing` events gated on the
//! `show_errors` flag and carry no contract on wording.

use std::fmt;

use tracing::warn;

use crate::options::Options;
use crate::tag::{Kind, TypeTag};
use crate::value::Value;

pub mod email;
pub mod net;

/// Runtime validator. Both flags are fixed at construction; every method is
/// read-only, so one instance is freely reentrant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    show_errors: bool,
    disabled: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an advisory `tracing` event for every failed check.
    pub fn with_diagnostics(mut self) -> Self {
        self.show_errors = true;
        self
    }

    /// Short-circuit every predicate to an unconditional pass.
    pub fn bypassed(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn diag(&self, scope: &str, message: impl fmt::Display) {
        if self.show_errors {
            warn!(scope, "{message}");
        }
    }

    /// Does `value` satisfy `tag` under `options`?
    ///
    /// Numeric tags accept numbers and numeric strings; the coerced number —
    /// not the source string — is what the constraint steps see, and numbers
    /// carry no size dimension, so `min`/`max` are inert for them. `float`
    /// means "non-integral number", not an IEEE class.
    pub fn check(&self, value: &Value, tag: TypeTag, options: Option<&Options>) -> bool {
        if self.disabled {
            return true;
        }
        let kind = value.kind();

        let mut coerced_number: Option<f64> = None;
        let correct = match tag {
            // Nominal-type probe: an object carrying a recoverable type name
            // distinct from plain-object/array. An unreadable name rejects
            // the value, it does not error.
            TypeTag::Class => kind == Kind::Object && value.nominal_type().is_some(),
            TypeTag::Number | TypeTag::Int | TypeTag::Float => match coerce_numeric(value) {
                Some(n) => {
                    let integral = n.fract() == 0.0;
                    let ok = match tag {
                        TypeTag::Int => integral,
                        TypeTag::Float => !integral,
                        _ => true,
                    };
                    if ok {
                        coerced_number = Some(n);
                    }
                    ok
                }
                None => false,
            },
            // Bare record only: excludes arrays, null, and class instances.
            TypeTag::Object => matches!(value, Value::Object(_)),
            simple => simple.expected_kind() == Some(kind),
        };
        if !correct {
            self.diag(
                "type",
                format_args!("value of kind '{kind}' does not satisfy tag '{tag}'"),
            );
            return false;
        }

        let opts = options.map(Options::normalize).unwrap_or_default();

        if coerced_number.is_some() {
            // The effective value is a number: no text to trim or match, no
            // size concept to bound.
            return true;
        }

        let size: Option<u64> = match value {
            Value::String(s) => {
                let text = if opts.trim { s.trim() } else { s.as_str() };
                if let Some(rx) = &opts.regex {
                    if !rx.is_match(text) {
                        self.diag("params", "string does not match the regex pattern");
                        return false;
                    }
                }
                Some(text.chars().count() as u64)
            }
            other => size_of(other),
        };

        if let Some(size) = size {
            if size < opts.min {
                self.diag(
                    "params",
                    format_args!("size {size} is below the minimum of {}", opts.min),
                );
                return false;
            }
            if let Some(max) = opts.max {
                if size > max {
                    self.diag(
                        "params",
                        format_args!("size {size} is above the maximum of {max}"),
                    );
                    return false;
                }
            }
        }

        true
    }
}

/// The number a numeric tag measures: numbers pass through (NaN included,
/// mirroring the host semantics where only string coercion filters NaN);
/// strings are trimmed and parsed; everything else has no numeric reading.
fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        _ => None,
    }
}

/// Kind-specific size: char count for strings, element count for arrays /
/// typed arrays / maps / sets, byte length for buffers, own-key count for
/// objects and instances. `None` means the kind has no size dimension and
/// bounds are skipped entirely.
fn size_of(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => Some(s.chars().count() as u64),
        Value::Array(xs) => Some(xs.len() as u64),
        Value::TypedArray { len, .. } => Some(*len as u64),
        Value::ArrayBuffer(bytes) => Some(bytes.len() as u64),
        Value::Object(fields) => Some(fields.len() as u64),
        Value::Instance(inst) => Some(inst.fields.len() as u64),
        Value::Map(entries) => Some(entries.len() as u64),
        Value::Set(items) => Some(items.len() as u64),
        _ => None,
    }
}

// ------------------------------- Tests ------------------------------------ //
