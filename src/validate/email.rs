//! Email predicate: a bounded string check against an RFC 5322-derived
//! pattern. The default pattern is opaque and used verbatim; callers can
//! swap in their own.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Validator;
use crate::options::Options;
use crate::tag::TypeTag;
use crate::value::Value;

// Based on RFC 5322.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#,
    )
    .expect("static email pattern compiles")
});

impl Validator {
    /// Is `value` a plausible email address? Length bounds are the RFC's
    /// [5, 254]; `pattern` overrides the built-in one.
    pub fn is_email(&self, value: &Value, pattern: Option<&Regex>) -> bool {
        let rx = pattern.cloned().unwrap_or_else(|| EMAIL_REGEX.clone());
        let opts = Options::default().min(5).max(254).regex(rx);
        self.check(value, TypeTag::String, Some(&opts))
    }
}

// ------------------------------- Tests ------------------------------------ //
