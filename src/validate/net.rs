//! IP-address predicate: a bounded string check followed by a syntactic
//! IPv4/IPv6 scan. Deliberately a validator, not a parser — nothing is
//! returned beyond pass/fail.

use super::Validator;
use crate::options::Options;
use crate::tag::TypeTag;
use crate::value::Value;

impl Validator {
    /// Is `value` a syntactically valid IPv4 or IPv6 address?
    pub fn is_ip(&self, value: &Value) -> bool {
        if self.is_disabled() {
            return true;
        }
        // Overall length bounds come first; note this makes the bare "::"
        // unreachable below (2 chars never clears the minimum of 3).
        let opts = Options::default().min(3).max(40);
        if !self.check(value, TypeTag::String, Some(&opts)) {
            return false;
        }
        match value {
            Value::String(text) => self.ip_syntax(text),
            _ => false,
        }
    }

    fn ip_syntax(&self, text: &str) -> bool {
        // IPv4-mapped IPv6 (e.g. ::ffff:192.168.1.1): re-validate the tail,
        // bounds included.
        if let Some(tail) = text.strip_prefix("::ffff:") {
            let len = tail.chars().count();
            if !(3..=40).contains(&len) {
                self.diag("net", format_args!("IPv4-mapped tail out of bounds in {text:?}"));
                return false;
            }
            return self.ip_syntax(tail);
        }
        if text == "::" || text == "::1" {
            return true;
        }

        if text.contains('.') {
            let octets: Vec<&str> = text.split('.').collect();
            if octets.len() != 4 {
                self.diag("net", format_args!("not a valid IPv4 address: {text:?}"));
                return false;
            }
            for octet in octets {
                let in_range = !octet.is_empty()
                    && octet.chars().all(|c| c.is_ascii_digit())
                    && octet.parse::<u8>().is_ok();
                if !in_range {
                    self.diag("net", format_args!("IPv4 octet out of range in {text:?}"));
                    return false;
                }
            }
            return true;
        }

        let groups: Vec<&str> = text.split(':').collect();
        if groups.len() < 2 || groups.len() > 8 {
            self.diag("net", format_args!("not a valid IP address: {text:?}"));
            return false;
        }
        let mut empty_segments = 0usize;
        for group in groups {
            // empty segments come from the "::" abbreviation
            if group.is_empty() {
                empty_segments += 1;
                continue;
            }
            let hex = group.len() <= 4 && group.chars().all(|c| c.is_ascii_hexdigit());
            if !hex {
                self.diag("net", format_args!("invalid IPv6 segment {group:?} in {text:?}"));
                return false;
            }
        }
        if empty_segments > 1 {
            self.diag("net", format_args!("too many \"::\" in {text:?}"));
            return false;
        }
        true
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(text: &str) -> bool {
        Validator::new().is_ip(&Value::from(text))
    }

    #[test]
    fn dotted_quads() {
        assert!(ip("192.168.1.1"));
        assert!(ip("0.0.0.0"));
        assert!(ip("255.255.255.255"));
        assert!(!ip("999.1.1.1")); // octet out of range
        assert!(!ip("192.168.1")); // three parts
        assert!(!ip("1.2.3.4.5")); // five parts
        assert!(!ip("1.2.3.")); // empty octet
        assert!(!ip("a.b.c.d"));
    }

    #[test]
    fn colon_hex_groups() {
        assert!(ip("::1"));
        assert!(ip("2001:db8::1"));
        assert!(ip("abcd:ef01:2345:6789:abcd:ef01:2345:6789"));
        assert!(!ip(":::")); // two abbreviations' worth of empties
        assert!(!ip("12345::")); // group too wide
        assert!(!ip("2001:db8::zz"));
        assert!(!ip("1:2:3:4:5:6:7:8:9")); // nine groups
    }

    #[test]
    fn ipv4_mapped_delegates_to_the_ipv4_rules() {
        assert!(ip("::ffff:192.168.1.1"));
        assert!(!ip("::ffff:999.1.1.1"));
        assert!(!ip("::ffff:x"));
    }

    #[test]
    fn length_bounds_apply_before_anything_else() {
        assert!(!ip("::")); // 2 chars, below the minimum of 3
        let long = "1".repeat(41);
        assert!(!Validator::new().is_ip(&Value::String(long)));
    }

    #[test]
    fn non_strings_fail_and_disabled_bypasses() {
        assert!(!Validator::new().is_ip(&Value::Number(1.0)));
        assert!(Validator::new().bypassed().is_ip(&Value::Null));
    }
}
