//! Constraint-option normalization.
//!
//! Callers hand over a sparse [`Options`] record; the predicate only ever
//! sees the fully-defaulted [`NormalizedOptions`]. Malformed knobs degrade
//! to their defaults instead of failing the call — callers rely on that.

use regex::Regex;

/// Sparse, caller-supplied constraint knobs.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub trim: bool,
    pub regex: Option<Regex>,
}

impl Options {
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn regex(mut self, regex: Regex) -> Self {
        self.regex = Some(regex);
        self
    }

    /// Resolve defaults and silently drop invalid fields, per field:
    /// - `min` kept iff >= 0, else 0;
    /// - `max` kept iff >= the *resolved* `min`, else unbounded.
    ///
    /// Total: never fails, whatever the input.
    pub fn normalize(&self) -> NormalizedOptions {
        let min = self.min.filter(|m| *m >= 0).unwrap_or(0) as u64;
        let max = self
            .max
            .filter(|m| *m >= 0 && *m as u64 >= min)
            .map(|m| m as u64);
        NormalizedOptions {
            min,
            max,
            trim: self.trim,
            regex: self.regex.clone(),
        }
    }
}

/// Fully-defaulted options. `max >= min` holds whenever `max` is present.
#[derive(Debug, Clone, Default)]
pub struct NormalizedOptions {
    pub min: u64,
    pub max: Option<u64>,
    pub trim: bool,
    pub regex: Option<Regex>,
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let n = Options::default().normalize();
        assert_eq!(n.min, 0);
        assert_eq!(n.max, None);
        assert!(!n.trim);
        assert!(n.regex.is_none());
    }

    #[test]
    fn negative_min_is_silently_defaulted() {
        let n = Options::default().min(-1).normalize();
        assert_eq!(n.min, 0);
    }

    #[test]
    fn max_below_resolved_min_is_dropped() {
        let n = Options::default().min(5).max(3).normalize();
        assert_eq!(n.min, 5);
        assert_eq!(n.max, None);
    }

    #[test]
    fn max_is_checked_against_the_resolved_min_not_the_raw_one() {
        // raw min is invalid, so it resolves to 0 and max = 3 survives
        let n = Options::default().min(-10).max(3).normalize();
        assert_eq!(n.min, 0);
        assert_eq!(n.max, Some(3));
    }

    #[test]
    fn equal_bounds_are_kept() {
        let n = Options::default().min(4).max(4).normalize();
        assert_eq!((n.min, n.max), (4, Some(4)));
    }

    proptest! {
        #[test]
        fn normalize_is_total_and_ordered(min in proptest::option::of(any::<i64>()),
                                          max in proptest::option::of(any::<i64>())) {
            let n = Options { min, max, ..Options::default() }.normalize();
            // bounds are always coherent, whatever garbage came in
            if let Some(m) = n.max {
                prop_assert!(m >= n.min);
            }
        }
    }
}
