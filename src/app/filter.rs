//! Attribute selection and matching predicates.
//!
//! [`FilterSelection`] holds the attributes that filters and searches look
//! at. The predicates are phrased as *exclusions*: a filter removes every
//! package for which its predicate holds, both for normal filters and for
//! negated (`field!:pattern`) ones.

use crate::domain::{Attribute, Package};
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;

/// Attributes active by default and after every reset.
pub const DEFAULT_ATTRIBUTES: [Attribute; 2] = [Attribute::Name, Attribute::Description];

/// Ordered, duplicate-free set of active attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    attrs: Vec<Attribute>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            attrs: DEFAULT_ATTRIBUTES.to_vec(),
        }
    }
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the default `{name, description}` selection.
    pub fn reset(&mut self) {
        self.attrs = DEFAULT_ATTRIBUTES.to_vec();
    }

    /// Replaces the selection with the attributes named by `chars`.
    ///
    /// Unmapped characters and repeats are skipped. The result may be
    /// empty, in which case nothing matches.
    pub fn set(&mut self, chars: &str) {
        self.attrs.clear();
        for attr in chars.chars().filter_map(Attribute::from_char) {
            if !self.attrs.contains(&attr) {
                self.attrs.push(attr);
            }
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attrs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// True if any active attribute contains `needle`, ignoring case.
    #[must_use]
    pub fn contains_substring(&self, package: &Package, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.attrs
            .iter()
            .any(|&attr| package.attribute(attr).to_lowercase().contains(&needle))
    }

    /// True if any active attribute matches `pattern`.
    #[must_use]
    pub fn matches_pattern(&self, package: &Package, pattern: &Regex) -> bool {
        self.attrs
            .iter()
            .any(|&attr| pattern.is_match(package.attribute(attr)))
    }

    /// True iff no active attribute contains `needle`.
    #[must_use]
    pub fn excludes_substring(&self, package: &Package, needle: &str) -> bool {
        !self.contains_substring(package, needle)
    }

    /// True iff some active attribute contains `needle`.
    #[must_use]
    pub fn excludes_substring_negated(&self, package: &Package, needle: &str) -> bool {
        self.contains_substring(package, needle)
    }

    /// True iff no active attribute matches `pattern`.
    #[must_use]
    pub fn excludes_pattern(&self, package: &Package, pattern: &Regex) -> bool {
        !self.matches_pattern(package, pattern)
    }

    /// True iff some active attribute matches `pattern`.
    #[must_use]
    pub fn excludes_pattern_negated(&self, package: &Package, pattern: &Regex) -> bool {
        self.matches_pattern(package, pattern)
    }
}

/// Compiles a user pattern case-insensitively.
///
/// # Errors
///
/// Returns the regex error for malformed patterns; callers discard the
/// whole filter attempt.
pub fn compile_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Lexicographic order on the text of `attr`.
#[must_use]
pub fn compare_by_attribute(a: &Package, b: &Package, attr: Attribute) -> Ordering {
    a.attribute(attr).cmp(b.attribute(attr))
}
