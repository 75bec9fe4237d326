//! Dot-notation paths addressing values in a YAML document.
//!
//! A path like `person.name` is split on `.` into literal segments, one per
//! mapping level. Segments are matched by literal text equality; there is no
//! quoting or escape mechanism, so a key that itself contains a dot cannot be
//! addressed. This is a known limitation of the notation.

use std::fmt;

/// A parsed dot-notation path.
///
/// Splitting always yields at least one segment. Splitting the empty string
/// yields a single empty segment, which no mapping key will match, so lookup
/// fails with a key-not-found error rather than a dedicated path error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    segments: Vec<String>,
}

impl DotPath {
    /// Splits a dot-notation string into its literal segments.
    ///
    /// # Example
    ///
    /// ```
    /// use yamledit::path::DotPath;
    ///
    /// let path = DotPath::parse("person.name");
    /// assert_eq!(path.segments(), ["person", "name"]);
    /// ```
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the path's segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
