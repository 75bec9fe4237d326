//! YAML node representation.
//!
//! This module provides the core data structures for representing YAML
//! documents in yamledit. A document is a tree of [`YamlValue`] nodes:
//! mappings with ordered string keys, sequences, and scalars. Mapping order
//! is preserved through parse and re-serialization, so an edit to one value
//! leaves every sibling exactly where it was.
//!
//! # Example
//!
//! ```
//! use yamledit::document::node::{YamlValue, YamlNumber};
//! use indexmap::IndexMap;
//!
//! let mut entries = IndexMap::new();
//! entries.insert(
//!     "name".to_string(),
//!     YamlValue::String("yamledit".to_string()),
//! );
//! entries.insert(
//!     "version".to_string(),
//!     YamlValue::Number(YamlNumber::Integer(1)),
//! );
//! let node = YamlValue::Mapping(entries);
//! assert!(node.is_mapping());
//! ```

use indexmap::IndexMap;

/// The shape of a node, as reported in navigation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Scalar => "scalar",
        };
        write!(f, "{}", name)
    }
}

/// Represents YAML numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl YamlNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, YamlNumber::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, YamlNumber::Float(_))
    }
}

/// One node of a parsed YAML document.
///
/// Mappings keep their entries in document order via `IndexMap`; keys are the
/// literal text of the source key scalar. Sequences are ordered. Scalars carry
/// their resolved primitive type.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// A YAML mapping with ordered key-value pairs
    Mapping(IndexMap<String, YamlValue>),
    /// A YAML sequence of ordered values
    Sequence(Vec<YamlValue>),
    /// A YAML string scalar
    String(String),
    /// A YAML number scalar (integer or float)
    Number(YamlNumber),
    /// A YAML boolean scalar
    Boolean(bool),
    /// A YAML null scalar
    Null,
}

impl YamlValue {
    /// Returns the kind of this node: mapping, sequence, or scalar.
    ///
    /// # Example
    ///
    /// ```
    /// use yamledit::document::node::{NodeKind, YamlValue};
    ///
    /// assert_eq!(YamlValue::Null.kind(), NodeKind::Scalar);
    /// assert_eq!(YamlValue::Sequence(vec![]).kind(), NodeKind::Sequence);
    /// ```
    pub fn kind(&self) -> NodeKind {
        match self {
            YamlValue::Mapping(_) => NodeKind::Mapping,
            YamlValue::Sequence(_) => NodeKind::Sequence,
            YamlValue::String(_)
            | YamlValue::Number(_)
            | YamlValue::Boolean(_)
            | YamlValue::Null => NodeKind::Scalar,
        }
    }

    /// Returns true if this node is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlValue::Mapping(_))
    }

    /// Returns true if this node is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Returns true if this node is a scalar (string, number, boolean, null).
    pub fn is_scalar(&self) -> bool {
        self.kind() == NodeKind::Scalar
    }
}
