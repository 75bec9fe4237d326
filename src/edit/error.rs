//! Error types for point reads and point updates.

use crate::document::node::NodeKind;
use std::fmt;

/// Errors that can occur while reading or updating a value in a document.
///
/// Every failure is returned immediately to the caller; there is no retry and
/// no partial recovery. A failed update produces no output bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// The input document is not valid YAML.
    Parse { message: String },
    /// Parsing succeeded but produced no root content.
    EmptyDocument,
    /// The path descends through a node that is not a mapping.
    TypeMismatch { kind: NodeKind },
    /// A path segment has no matching key at its level.
    KeyNotFound { key: String },
    /// The located value's shape does not fit the destination type.
    Decode { message: String },
    /// A value could not be serialized and re-parsed into a document node.
    Conversion { message: String },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Parse { message } => write!(f, "invalid YAML: {}", message),
            EditError::EmptyDocument => write!(f, "empty YAML document"),
            EditError::TypeMismatch { kind } => {
                write!(f, "expected a mapping node, got kind {}", kind)
            }
            EditError::KeyNotFound { key } => write!(f, "key {} not found", key),
            EditError::Decode { message } => write!(f, "cannot decode value: {}", message),
            EditError::Conversion { message } => {
                write!(f, "cannot convert value to YAML: {}", message)
            }
        }
    }
}

impl std::error::Error for EditError {}
