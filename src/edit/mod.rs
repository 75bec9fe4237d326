//! Point reads and point updates over YAML documents.
//!
//! The byte-oriented entry points [`read`] and [`update`] each parse their
//! input, walk to the addressed node, and either decode it into a typed
//! destination or replace it and re-serialize the whole document. Each call
//! owns its own parsed tree for the duration of the call and shares nothing
//! with other callers.
//!
//! Callers applying several edits to one logical document can either feed
//! each call's output into the next, or parse once and use [`read_node`] /
//! [`update_node`] against the same [`YamlTree`].
//!
//! # Example
//!
//! ```
//! let doc = "person:\n  name: John Doe\n  age: 30\n";
//!
//! let name: String = yamledit::edit::read(doc, "person.name").unwrap();
//! assert_eq!(name, "John Doe");
//!
//! let updated = yamledit::edit::update(doc, "person.age", &35).unwrap();
//! let age: u32 = yamledit::edit::read(&updated, "person.age").unwrap();
//! assert_eq!(age, 35);
//! ```

pub mod error;
pub mod navigator;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::document::node::YamlValue;
use crate::document::parser::{convert_value, parse_yaml};
use crate::document::serializer::{encode, node_to_value};
use crate::document::tree::YamlTree;
use crate::path::DotPath;

use error::EditError;
use navigator::{locate, locate_mut};

/// Parses `text` and decodes the value at `dot_path` into `T`.
///
/// # Errors
///
/// Propagates parse and navigation errors; fails with [`EditError::Decode`]
/// if the located node's shape does not fit `T`.
pub fn read<T: DeserializeOwned>(text: &str, dot_path: &str) -> Result<T, EditError> {
    let tree = parse_yaml(text)?;
    read_node(&tree, dot_path)
}

/// Parses `text`, replaces the value at `dot_path` with `value`, and returns
/// the whole document re-serialized.
///
/// The replacement occupies the same slot as the old value, so sibling order
/// is untouched. The input text is never mutated; on any error no output is
/// produced.
pub fn update<V: Serialize>(text: &str, dot_path: &str, value: &V) -> Result<String, EditError> {
    let mut tree = parse_yaml(text)?;
    update_node(&mut tree, dot_path, value)?;
    encode(&tree)
}

/// Decodes the value at `dot_path` in an already-parsed tree into `T`.
pub fn read_node<T: DeserializeOwned>(tree: &YamlTree, dot_path: &str) -> Result<T, EditError> {
    let path = DotPath::parse(dot_path);
    let node = locate(tree.root(), path.segments())?;
    serde_yaml::from_value(node_to_value(node)).map_err(|err| EditError::Decode {
        message: err.to_string(),
    })
}

/// Replaces the value at `dot_path` in an already-parsed tree, in place.
pub fn update_node<V: Serialize>(
    tree: &mut YamlTree,
    dot_path: &str,
    value: &V,
) -> Result<(), EditError> {
    let path = DotPath::parse(dot_path);
    let target = locate_mut(tree.root_mut(), path.segments())?;
    *target = to_node(value)?;
    Ok(())
}

/// Converts an arbitrary serializable value into a document node by
/// serializing it to YAML text and re-parsing that text. The replacement
/// therefore has exactly the shape the serializer would natively produce for
/// the value, and the value must round-trip cleanly.
///
/// # Errors
///
/// Fails with [`EditError::Conversion`] if serialization or the intermediate
/// re-parse fails.
pub fn to_node<V: Serialize>(value: &V) -> Result<YamlValue, EditError> {
    let text = serde_yaml::to_string(value).map_err(|err| EditError::Conversion {
        message: err.to_string(),
    })?;
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|err| EditError::Conversion {
            message: err.to_string(),
        })?;
    convert_value(&parsed).map_err(|err| EditError::Conversion {
        message: err.to_string(),
    })
}
