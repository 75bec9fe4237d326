//! YAML parsing into the internal document tree.
//!
//! This module turns raw YAML text into a [`YamlTree`]. Parsing goes through
//! `serde_yaml::Value` and converts into our internal representation, so the
//! accepted input is exactly what serde_yaml accepts. Duplicate mapping keys
//! are rejected by serde_yaml at this stage rather than being silently
//! resolved.
//!
//! # Example
//!
//! ```
//! use yamledit::document::parser::parse_yaml;
//!
//! let tree = parse_yaml("name: Alice\nage: 30\n").unwrap();
//! assert!(tree.root().is_mapping());
//!
//! // An empty document has no root content to address.
//! assert!(parse_yaml("").is_err());
//! ```

use super::node::{YamlNumber, YamlValue};
use super::tree::YamlTree;
use crate::edit::error::EditError;
use serde_yaml::Value as SerdeValue;

/// Parses YAML text into a document tree.
///
/// # Errors
///
/// Returns [`EditError::Parse`] if the text is not valid YAML (including
/// mappings with duplicate keys, which serde_yaml rejects), and
/// [`EditError::EmptyDocument`] if parsing produced no root content: empty
/// input, whitespace only, or an explicit null document.
pub fn parse_yaml(text: &str) -> Result<YamlTree, EditError> {
    if text.trim().is_empty() {
        return Err(EditError::EmptyDocument);
    }

    let value: SerdeValue = serde_yaml::from_str(text).map_err(|err| EditError::Parse {
        message: err.to_string(),
    })?;

    if value.is_null() {
        return Err(EditError::EmptyDocument);
    }

    Ok(YamlTree::new(convert_value(&value)?))
}

/// Converts a `serde_yaml::Value` into an internal node.
///
/// Tagged values are unwrapped to their inner value; the tag itself is not
/// represented in the tree.
pub fn convert_value(value: &SerdeValue) -> Result<YamlValue, EditError> {
    match value {
        SerdeValue::Null => Ok(YamlValue::Null),
        SerdeValue::Bool(b) => Ok(YamlValue::Boolean(*b)),
        SerdeValue::Number(n) => Ok(YamlValue::Number(convert_number(n))),
        SerdeValue::String(s) => Ok(YamlValue::String(s.clone())),
        SerdeValue::Sequence(items) => {
            let elements = items
                .iter()
                .map(convert_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(YamlValue::Sequence(elements))
        }
        SerdeValue::Mapping(map) => {
            let mut entries = indexmap::IndexMap::with_capacity(map.len());
            for (key, val) in map {
                entries.insert(scalar_key(key)?, convert_value(val)?);
            }
            Ok(YamlValue::Mapping(entries))
        }
        SerdeValue::Tagged(tagged) => convert_value(&tagged.value),
    }
}

fn convert_number(number: &serde_yaml::Number) -> YamlNumber {
    if let Some(i) = number.as_i64() {
        YamlNumber::Integer(i)
    } else {
        // u64 values above i64::MAX fall back to float, like any other
        // non-integral number.
        YamlNumber::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

/// Renders a mapping key to its literal text. Keys must be scalars; paths
/// match keys by text equality, so composite keys are unaddressable and
/// rejected here.
fn scalar_key(key: &SerdeValue) -> Result<String, EditError> {
    match key {
        SerdeValue::String(s) => Ok(s.clone()),
        SerdeValue::Bool(b) => Ok(b.to_string()),
        SerdeValue::Number(n) => Ok(n.to_string()),
        SerdeValue::Null => Ok("null".to_string()),
        SerdeValue::Sequence(_) | SerdeValue::Mapping(_) | SerdeValue::Tagged(_) => {
            Err(EditError::Parse {
                message: "mapping keys must be scalars".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_float_scalars() {
        let tree = parse_yaml("count: 42\nratio: 0.5\n").unwrap();
        let YamlValue::Mapping(entries) = tree.root() else {
            panic!("root should be a mapping");
        };

        match &entries["count"] {
            YamlValue::Number(n) => assert!(n.is_integer()),
            other => panic!("count should be a number, got {:?}", other),
        }
        match &entries["ratio"] {
            YamlValue::Number(n) => assert!(n.is_float()),
            other => panic!("ratio should be a number, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_scalar_keys_keep_literal_text() {
        let tree = parse_yaml("1: one\ntrue: yes\n").unwrap();
        let YamlValue::Mapping(entries) = tree.root() else {
            panic!("root should be a mapping");
        };

        assert!(entries.contains_key("1"));
        assert!(entries.contains_key("true"));
    }

    #[test]
    fn test_whitespace_only_is_empty_document() {
        assert!(matches!(parse_yaml("   \n\t\n"), Err(EditError::EmptyDocument)));
    }

    #[test]
    fn test_null_document_is_empty() {
        assert!(matches!(parse_yaml("~\n"), Err(EditError::EmptyDocument)));
    }
}
