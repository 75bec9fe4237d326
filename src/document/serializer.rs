//! Serialization of document trees back to YAML text.
//!
//! Output goes back through `serde_yaml`, so the indentation policy is the
//! serializer's fixed two-space indent. Mapping entries are emitted in tree
//! order.

use super::node::{YamlNumber, YamlValue};
use super::tree::YamlTree;
use crate::edit::error::EditError;

/// Converts an internal node into a `serde_yaml::Value` for encoding or
/// typed decoding.
pub fn node_to_value(node: &YamlValue) -> serde_yaml::Value {
    match node {
        YamlValue::Mapping(entries) => {
            let map: serde_yaml::Mapping = entries
                .iter()
                .map(|(k, v)| (serde_yaml::Value::String(k.clone()), node_to_value(v)))
                .collect();
            serde_yaml::Value::Mapping(map)
        }
        YamlValue::Sequence(elements) => {
            serde_yaml::Value::Sequence(elements.iter().map(node_to_value).collect())
        }
        YamlValue::String(s) => serde_yaml::Value::String(s.clone()),
        YamlValue::Number(n) => match n {
            YamlNumber::Integer(i) => serde_yaml::Value::Number(serde_yaml::Number::from(*i)),
            YamlNumber::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        },
        YamlValue::Boolean(b) => serde_yaml::Value::Bool(*b),
        YamlValue::Null => serde_yaml::Value::Null,
    }
}

/// Encodes a whole document tree as YAML text.
///
/// # Example
///
/// ```
/// use yamledit::document::parser::parse_yaml;
/// use yamledit::document::serializer::encode;
///
/// let tree = parse_yaml("name: Alice\n").unwrap();
/// assert_eq!(encode(&tree).unwrap(), "name: Alice\n");
/// ```
pub fn encode(tree: &YamlTree) -> Result<String, EditError> {
    encode_node(tree.root())
}

/// Encodes a single node as YAML text.
pub fn encode_node(node: &YamlValue) -> Result<String, EditError> {
    serde_yaml::to_string(&node_to_value(node)).map_err(|err| EditError::Conversion {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_yaml;

    #[test]
    fn test_encode_preserves_entry_order() {
        let text = "zulu: 1\nalpha: 2\nmike: 3\n";
        let tree = parse_yaml(text).unwrap();
        assert_eq!(encode(&tree).unwrap(), text);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let text = "server:\n  host: localhost\n  port: 8080\nflags:\n- a\n- b\n";
        let tree = parse_yaml(text).unwrap();
        let reparsed = parse_yaml(&encode(&tree).unwrap()).unwrap();
        assert_eq!(tree, reparsed);
    }
}
