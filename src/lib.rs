//! yamledit - point reads and point updates on YAML documents.
//!
//! A value inside a YAML document is addressed by a dot-notation path such as
//! `person.name`. [`read`] decodes the addressed value into any deserializable
//! type; [`update`] replaces it with any serializable value and returns the
//! whole document re-serialized, with every other entry left in place and in
//! order.
//!
//! Each call parses its own tree and shares nothing with other callers. To
//! apply several edits without re-parsing, use [`parse_yaml`] once and the
//! `*_node` variants against the resulting [`YamlTree`].
//!
//! # Example
//!
//! ```
//! let doc = "\
//! person:
//!   name: John Doe
//!   age: 30
//! settings:
//!   theme: dark
//! ";
//!
//! let theme: String = yamledit::read(doc, "settings.theme").unwrap();
//! assert_eq!(theme, "dark");
//!
//! let updated = yamledit::update(doc, "person.age", &35).unwrap();
//! let age: i64 = yamledit::read(&updated, "person.age").unwrap();
//! assert_eq!(age, 35);
//! ```

pub mod config;
pub mod document;
pub mod edit;
pub mod file;
pub mod path;

pub use document::parser::parse_yaml;
pub use document::serializer::encode;
pub use document::tree::YamlTree;
pub use edit::error::EditError;
pub use edit::{read, read_node, update, update_node};
pub use path::DotPath;
