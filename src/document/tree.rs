//! Document tree ownership.
//!
//! A [`YamlTree`] owns the single root node produced by parsing one YAML
//! document. Callers that want to apply several edits without re-parsing hold
//! a tree and hand out borrows of its root to the navigation and edit
//! functions.

use super::node::YamlValue;

/// A complete parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlTree {
    root: YamlValue,
}

impl YamlTree {
    /// Creates a tree with the given root node.
    ///
    /// # Example
    ///
    /// ```
    /// use yamledit::document::tree::YamlTree;
    /// use yamledit::document::node::YamlValue;
    ///
    /// let tree = YamlTree::new(YamlValue::Boolean(true));
    /// assert!(matches!(tree.root(), YamlValue::Boolean(true)));
    /// ```
    pub fn new(root: YamlValue) -> Self {
        Self { root }
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &YamlValue {
        &self.root
    }

    /// Returns a mutable reference to the root node.
    pub fn root_mut(&mut self) -> &mut YamlValue {
        &mut self.root
    }
}
