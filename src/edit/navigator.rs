//! Recursive navigation to the node addressed by a dot path.
//!
//! Both functions walk mapping levels only: each remaining segment requires
//! the current node to be a mapping, and keys are matched by literal text
//! equality. The returned reference is an alias into the caller's tree, never
//! a copy, so a replacement through [`locate_mut`] is visible in the document
//! it came from.

use super::error::EditError;
use crate::document::node::YamlValue;

/// Walks `node` down one mapping level per segment and returns the node the
/// full path addresses.
///
/// # Errors
///
/// - [`EditError::TypeMismatch`] if a segment remains but the current node is
///   not a mapping; the error names the observed kind.
/// - [`EditError::KeyNotFound`] if the current mapping has no key equal to the
///   next segment; the error carries that segment's text.
pub fn locate<'a>(node: &'a YamlValue, segments: &[String]) -> Result<&'a YamlValue, EditError> {
    let Some((first, rest)) = segments.split_first() else {
        return Ok(node);
    };

    let YamlValue::Mapping(entries) = node else {
        return Err(EditError::TypeMismatch { kind: node.kind() });
    };

    match entries.get(first.as_str()) {
        Some(child) if rest.is_empty() => Ok(child),
        Some(child) => locate(child, rest),
        None => Err(EditError::KeyNotFound { key: first.clone() }),
    }
}

/// Mutable variant of [`locate`]: returns a mutable alias to the addressed
/// node so its slot can be replaced in place, preserving sibling order.
pub fn locate_mut<'a>(
    node: &'a mut YamlValue,
    segments: &[String],
) -> Result<&'a mut YamlValue, EditError> {
    if segments.is_empty() {
        return Ok(node);
    }

    let kind = node.kind();
    let YamlValue::Mapping(entries) = node else {
        return Err(EditError::TypeMismatch { kind });
    };

    let first = &segments[0];
    let rest = &segments[1..];
    match entries.get_mut(first.as_str()) {
        Some(child) if rest.is_empty() => Ok(child),
        Some(child) => locate_mut(child, rest),
        None => Err(EditError::KeyNotFound { key: first.clone() }),
    }
}
