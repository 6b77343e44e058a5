//! Recursive JSON-to-display-tree renderer.
//!
//! This is the core of the viewer: a field value of any shape is converted
//! into a [`DisplayNode`] tree that the table view can turn into nested,
//! indented markup. Scalars become their display string, objects become one
//! entry per key in parse order, and arrays are treated as objects with
//! numeric keys. The conversion is pure, so rendering the same value twice
//! yields the same tree.

use serde_json::Value;

/// Horizontal indentation per nesting level, in CSS pixels.
pub const INDENT_UNIT_PX: u32 = 10;

/// Indentation of a container nested `depth` levels deep.
pub fn indent_px(depth: u32) -> u32 {
    depth * INDENT_UNIT_PX
}

/// The display form of one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    /// A scalar, already converted to its display string. Rendered inline,
    /// with no container and no indentation of its own.
    Leaf(String),
    /// An object or array: one `(key, subtree)` entry per member, in the
    /// order the parser delivered them.
    Branch(Vec<(String, DisplayNode)>),
}

/// Converts one field value into its display tree.
///
/// Recursion is unbounded, with no cycle detection. That is safe for values
/// produced by a JSON parser, which cannot contain reference cycles; do not
/// feed this hand-built `Value` graphs that violate that precondition.
pub fn display_tree(value: &Value) -> DisplayNode {
    match value {
        Value::Object(map) => DisplayNode::Branch(
            map.iter()
                .map(|(key, val)| (key.clone(), display_tree(val)))
                .collect(),
        ),
        Value::Array(items) => DisplayNode::Branch(
            items
                .iter()
                .enumerate()
                .map(|(idx, val)| (idx.to_string(), display_tree(val)))
                .collect(),
        ),
        scalar => DisplayNode::Leaf(scalar_text(scalar)),
    }
}

/// String conversion for scalar values, with JavaScript `String(v)`
/// semantics: strings stay unquoted, numbers print via `Display`, booleans
/// are `true`/`false`, and null is `null`.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Containers are expanded by `display_tree` before they get here;
        // fall back to compact JSON for direct callers.
        other => other.to_string(),
    }
}
