/// Flatten a value tree into a list of entries with dotted path notation.
use super::value::Value;

/// A flat representation of one position in a value tree.
#[derive(Debug, Clone)]
pub struct FlatEntry {
    /// Dotted/indexed path from the root (e.g., `colors.primary`, `tags[2]`).
    /// Empty for the root value itself.
    pub path: String,
    /// Shape name of the value at this path.
    pub kind: &'static str,
    /// One-line preview of the value (primitives verbatim, collections summarized).
    pub preview: String,
    /// Depth from root (root = 0).
    pub depth: usize,
    /// Number of direct children (0 for leaves).
    pub children_count: usize,
}

/// Flatten a value into a `Vec<FlatEntry>`.
///
/// Traversal is depth-first, pre-order (parent before children).
#[must_use]
pub fn flatten(value: &Value) -> Vec<FlatEntry> {
    let mut result = Vec::new();
    flatten_value(value, String::new(), 0, &mut result);
    result
}

fn flatten_value(value: &Value, path: String, depth: usize, out: &mut Vec<FlatEntry>) {
    out.push(FlatEntry {
        path: path.clone(),
        kind: value.kind(),
        preview: preview(value),
        depth,
        children_count: value.children_count(),
    });
    match value {
        Value::Map(entries) => {
            for (key, child) in entries {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_value(child, child_path, depth + 1, out);
            }
        }
        Value::Seq(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_value(child, format!("{path}[{i}]"), depth + 1, out);
            }
        }
        _ => {}
    }
}

/// One-line preview of a value for table cells.
fn preview(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Str(s) => format!("\"{s}\""),
        Value::Seq(items) => format!("[{} items]", items.len()),
        Value::Map(entries) => format!("{{{} entries}}", entries.len()),
        Value::Callable(name) => format!("[Function: {name}]"),
        Value::Opaque(type_name) => format!("[{type_name}]"),
    }
}
