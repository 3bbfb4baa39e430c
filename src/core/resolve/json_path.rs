use serde_json::{Map, Value};

use crate::core::DottedKey;

/// Walk `key` segment by segment from `root`.
///
/// Every step but the last must land on an object that has the segment as a
/// property. Returns `None` on a missing property or a premature non-object.
pub fn resolve_dotted_path<'a>(root: &'a Map<String, Value>, key: &DottedKey) -> Option<&'a Value> {
    let mut segments = key.segments();
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Display form of a resolved value: string content for strings, trimmed
/// JSON text for everything else.
pub fn stringify_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string().trim().to_string(),
    }
}
